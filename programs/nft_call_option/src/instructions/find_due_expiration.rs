use anchor_lang::prelude::*;

use crate::instructions::{ExpirationScan, OptionRecord};
use crate::utils::settlement::first_due;

/// Phase 1 of the expiration trigger: read-only scan for a due option
///
/// `remaining_accounts` carries the record PDAs for `first_id`, `first_id + 1`, ...
/// Each one must be the PDA of the identifier it stands for; identifiers that
/// were never allocated are not scanned. Writes nothing.
pub fn handler(ctx: Context<ExpirationScan>, first_id: u64) -> Result<Option<u64>> {
    let now = Clock::get()?.unix_timestamp;
    let ids = first_id.max(1)..ctx.accounts.option_store.next_option_id;

    let window = ctx
        .remaining_accounts
        .iter()
        .zip(ids)
        .map(|(info, option_id)| -> Result<(u64, Option<OptionRecord>)> {
            let record = OptionRecord::lookup(info)?;
            OptionRecord::verify_slot(info.key, option_id, record.as_ref())?;
            Ok((option_id, record))
        });

    let due = first_due(window, now)?;
    match due {
        Some(option_id) => msg!("Option {} is due for expiration", option_id),
        None => msg!("No due option in window starting at {}", first_id),
    }

    Ok(due)
}
