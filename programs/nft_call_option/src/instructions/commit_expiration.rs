use anchor_lang::prelude::*;

use crate::instructions::{settle, OptionSettle};
use crate::utils::settlement::authorize_expiration;

/// Phase 2 of the expiration trigger: anyone may commit a due expiration
/// Re-validates existence and expiry against the clock; never trusts a prior scan
pub fn handler(ctx: Context<OptionSettle>, option_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let (record, instrument) = settle::load_option(&ctx.accounts)?;
    let settlement = authorize_expiration(record, instrument, now)?;

    msg!(
        "Committing expiration of option {} (triggered by {} at {})",
        option_id,
        ctx.accounts.caller.key(),
        now
    );
    settle::execute(&ctx.accounts, &settlement)
}
