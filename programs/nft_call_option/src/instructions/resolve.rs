use anchor_lang::prelude::*;

use crate::instructions::{settle, OptionSettle};
use crate::utils::settlement::authorize_resolve;

/// Voluntary resolution: the current holder returns the option
/// Holder gives up the instrument → escrowed asset goes back to the original owner
pub fn handler(ctx: Context<OptionSettle>, option_id: u64) -> Result<()> {
    let (record, instrument) = settle::load_option(&ctx.accounts)?;
    let settlement = authorize_resolve(record, instrument, &ctx.accounts.caller.key())?;

    msg!("Holder {} resolving option {}", ctx.accounts.caller.key(), option_id);
    settle::execute(&ctx.accounts, &settlement)
}
