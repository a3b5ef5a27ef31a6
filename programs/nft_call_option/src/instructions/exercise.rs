use anchor_lang::prelude::*;

use crate::instructions::{settle, OptionSettle};
use crate::utils::settlement::authorize_exercise;

/// Exercises a call option by paying exactly the strike price before it expires
/// Holder pays strike (lamports) → receives the escrowed asset; option is burned first
pub fn handler(ctx: Context<OptionSettle>, option_id: u64, payment: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let (record, instrument) = settle::load_option(&ctx.accounts)?;
    let settlement = authorize_exercise(record, instrument, &ctx.accounts.caller.key(), payment, now)?;

    msg!(
        "Holder {} exercising option {} for {} lamports",
        ctx.accounts.caller.key(),
        option_id,
        payment
    );
    settle::execute(&ctx.accounts, &settlement)
}
