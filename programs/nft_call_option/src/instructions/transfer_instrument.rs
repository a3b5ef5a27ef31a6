use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::instructions::{Instrument, InstrumentTransfer};

/// Moves the option instrument to a new holder; the escrowed asset is untouched
pub fn handler(ctx: Context<InstrumentTransfer>, option_id: u64, new_holder: Pubkey) -> Result<()> {
    let mut instrument = Instrument::lookup(&ctx.accounts.instrument)?
        .ok_or(ErrorCode::UnknownOption)?;
    require_keys_eq!(instrument.holder, ctx.accounts.holder.key(), ErrorCode::NotInstrumentHolder);

    instrument.holder = new_holder;
    instrument.store(&ctx.accounts.instrument)?;

    msg!(
        "Option {} instrument transferred from {} to {}",
        option_id,
        ctx.accounts.holder.key(),
        new_holder
    );

    Ok(())
}
