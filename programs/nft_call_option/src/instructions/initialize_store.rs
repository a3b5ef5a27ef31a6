use anchor_lang::prelude::*;

use crate::instructions::StoreInitialize;

/// Creates the OptionStore singleton; identifiers start at 1 (0 means "no option")
pub fn handler(ctx: Context<StoreInitialize>) -> Result<()> {
    let option_store = &mut ctx.accounts.option_store;
    option_store.next_option_id = 1;
    option_store.bump = ctx.bumps.option_store;

    msg!("Initialized option store {}", option_store.key());

    Ok(())
}
