use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::instructions::{Instrument, OptionRecord, OptionSettle};
use crate::utils::{
    accounts::{release_rent, tombstone_account},
    custody::transfer_asset,
    pda::option_store_signer_seeds,
    settlement::{Settlement, SettlementAccounts},
};

/// Current record and instrument behind the settle context, `None` once settled
pub fn load_option(accounts: &OptionSettle) -> Result<(Option<OptionRecord>, Option<Instrument>)> {
    Ok((
        OptionRecord::lookup(&accounts.option_record)?,
        Instrument::lookup(&accounts.instrument)?,
    ))
}

/// Executes an authorized settlement
///
/// The record and instrument are tombstoned before any value leaves the
/// program, so nothing observed during the asset or payment transfer can
/// settle the same option again. Their rent is released only after the last
/// CPI: the runtime rejects a CPI when lamports moved between accounts it
/// was not handed.
pub fn execute(accounts: &OptionSettle, settlement: &Settlement) -> Result<()> {
    let record = &settlement.record;

    settlement.verify_accounts(&SettlementAccounts {
        original_owner: accounts.original_owner.key(),
        asset_mint: accounts.asset_mint.key(),
        asset_program: accounts.asset_program.key(),
        recipient_owner: accounts.recipient_asset_account.owner,
    })?;

    let original_owner = accounts.original_owner.to_account_info();
    let instrument = accounts.instrument.to_account_info();
    let option_record = accounts.option_record.to_account_info();

    // 1. Terminate the option: instrument and record read as absent from here on
    tombstone_account(&instrument)?;
    tombstone_account(&option_record)?;

    // 2. Release the asset from escrow (OptionStore PDA signs as vault owner)
    let bump = [accounts.option_store.bump];
    let seeds = option_store_signer_seeds(&bump);
    let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

    transfer_asset(
        &accounts.asset_program,
        &accounts.asset_mint,
        accounts.escrow_vault.to_account_info(),
        accounts.recipient_asset_account.to_account_info(),
        accounts.option_store.to_account_info(),
        signer_seeds,
    )?;

    // 3. Forward the strike payment to the original owner
    if settlement.payment > 0 {
        system_program::transfer(
            CpiContext::new(
                accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: accounts.caller.to_account_info(),
                    to: original_owner.clone(),
                },
            ),
            settlement.payment,
        )?;
    }

    // 4. Rent back to the issuer who paid it
    release_rent(&instrument, &original_owner)?;
    release_rent(&option_record, &original_owner)?;

    msg!(
        "Option {} {}: asset {} to {}, {} lamports to {}",
        record.option_id,
        settlement.resolution.as_str(),
        record.asset_mint,
        settlement.asset_recipient,
        settlement.payment,
        record.original_owner
    );

    Ok(())
}
