use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;

use crate::instructions::OptionIssue;
use crate::utils::{
    custody::transfer_asset,
    pda::option_store_signer_seeds,
    validation::{validate_issue, validate_non_fungible},
};

/// Escrows the issuer's asset and mints a new option over it
/// Issuer's delegate-approved asset → escrow vault, instrument + record created for the next id
pub fn handler(ctx: Context<OptionIssue>, strike_price: u64, expires_at: i64) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let issuer = ctx.accounts.issuer.key();
    let asset_mint = ctx.accounts.asset_mint.key();
    let engine = ctx.accounts.option_store.key();

    // Validation
    validate_non_fungible(ctx.accounts.asset_mint.decimals, ctx.accounts.asset_mint.supply)?;
    let issuer_asset_account: &TokenAccount = &ctx.accounts.issuer_asset_account;
    validate_issue(issuer_asset_account, &asset_mint, &issuer, &engine, expires_at, now)?;

    // 1. Move the asset into escrow (OptionStore PDA signs as approved delegate)
    let bump = [ctx.accounts.option_store.bump];
    let seeds = option_store_signer_seeds(&bump);
    let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

    msg!("Escrowing asset {} from {}", asset_mint, issuer);
    transfer_asset(
        &ctx.accounts.asset_program,
        &ctx.accounts.asset_mint,
        ctx.accounts.issuer_asset_account.to_account_info(),
        ctx.accounts.escrow_vault.to_account_info(),
        ctx.accounts.option_store.to_account_info(),
        signer_seeds,
    )?;

    // 2. Allocate the identifier the record and instrument PDAs were derived from
    let option_id = ctx.accounts.option_store.allocate_id()?;

    // 3. Instrument goes to the issuer
    let instrument = &mut ctx.accounts.instrument;
    instrument.option_id = option_id;
    instrument.holder = issuer;
    instrument.bump = ctx.bumps.instrument;

    // 4. Issuance record
    let option_record = &mut ctx.accounts.option_record;
    option_record.option_id = option_id;
    option_record.original_owner = issuer;
    option_record.asset_program = ctx.accounts.asset_program.key();
    option_record.asset_mint = asset_mint;
    option_record.strike_price = strike_price;
    option_record.expires_at = expires_at;
    option_record.issued_at = now;
    option_record.bump = ctx.bumps.option_record;

    msg!(
        "Issued option {} over {} (strike {} lamports, expires {})",
        option_id,
        asset_mint,
        strike_price,
        expires_at
    );

    Ok(option_id)
}
