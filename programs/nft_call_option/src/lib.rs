use anchor_lang::prelude::*;

use instructions::*;

pub mod errors;
pub mod instructions;
pub mod utils;


// Re-export at crate root for Anchor's macro expansion
pub use instructions::{
    ExpirationScan, Instrument, InstrumentTransfer, OptionIssue, OptionRecord, OptionSettle,
    OptionStore, StoreInitialize,
};


declare_id!("6A7QC2hCdHX5pehxtssoY811Y4DF9GgfHoVJ58zZ2A7u");


#[program]
pub mod nft_call_option {
    use super::*;


    /// InitializeStore: creates the OptionStore singleton (identifier counter starts at 1)
    pub fn initialize_store(ctx: Context<StoreInitialize>) -> Result<()> {
        instructions::initialize_store::handler(ctx)
    }

    /// Issue: escrow a non-fungible asset → option record + instrument held by the issuer.
    /// Returns the new option identifier.
    pub fn issue_option(ctx: Context<OptionIssue>, strike_price: u64, expires_at: i64) -> Result<u64> {
        instructions::issue_option::handler(ctx, strike_price, expires_at)
    }

    /// TransferInstrument: current holder hands the option to someone else
    pub fn transfer_instrument(
        ctx: Context<InstrumentTransfer>,
        option_id: u64,
        new_holder: Pubkey,
    ) -> Result<()> {
        instructions::transfer_instrument::handler(ctx, option_id, new_holder)
    }

    /// ResolveByHolder: burn the option, asset back to the original owner
    pub fn resolve_by_holder(ctx: Context<OptionSettle>, option_id: u64) -> Result<()> {
        instructions::resolve::handler(ctx, option_id)
    }

    /// Exercise: burn the option, pay exactly the strike → receive the asset
    pub fn exercise(ctx: Context<OptionSettle>, option_id: u64, payment: u64) -> Result<()> {
        instructions::exercise::handler(ctx, option_id, payment)
    }

    /// FindDueExpiration: read-only scan for the first due option in a window of records
    pub fn find_due_expiration(ctx: Context<ExpirationScan>, first_id: u64) -> Result<Option<u64>> {
        instructions::find_due_expiration::handler(ctx, first_id)
    }

    /// CommitExpiration: permissionless; re-validates expiry, then returns the asset
    /// to the original owner
    pub fn commit_expiration(ctx: Context<OptionSettle>, option_id: u64) -> Result<()> {
        instructions::commit_expiration::handler(ctx, option_id)
    }
}
