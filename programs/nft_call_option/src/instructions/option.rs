use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::errors::ErrorCode;
use crate::utils::accounts::{load_program_account, store_program_account};

/// Seed prefix of the per-asset escrow vault (token account owned by the OptionStore PDA)
pub const ESCROW_PREFIX: &[u8] = b"escrow";

/// Singleton holding the identifier counter
///
/// PDA Seeds: "option_store"
///
/// The store PDA is also the escrow authority: issuers approve it as delegate on
/// their asset account, and it signs every transfer out of the escrow vaults.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct OptionStore {
    pub next_option_id: u64,          // Next identifier to allocate (starts at 1, 0 = no option)
    pub bump: u8,                     // PDA bump seed
}

impl OptionStore {
    pub const PREFIX: &'static [u8] = b"option_store";

    pub fn space() -> usize {
        8 + // discriminator
        8 + // next_option_id
        1   // bump
    }

    /// Hands out the current identifier and advances the counter.
    /// Identifiers are never reused, so the counter refuses to wrap.
    pub fn allocate_id(&mut self) -> Result<u64> {
        let option_id = self.next_option_id;
        self.next_option_id = option_id
            .checked_add(1)
            .ok_or(ErrorCode::IdentifierOverflow)?;
        Ok(option_id)
    }
}

/// Issuance record of one option. Written once by `issue_option`, closed on resolution.
///
/// PDA Seeds:
/// - "option_record"
/// - option_id (u64 LE)
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct OptionRecord {
    pub option_id: u64,
    pub original_owner: Pubkey,       // Principal who escrowed the asset
    pub asset_program: Pubkey,        // Custodian: token program owning the asset mint
    pub asset_mint: Pubkey,           // Asset: the non-fungible mint
    pub strike_price: u64,            // Exact lamports required to exercise
    pub expires_at: i64,              // Forced expiration allowed from this timestamp on
    pub issued_at: i64,
    pub bump: u8,
}

impl OptionRecord {
    pub const PREFIX: &'static [u8] = b"option_record";

    pub fn space() -> usize {
        8 + // discriminator
        8 + // option_id
        32 + // original_owner
        32 + // asset_program
        32 + // asset_mint
        8 + // strike_price
        8 + // expires_at
        8 + // issued_at
        1   // bump
    }

    pub fn address(option_id: u64) -> Pubkey {
        Pubkey::find_program_address(&[Self::PREFIX, &option_id.to_le_bytes()], &crate::ID).0
    }

    /// `None` when the account was never created or has been closed.
    pub fn lookup(info: &AccountInfo) -> Result<Option<Self>> {
        load_program_account(info)
    }

    /// Checks that `key` is the record PDA for `option_id`. A live record is
    /// checked against its stored bump; only empty slots pay for the bump search.
    pub fn verify_slot(key: &Pubkey, option_id: u64, record: Option<&Self>) -> Result<()> {
        let expected = match record {
            Some(record) => {
                require_eq!(record.option_id, option_id, ErrorCode::RecordAccountMismatch);
                Pubkey::create_program_address(
                    &[Self::PREFIX, &option_id.to_le_bytes(), &[record.bump]],
                    &crate::ID,
                )
                .map_err(|_| error!(ErrorCode::RecordAccountMismatch))?
            }
            None => Self::address(option_id),
        };
        require_keys_eq!(*key, expected, ErrorCode::RecordAccountMismatch);
        Ok(())
    }

    pub fn is_due(&self, now: i64) -> bool {
        now >= self.expires_at
    }
}

/// Instrument registry entry: who currently holds the option.
///
/// PDA Seeds:
/// - "instrument"
/// - option_id (u64 LE)
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Instrument {
    pub option_id: u64,
    pub holder: Pubkey,
    pub bump: u8,
}

impl Instrument {
    pub const PREFIX: &'static [u8] = b"instrument";

    pub fn space() -> usize {
        8 + // discriminator
        8 + // option_id
        32 + // holder
        1   // bump
    }

    pub fn lookup(info: &AccountInfo) -> Result<Option<Self>> {
        load_program_account(info)
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        store_program_account(info, self)
    }
}

#[derive(Accounts)]
pub struct StoreInitialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = OptionStore::space(),
        seeds = [OptionStore::PREFIX],
        bump
    )]
    pub option_store: Account<'info, OptionStore>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct OptionIssue<'info> {
    #[account(mut)]
    pub issuer: Signer<'info>,

    #[account(
        mut,
        seeds = [OptionStore::PREFIX],
        bump = option_store.bump
    )]
    pub option_store: Account<'info, OptionStore>,

    /// Record PDA for the identifier about to be allocated
    #[account(
        init,
        payer = issuer,
        space = OptionRecord::space(),
        seeds = [
            OptionRecord::PREFIX,
            option_store.next_option_id.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub option_record: Account<'info, OptionRecord>,

    #[account(
        init,
        payer = issuer,
        space = Instrument::space(),
        seeds = [
            Instrument::PREFIX,
            option_store.next_option_id.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub instrument: Account<'info, Instrument>,

    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Issuer's account holding the asset; ownership and approval are checked in the handler
    #[account(
        mut,
        constraint = issuer_asset_account.mint == asset_mint.key() @ ErrorCode::AssetMismatch
    )]
    pub issuer_asset_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Escrow vault for this mint, reused across options over the same asset
    #[account(
        init_if_needed,
        payer = issuer,
        seeds = [ESCROW_PREFIX, asset_mint.key().as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = option_store,
        token::token_program = asset_program,
    )]
    pub escrow_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub asset_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Shared accounts for every path that resolves an option
/// (voluntary resolution, exercise, forced expiration)
///
/// Record and instrument are unchecked so that a settled option surfaces as
/// `UnknownOption` from the handler instead of an account deserialization error.
#[derive(Accounts)]
#[instruction(option_id: u64)]
pub struct OptionSettle<'info> {
    #[account(mut)]
    pub caller: Signer<'info>,

    #[account(
        seeds = [OptionStore::PREFIX],
        bump = option_store.bump
    )]
    pub option_store: Account<'info, OptionStore>,

    /// CHECK: PDA checked by seeds, contents looked up in the handler
    #[account(
        mut,
        seeds = [OptionRecord::PREFIX, option_id.to_le_bytes().as_ref()],
        bump
    )]
    pub option_record: UncheckedAccount<'info>,

    /// CHECK: PDA checked by seeds, contents looked up in the handler
    #[account(
        mut,
        seeds = [Instrument::PREFIX, option_id.to_le_bytes().as_ref()],
        bump
    )]
    pub instrument: UncheckedAccount<'info>,

    /// CHECK: compared against the record in the handler; receives rent and strike payment
    #[account(mut)]
    pub original_owner: UncheckedAccount<'info>,

    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        seeds = [ESCROW_PREFIX, asset_mint.key().as_ref()],
        bump,
        constraint = escrow_vault.mint == asset_mint.key() @ ErrorCode::AssetMismatch
    )]
    pub escrow_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token account of whoever receives the asset (exerciser or original owner)
    #[account(
        mut,
        constraint = recipient_asset_account.mint == asset_mint.key() @ ErrorCode::AssetMismatch
    )]
    pub recipient_asset_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub asset_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(option_id: u64)]
pub struct InstrumentTransfer<'info> {
    pub holder: Signer<'info>,

    /// CHECK: PDA checked by seeds, contents looked up in the handler
    #[account(
        mut,
        seeds = [Instrument::PREFIX, option_id.to_le_bytes().as_ref()],
        bump
    )]
    pub instrument: UncheckedAccount<'info>,
}

/// Read-only scan context. Record PDAs for consecutive identifiers are passed
/// as remaining accounts.
#[derive(Accounts)]
pub struct ExpirationScan<'info> {
    #[account(
        seeds = [OptionStore::PREFIX],
        bump = option_store.bump
    )]
    pub option_store: Account<'info, OptionStore>,
}
