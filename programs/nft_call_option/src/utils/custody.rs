use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token_interface::{self as token, Mint, TokenAccount, TokenInterface};

/// Ownership and approval queries against the registry that custodies an asset.
///
/// Implemented for SPL token accounts (classic Token and Token-2022 alike); the
/// issuance checks only depend on this trait.
pub trait AssetCustodian {
    /// Principal currently owning `asset` according to this custody record, if any.
    fn owner_of(&self, asset: &Pubkey) -> Option<Pubkey>;

    /// Whether `operator` may move `asset` on the owner's behalf.
    fn is_approved_for_transfer_by(&self, asset: &Pubkey, operator: &Pubkey) -> bool;
}

impl AssetCustodian for TokenAccount {
    fn owner_of(&self, asset: &Pubkey) -> Option<Pubkey> {
        (self.mint == *asset && self.amount == 1).then_some(self.owner)
    }

    fn is_approved_for_transfer_by(&self, asset: &Pubkey, operator: &Pubkey) -> bool {
        self.mint == *asset
            && self.delegate == COption::Some(*operator)
            && self.delegated_amount >= 1
    }
}

/// Moves the single unit of an asset between token accounts through the
/// custodian program. `authority` is always the OptionStore PDA, signing either
/// as the issuer's approved delegate or as the escrow vault owner.
pub fn transfer_asset<'info>(
    asset_program: &Interface<'info, TokenInterface>,
    asset_mint: &InterfaceAccount<'info, Mint>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token::transfer_checked(
        CpiContext::new_with_signer(
            asset_program.to_account_info(),
            token::TransferChecked {
                from,
                mint: asset_mint.to_account_info(),
                to,
                authority,
            },
            signer_seeds,
        ),
        1,
        asset_mint.decimals,
    )
}
