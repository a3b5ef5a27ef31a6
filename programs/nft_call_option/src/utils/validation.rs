use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::utils::custody::AssetCustodian;

/// Validates that the asset mint describes a single non-fungible token
pub fn validate_non_fungible(decimals: u8, supply: u64) -> Result<()> {
    require!(decimals == 0 && supply == 1, ErrorCode::NotNonFungible);
    Ok(())
}

/// Validates that expiration is strictly after the current clock time
pub fn validate_expiration(expires_at: i64, now: i64) -> Result<()> {
    require!(expires_at > now, ErrorCode::InvalidExpiration);
    Ok(())
}

/// Issuance preconditions, in order: caller owns the asset, the engine is
/// approved to move it, expiration lies in the future
pub fn validate_issue<C: AssetCustodian>(
    custodian: &C,
    asset: &Pubkey,
    caller: &Pubkey,
    engine: &Pubkey,
    expires_at: i64,
    now: i64,
) -> Result<()> {
    require!(
        custodian.owner_of(asset) == Some(*caller),
        ErrorCode::NotAssetOwner
    );
    require!(
        custodian.is_approved_for_transfer_by(asset, engine),
        ErrorCode::NotApproved
    );
    validate_expiration(expires_at, now)
}
