use crate::instructions::OptionStore;

/// Signer seeds for the OptionStore PDA
/// Used whenever the program moves an asset: out of an issuer's account as the
/// approved delegate, or out of an escrow vault as its owner.
pub fn option_store_signer_seeds(bump: &[u8; 1]) -> [&[u8]; 2] {
    [OptionStore::PREFIX, &bump[..]]
}
