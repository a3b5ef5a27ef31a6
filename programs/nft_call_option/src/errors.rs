use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // Authorization
    #[msg("Caller does not own the underlying asset")]
    NotAssetOwner,

    #[msg("Option store is not approved to move the underlying asset")]
    NotApproved,

    #[msg("Caller does not hold the option instrument")]
    NotInstrumentHolder,

    #[msg("Original owner cannot exercise their own option")]
    SelfExercise,

    // Validity
    #[msg("Expiration must be in the future")]
    InvalidExpiration,

    #[msg("Option does not exist")]
    UnknownOption,

    #[msg("Option has not expired yet")]
    NotYetExpired,

    #[msg("Option has expired and can no longer be exercised")]
    OptionExpired,

    // Payment
    #[msg("Payment must equal the strike price exactly")]
    IncorrectPayment,

    // Account validation
    #[msg("Underlying asset must be a non-fungible token (0 decimals, supply 1)")]
    NotNonFungible,

    #[msg("Asset accounts do not match the option record")]
    AssetMismatch,

    #[msg("Recipient token account is not owned by the settlement recipient")]
    InvalidRecipient,

    #[msg("Original owner account does not match the option record")]
    InvalidOriginalOwner,

    #[msg("Account is not the option record for the scanned identifier")]
    RecordAccountMismatch,

    #[msg("Option identifier space exhausted")]
    IdentifierOverflow,

    #[msg("Math operation overflow")]
    MathOverflow,
}
