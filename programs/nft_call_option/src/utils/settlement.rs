use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::instructions::{Instrument, OptionRecord};

/// How an option left the Active state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Holder handed the option back; asset returns to the original owner
    Reclaimed,
    /// Holder paid the strike; asset goes to the holder
    Exercised,
    /// Automation committed expiration; asset returns to the original owner
    Expired,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Reclaimed => "reclaimed",
            Resolution::Exercised => "exercised",
            Resolution::Expired => "expired",
        }
    }
}

/// Outcome of a successful authorization: what to close, where the asset
/// goes and how many lamports move to the original owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub record: OptionRecord,
    pub resolution: Resolution,
    pub asset_recipient: Pubkey,
    pub payment: u64,
}

/// Keys of the accounts a caller supplied to settle an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlementAccounts {
    pub original_owner: Pubkey,
    pub asset_mint: Pubkey,
    pub asset_program: Pubkey,
    pub recipient_owner: Pubkey,
}

impl Settlement {
    /// Supplied accounts must describe this option and route the asset to the
    /// settlement recipient.
    pub fn verify_accounts(&self, accounts: &SettlementAccounts) -> Result<()> {
        let record = &self.record;
        require_keys_eq!(accounts.original_owner, record.original_owner, ErrorCode::InvalidOriginalOwner);
        require_keys_eq!(accounts.asset_mint, record.asset_mint, ErrorCode::AssetMismatch);
        require_keys_eq!(accounts.asset_program, record.asset_program, ErrorCode::AssetMismatch);
        require_keys_eq!(accounts.recipient_owner, self.asset_recipient, ErrorCode::InvalidRecipient);
        Ok(())
    }
}

fn live(record: Option<OptionRecord>, instrument: Option<Instrument>) -> Result<(OptionRecord, Instrument)> {
    match (record, instrument) {
        (Some(record), Some(instrument)) => Ok((record, instrument)),
        _ => err!(ErrorCode::UnknownOption),
    }
}

/// Current holder hands the option back: the asset returns to the original owner
pub fn authorize_resolve(
    record: Option<OptionRecord>,
    instrument: Option<Instrument>,
    caller: &Pubkey,
) -> Result<Settlement> {
    let (record, instrument) = live(record, instrument)?;
    require_keys_eq!(instrument.holder, *caller, ErrorCode::NotInstrumentHolder);

    Ok(Settlement {
        asset_recipient: record.original_owner,
        record,
        resolution: Resolution::Reclaimed,
        payment: 0,
    })
}

/// Current holder (never the original owner) pays exactly the strike price
/// before `expires_at`
pub fn authorize_exercise(
    record: Option<OptionRecord>,
    instrument: Option<Instrument>,
    caller: &Pubkey,
    payment: u64,
    now: i64,
) -> Result<Settlement> {
    let (record, instrument) = live(record, instrument)?;
    require_keys_eq!(instrument.holder, *caller, ErrorCode::NotInstrumentHolder);
    require_keys_neq!(record.original_owner, *caller, ErrorCode::SelfExercise);
    require!(!record.is_due(now), ErrorCode::OptionExpired);
    require_eq!(payment, record.strike_price, ErrorCode::IncorrectPayment);

    Ok(Settlement {
        asset_recipient: *caller,
        record,
        resolution: Resolution::Exercised,
        payment,
    })
}

/// Forced expiration: re-validated at commit time, independent of the caller
pub fn authorize_expiration(
    record: Option<OptionRecord>,
    instrument: Option<Instrument>,
    now: i64,
) -> Result<Settlement> {
    let (record, _) = live(record, instrument)?;
    require!(record.is_due(now), ErrorCode::NotYetExpired);

    Ok(Settlement {
        asset_recipient: record.original_owner,
        record,
        resolution: Resolution::Expired,
        payment: 0,
    })
}

/// First identifier in `window` whose record exists and is due.
/// Stops at the first lookup error.
pub fn first_due<I>(window: I, now: i64) -> Result<Option<u64>>
where
    I: IntoIterator<Item = Result<(u64, Option<OptionRecord>)>>,
{
    for entry in window {
        let (option_id, record) = entry?;
        if record.is_some_and(|record| record.is_due(now)) {
            return Ok(Some(option_id));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        issuer: Pubkey,
        buyer: Pubkey,
        record: OptionRecord,
    }

    impl Fixture {
        fn new() -> Self {
            let issuer = Pubkey::new_unique();
            Self {
                issuer,
                buyer: Pubkey::new_unique(),
                record: OptionRecord {
                    option_id: 1,
                    original_owner: issuer,
                    asset_program: Pubkey::new_unique(),
                    asset_mint: Pubkey::new_unique(),
                    strike_price: 100,
                    expires_at: 2_000,
                    issued_at: 1_000,
                    bump: 255,
                },
            }
        }

        fn held_by(&self, holder: Pubkey) -> Option<Instrument> {
            Some(Instrument { option_id: 1, holder, bump: 254 })
        }
    }

    #[test]
    fn missing_record_or_instrument_is_unknown() {
        let fx = Fixture::new();
        let unknown: anchor_lang::error::Error = ErrorCode::UnknownOption.into();

        assert_eq!(authorize_resolve(None, fx.held_by(fx.issuer), &fx.issuer).unwrap_err(), unknown);
        assert_eq!(authorize_resolve(Some(fx.record.clone()), None, &fx.issuer).unwrap_err(), unknown);
        assert_eq!(authorize_exercise(None, None, &fx.buyer, 100, 1_500).unwrap_err(), unknown);
        assert_eq!(authorize_expiration(None, None, 5_000).unwrap_err(), unknown);
    }

    #[test]
    fn resolve_requires_current_holder() {
        let fx = Fixture::new();

        // Issuer transferred the instrument away: only the buyer may resolve
        let err = authorize_resolve(Some(fx.record.clone()), fx.held_by(fx.buyer), &fx.issuer).unwrap_err();
        assert_eq!(err, ErrorCode::NotInstrumentHolder.into());

        let settlement = authorize_resolve(Some(fx.record.clone()), fx.held_by(fx.buyer), &fx.buyer).unwrap();
        assert_eq!(settlement.resolution, Resolution::Reclaimed);
        assert_eq!(settlement.asset_recipient, fx.issuer);
        assert_eq!(settlement.payment, 0);
    }

    #[test]
    fn exercise_rejects_original_owner_even_as_holder() {
        let fx = Fixture::new();

        let err = authorize_exercise(Some(fx.record.clone()), fx.held_by(fx.issuer), &fx.issuer, 100, 1_500).unwrap_err();
        assert_eq!(err, ErrorCode::SelfExercise.into());
    }

    #[test]
    fn exercise_requires_exact_payment() {
        let fx = Fixture::new();

        for payment in [0, 99, 101, u64::MAX] {
            let err = authorize_exercise(Some(fx.record.clone()), fx.held_by(fx.buyer), &fx.buyer, payment, 1_500).unwrap_err();
            assert_eq!(err, ErrorCode::IncorrectPayment.into());
        }

        let settlement = authorize_exercise(Some(fx.record.clone()), fx.held_by(fx.buyer), &fx.buyer, 100, 1_500).unwrap();
        assert_eq!(settlement.resolution, Resolution::Exercised);
        assert_eq!(settlement.asset_recipient, fx.buyer);
        assert_eq!(settlement.payment, 100);
    }

    #[test]
    fn exercise_checks_holder_before_payment() {
        let fx = Fixture::new();
        let stranger = Pubkey::new_unique();

        let err = authorize_exercise(Some(fx.record.clone()), fx.held_by(fx.buyer), &stranger, 1, 1_500).unwrap_err();
        assert_eq!(err, ErrorCode::NotInstrumentHolder.into());
    }

    #[test]
    fn exercise_closes_exactly_at_expires_at() {
        let fx = Fixture::new();

        let settlement = authorize_exercise(Some(fx.record.clone()), fx.held_by(fx.buyer), &fx.buyer, 100, 1_999).unwrap();
        assert_eq!(settlement.resolution, Resolution::Exercised);

        for now in [2_000, 2_001, i64::MAX] {
            let err = authorize_exercise(Some(fx.record.clone()), fx.held_by(fx.buyer), &fx.buyer, 100, now).unwrap_err();
            assert_eq!(err, ErrorCode::OptionExpired.into());
        }

        // Holder and self-exercise checks still come first
        let err = authorize_exercise(Some(fx.record.clone()), fx.held_by(fx.issuer), &fx.issuer, 100, 5_000).unwrap_err();
        assert_eq!(err, ErrorCode::SelfExercise.into());
        let err = authorize_exercise(Some(fx.record.clone()), fx.held_by(fx.buyer), &fx.buyer, 1, 5_000).unwrap_err();
        assert_eq!(err, ErrorCode::OptionExpired.into());
    }

    fn supplied(settlement: &Settlement) -> SettlementAccounts {
        SettlementAccounts {
            original_owner: settlement.record.original_owner,
            asset_mint: settlement.record.asset_mint,
            asset_program: settlement.record.asset_program,
            recipient_owner: settlement.asset_recipient,
        }
    }

    #[test]
    fn settlement_accounts_must_match_the_record() {
        let fx = Fixture::new();
        let settlement = authorize_exercise(Some(fx.record.clone()), fx.held_by(fx.buyer), &fx.buyer, 100, 1_500).unwrap();
        assert!(settlement.verify_accounts(&supplied(&settlement)).is_ok());

        let mut accounts = supplied(&settlement);
        accounts.original_owner = fx.buyer;
        assert_eq!(settlement.verify_accounts(&accounts).unwrap_err(), ErrorCode::InvalidOriginalOwner.into());

        let mut accounts = supplied(&settlement);
        accounts.asset_mint = Pubkey::new_unique();
        assert_eq!(settlement.verify_accounts(&accounts).unwrap_err(), ErrorCode::AssetMismatch.into());

        let mut accounts = supplied(&settlement);
        accounts.asset_program = Pubkey::new_unique();
        assert_eq!(settlement.verify_accounts(&accounts).unwrap_err(), ErrorCode::AssetMismatch.into());

        // Exercised asset must land in the holder's account, not the issuer's
        let mut accounts = supplied(&settlement);
        accounts.recipient_owner = fx.issuer;
        assert_eq!(settlement.verify_accounts(&accounts).unwrap_err(), ErrorCode::InvalidRecipient.into());
    }

    #[test]
    fn reclaimed_asset_must_land_with_the_original_owner() {
        let fx = Fixture::new();
        let settlement = authorize_resolve(Some(fx.record.clone()), fx.held_by(fx.buyer), &fx.buyer).unwrap();

        let mut accounts = supplied(&settlement);
        assert_eq!(accounts.recipient_owner, fx.issuer);
        assert!(settlement.verify_accounts(&accounts).is_ok());

        accounts.recipient_owner = fx.buyer;
        assert_eq!(settlement.verify_accounts(&accounts).unwrap_err(), ErrorCode::InvalidRecipient.into());
    }

    #[test]
    fn expiration_opens_exactly_at_expires_at() {
        let fx = Fixture::new();

        let err = authorize_expiration(Some(fx.record.clone()), fx.held_by(fx.buyer), 1_999).unwrap_err();
        assert_eq!(err, ErrorCode::NotYetExpired.into());

        for now in [2_000, 2_001, i64::MAX] {
            let settlement = authorize_expiration(Some(fx.record.clone()), fx.held_by(fx.buyer), now).unwrap();
            assert_eq!(settlement.resolution, Resolution::Expired);
            assert_eq!(settlement.asset_recipient, fx.issuer);
        }
    }

    #[test]
    fn first_due_skips_missing_and_live_records() {
        let fx = Fixture::new();
        let mut later = fx.record.clone();
        later.option_id = 3;
        later.expires_at = 9_000;
        let mut due = fx.record.clone();
        due.option_id = 4;

        let window: Vec<Result<(u64, Option<OptionRecord>)>> = vec![
            Ok((1, None)),
            Ok((2, None)),
            Ok((3, Some(later.clone()))),
            Ok((4, Some(due))),
        ];
        assert_eq!(first_due(window, 2_500).unwrap(), Some(4));

        let window: Vec<Result<(u64, Option<OptionRecord>)>> = vec![Ok((1, None)), Ok((3, Some(later)))];
        assert_eq!(first_due(window, 2_500).unwrap(), None);

        assert_eq!(first_due(Vec::<Result<(u64, Option<OptionRecord>)>>::new(), 2_500).unwrap(), None);
    }

    #[test]
    fn first_due_surfaces_lookup_errors() {
        let window: Vec<Result<(u64, Option<OptionRecord>)>> =
            vec![Ok((1, None)), err!(ErrorCode::RecordAccountMismatch)];

        let err = first_due(window, 0).unwrap_err();
        assert_eq!(err, ErrorCode::RecordAccountMismatch.into());
    }
}
