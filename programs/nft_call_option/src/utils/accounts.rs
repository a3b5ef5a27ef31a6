use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::ErrorCode;

/// Deserializes a program-owned account, treating an empty, closed or foreign
/// account as absent rather than as an error.
pub fn load_program_account<T>(info: &AccountInfo) -> Result<Option<T>>
where
    T: AccountDeserialize + Owner,
{
    if info.owner != &T::owner() || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    if is_tombstoned(&data) {
        return Ok(None);
    }
    T::try_deserialize(&mut &data[..]).map(Some)
}

/// A zeroed discriminator marks an account settled earlier in this instruction
fn is_tombstoned(data: &[u8]) -> bool {
    data.iter().take(8).all(|byte| *byte == 0)
}

/// Writes `value` back over an existing program-owned account.
pub fn store_program_account<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    value.try_serialize(&mut writer)
}

/// First half of closing an account: zeroes its data so `load_program_account`
/// reports it absent. Lamports stay put, so CPIs made afterwards still see
/// balanced accounts.
pub fn tombstone_account(info: &AccountInfo) -> Result<()> {
    info.try_borrow_mut_data()?.fill(0);
    Ok(())
}

/// Second half of closing an account: rent goes to `destination` and ownership
/// returns to the system program. Must follow every CPI of the instruction.
pub fn release_rent<'info>(info: &AccountInfo<'info>, destination: &AccountInfo<'info>) -> Result<()> {
    let rent = info.lamports();
    let credited = destination
        .lamports()
        .checked_add(rent)
        .ok_or(ErrorCode::MathOverflow)?;

    **destination.try_borrow_mut_lamports()? = credited;
    **info.try_borrow_mut_lamports()? = 0;

    info.assign(&system_program::ID);
    Ok(())
}
