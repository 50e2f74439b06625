//! Exact decimal-to-base-unit conversion.
//!
//! `"1.5"` at 6 decimals is `1500000`. Fractional digits beyond the token's
//! precision are an error unless they are all zeros; nothing is rounded.

use ethers::types::U256;

use crate::shared::error::{PayError, PayResult};

/// Convert a decimal amount string into the integer number of base units
/// for a token with the given precision.
pub fn to_base_units(amount: &str, decimals: u8) -> PayResult<U256> {
    let (int_part, frac_part) =
        split_decimal(amount).map_err(|reason| PayError::amount_conversion(amount, decimals, reason))?;

    let precision = decimals as usize;
    let (kept, excess) = if frac_part.len() > precision {
        frac_part.split_at(precision)
    } else {
        (frac_part, "")
    };
    if excess.bytes().any(|b| b != b'0') {
        return Err(PayError::amount_conversion(
            amount,
            decimals,
            format!("more than {decimals} decimal places"),
        ));
    }

    let too_large = || PayError::amount_conversion(amount, decimals, "amount too large");

    let int_digits = int_part.trim_start_matches('0');
    let mut units = if int_digits.is_empty() {
        U256::zero()
    } else {
        let scale = U256::from(10u8)
            .checked_pow(U256::from(u64::from(decimals)))
            .ok_or_else(too_large)?;
        let whole = U256::from_dec_str(int_digits).map_err(|_| too_large())?;
        whole.checked_mul(scale).ok_or_else(too_large)?
    };

    let mut frac_digits = kept.to_string();
    frac_digits.push_str(&"0".repeat(precision - kept.len()));
    let frac_digits = frac_digits.trim_start_matches('0');
    if !frac_digits.is_empty() {
        let frac = U256::from_dec_str(frac_digits).map_err(|_| too_large())?;
        units = units.checked_add(frac).ok_or_else(too_large)?;
    }

    Ok(units)
}

/// Split on the decimal point, rejecting anything that is not plain
/// `digits[.digits]` (or `.digits` / `digits.`).
fn split_decimal(amount: &str) -> Result<(&str, &str), String> {
    if amount.is_empty() {
        return Err("empty amount".to_string());
    }
    let mut parts = amount.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next().unwrap_or("");
    if frac_part.contains('.') {
        return Err("more than one decimal point".to_string());
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return Err("no digits".to_string());
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err("not a decimal number".to_string());
    }
    Ok((int_part, frac_part))
}
