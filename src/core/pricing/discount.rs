//! Discount code interpretation
//!
//! Percentage discount rates are encoded in the code text itself: the
//! trailing two characters are the percent value, so `SAVE10` means 10%
//! and `PROMO05` means 5%. The platform-reported amount field is not
//! consulted for percentage discounts.

use crate::domain::errors::SyncError;
use crate::domain::result::Result;
use rust_decimal::Decimal;

/// Parse the percentage rate encoded in a discount code
///
/// Returns the rate as a fraction (`SAVE10` -> `0.10`). A leading zero is
/// honored (`PROMO05` -> `0.05`).
///
/// # Errors
///
/// Returns `SyncError::Pricing` when the code is shorter than two
/// characters or its trailing two characters are not digits. An order
/// carrying an unparseable percentage code aborts the run so it can be
/// corrected upstream rather than priced wrongly.
pub fn percentage_rate(code: &str) -> Result<Decimal> {
    let trimmed = code.trim();
    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() < 2 {
        return Err(SyncError::Pricing(format!(
            "Discount code '{code}' is too short to carry a percentage suffix"
        )));
    }

    let suffix: String = chars[chars.len() - 2..].iter().collect();
    let percent: u32 = suffix.parse().map_err(|_| {
        SyncError::Pricing(format!(
            "Discount code '{code}' does not end in a two-digit percentage"
        ))
    })?;

    Ok(Decimal::new(percent as i64, 2))
}
