use chrono::NaiveDate;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StayQuote {
    pub nights: u32,
    pub total_price: f64,
}

/// Prices a completed check-in/check-out pair. One night per elapsed day;
/// the check-out day itself is not charged.
///
/// `check_out <= check_in` is an error rather than a zero-night quote.
/// The total keeps the native float precision of the nightly rate.
pub fn quote(
    check_in: NaiveDate,
    check_out: NaiveDate,
    nightly_rate: f64,
) -> Result<StayQuote, AppError> {
    let nights = (check_out - check_in).num_days();
    if nights <= 0 {
        return Err(AppError::InvalidRange);
    }

    Ok(StayQuote {
        nights: nights as u32,
        total_price: nights as f64 * nightly_rate,
    })
}
