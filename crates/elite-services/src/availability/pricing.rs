//! Rental price calculation
//!
//! Must tolerate being called speculatively while a user is still picking
//! dates, so it never fails: anything it cannot price comes back as
//! [`Quote::ZERO`]. Whether the dates are acceptable is the validator's job.

use crate::constants::CURRENCY_SCALE;
use chrono::NaiveDate;
use elite_core::models::Quote;
use rust_decimal::{Decimal, RoundingStrategy};

/// Compute the billed days and total price for a rental
///
/// `days` is the absolute number of days between the two dates. Equal dates
/// give a zero quote. The total is rounded half-up to cents.
pub fn compute_quote(start: NaiveDate, end: NaiveDate, price_per_day: Decimal) -> Quote {
    let days = (end - start).num_days().abs();

    if days <= 0 || price_per_day < Decimal::ZERO {
        return Quote::ZERO;
    }

    match Decimal::from(days).checked_mul(price_per_day) {
        Some(total) => Quote {
            days,
            total_price: total
                .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero),
        },
        None => Quote::ZERO,
    }
}

/// Speculative form of [`compute_quote`] for half-filled forms
///
/// Returns the zero quote until both dates are known.
pub fn quote(start: Option<NaiveDate>, end: Option<NaiveDate>, price_per_day: Decimal) -> Quote {
    match (start, end) {
        (Some(start), Some(end)) => compute_quote(start, end, price_per_day),
        _ => Quote::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_three_day_rental() {
        let q = compute_quote(day(2024, 1, 1), day(2024, 1, 4), dec!(45.00));
        assert_eq!(q.days, 3);
        assert_eq!(q.total_price, dec!(135.00));
    }

    #[test]
    fn test_same_day_is_zero() {
        let d = day(2024, 1, 1);
        assert_eq!(compute_quote(d, d, dec!(50)), Quote::ZERO);
    }

    #[test]
    fn test_free_vehicle() {
        let q = compute_quote(day(2024, 1, 1), day(2024, 1, 8), Decimal::ZERO);
        assert_eq!(q.days, 7);
        assert_eq!(q.total_price, Decimal::ZERO);
    }

    #[test]
    fn test_reversed_dates_use_absolute_span() {
        let q = compute_quote(day(2024, 1, 4), day(2024, 1, 1), dec!(10));
        assert_eq!(q.days, 3);
        assert_eq!(q.total_price, dec!(30));
    }

    #[test]
    fn test_rounding_half_up() {
        // 3 * 33.335 = 100.005 -> 100.01
        let q = compute_quote(day(2024, 1, 1), day(2024, 1, 4), dec!(33.335));
        assert_eq!(q.total_price, dec!(100.01));

        // 3 * 33.3349 = 100.0047 -> 100.00
        let q = compute_quote(day(2024, 1, 1), day(2024, 1, 4), dec!(33.3349));
        assert_eq!(q.total_price, dec!(100.00));
    }

    #[test]
    fn test_negative_rate_is_zero() {
        assert_eq!(
            compute_quote(day(2024, 1, 1), day(2024, 1, 4), dec!(-5)),
            Quote::ZERO
        );
    }

    #[test]
    fn test_incomplete_input() {
        assert_eq!(quote(None, Some(day(2024, 1, 4)), dec!(45)), Quote::ZERO);
        assert_eq!(quote(Some(day(2024, 1, 1)), None, dec!(45)), Quote::ZERO);
        assert_eq!(quote(Some(day(2024, 1, 1)), Some(day(2024, 1, 2)), dec!(45)).days, 1);
    }

    proptest! {
        #[test]
        fn prop_quote_is_deterministic(
            a in 0i64..5000,
            b in 0i64..5000,
            cents in 0i64..1_000_000,
        ) {
            let base = day(2020, 1, 1);
            let start = base + chrono::Duration::days(a);
            let end = base + chrono::Duration::days(b);
            let price = Decimal::new(cents, 2);

            let first = compute_quote(start, end, price);
            let second = compute_quote(start, end, price);
            prop_assert_eq!(first, second);
            prop_assert_eq!(first.days, (a - b).abs());
            prop_assert_eq!(first.total_price, Decimal::from(first.days) * price);
        }
    }
}
