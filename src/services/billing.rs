// src/services/billing.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{reports::ClosedStayRate, stays::StayCharge};

/// Bills whole nights between the two dates. A stay that ends on the day it began
/// (or earlier) is billed as one night.
pub fn compute_charge(check_in: NaiveDate, check_out: NaiveDate, nightly_rate: Decimal) -> StayCharge {
    let nights = (check_out - check_in).num_days().max(1);

    StayCharge {
        nights,
        nightly_rate,
        total: Decimal::from(nights) * nightly_rate,
    }
}

/// Sum of the charges of all closed stays, rounded to cents.
pub fn total_income(stays: &[ClosedStayRate]) -> Decimal {
    stays
        .iter()
        .map(|s| compute_charge(s.check_in_date, s.check_out_date, s.nightly_rate).total)
        .sum::<Decimal>()
        .round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_stay_is_billed_one_night() {
        let charge = compute_charge(date(2024, 1, 1), date(2024, 1, 1), Decimal::from(100));
        assert_eq!(charge.nights, 1);
        assert_eq!(charge.total, Decimal::from(100));
    }

    #[test]
    fn three_night_stay() {
        let charge = compute_charge(date(2024, 1, 1), date(2024, 1, 4), Decimal::from(100));
        assert_eq!(charge.nights, 3);
        assert_eq!(charge.total, Decimal::from(300));
    }

    #[test]
    fn check_out_before_check_in_still_bills_one_night() {
        let charge = compute_charge(date(2024, 3, 5), date(2024, 3, 1), Decimal::from(80));
        assert_eq!(charge.nights, 1);
        assert_eq!(charge.total, Decimal::from(80));
    }

    #[test]
    fn stays_across_month_ends_count_calendar_days() {
        let charge = compute_charge(date(2024, 2, 27), date(2024, 3, 2), Decimal::from(50));
        assert_eq!(charge.nights, 4); // 2024 is a leap year
    }

    #[test]
    fn income_sums_closed_stays_and_rounds_to_cents() {
        let rate = Decimal::from_str("33.333").unwrap();
        let stays = vec![
            ClosedStayRate {
                check_in_date: date(2024, 1, 1),
                check_out_date: date(2024, 1, 1),
                nightly_rate: rate,
            },
            ClosedStayRate {
                check_in_date: date(2024, 1, 1),
                check_out_date: date(2024, 1, 3),
                nightly_rate: rate,
            },
        ];

        assert_eq!(total_income(&stays), Decimal::from_str("100.00").unwrap());
        assert_eq!(total_income(&[]), Decimal::ZERO);
    }
}
