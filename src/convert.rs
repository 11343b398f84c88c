use crate::JalaliDate;
use crate::consts::{
    FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_BASE_YEAR, GREGORIAN_CENTURY_DAYS,
    GREGORIAN_CYCLE_DAYS, GREGORIAN_DAYS_IN_MONTH, GREGORIAN_EPOCH_SHIFT, GREGORIAN_QUAD_DAYS,
    JALALI_DAYS_IN_MONTH, JALALI_EPOCH_YEAR,
};
use crate::prelude::*;
use crate::types::elapsed_leap_days;

/// A proleptic Gregorian calendar date, produced by converting a
/// [`JalaliDate`]. Always a valid calendar date: month in 1..=12 and day
/// within the true length of that month.
///
/// Renders as ISO-8601 `YYYY-MM-DD` with zero-padded fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year: u16,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Returns the Gregorian year
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the Gregorian month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the Gregorian day of month
    pub const fn day(&self) -> u8 {
        self.day
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

const fn gregorian_month_length(month: u8, leap: bool) -> u8 {
    if month == FEBRUARY && leap {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

impl JalaliDate {
    /// Converts this Jalali date to its proleptic Gregorian equivalent.
    ///
    /// The conversion counts days from the rebased Jalali epoch with the
    /// 33-year leap cycle, shifts into the Gregorian day-count domain, then
    /// peels off 400-year, century, 4-year, and single-year cycles before
    /// walking the Gregorian month table.
    ///
    /// A day beyond the true length of its Jalali month is not rejected; it
    /// converts deterministically by rolling into the following month, the
    /// same way the day-count arithmetic treats any other overflow.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_gregorian(&self) -> GregorianDate {
        let year = i64::from(self.year()) - JALALI_EPOCH_YEAR;
        let month = i64::from(self.month()) - 1;
        let day = i64::from(self.day()) - 1;

        // Days since the rebased epoch: whole years plus their cycle leap
        // days, then the elapsed months of the current year, then the day.
        let mut days = 365 * year + elapsed_leap_days(i64::from(self.year()));
        for elapsed in 1..=month {
            days += i64::from(JALALI_DAYS_IN_MONTH[elapsed as usize]);
        }
        days += day;
        days += GREGORIAN_EPOCH_SHIFT;

        let mut gregorian_year = GREGORIAN_BASE_YEAR + 400 * days.div_euclid(GREGORIAN_CYCLE_DAYS);
        days = days.rem_euclid(GREGORIAN_CYCLE_DAYS);

        // Century years are not leap unless divisible by 400; the
        // increment branch keeps the flag for the cycle's final year.
        let mut leap = true;
        if days >= GREGORIAN_CENTURY_DAYS {
            days -= 1;
            gregorian_year += 100 * (days / GREGORIAN_CENTURY_DAYS);
            days %= GREGORIAN_CENTURY_DAYS;
            if days >= 365 {
                days += 1;
            } else {
                leap = false;
            }
        }

        gregorian_year += 4 * (days / GREGORIAN_QUAD_DAYS);
        days %= GREGORIAN_QUAD_DAYS;

        if days >= 366 {
            leap = false;
            days -= 1;
            gregorian_year += days / 365;
            days %= 365;
        }

        let mut gregorian_month = 1u8;
        loop {
            let length = i64::from(gregorian_month_length(gregorian_month, leap));
            if days < length {
                break;
            }
            days -= length;
            gregorian_month += 1;
        }

        GregorianDate {
            year: gregorian_year as u16,
            month: gregorian_month,
            day: (days + 1) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::jdate;

    fn gregorian_leap(year: u16) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    #[test]
    fn test_reference_pairs() {
        struct TestCase {
            jalali: (u16, u8, u8),
            gregorian: &'static str,
        }

        let cases = [
            TestCase {
                jalali: (1403, 1, 1),
                gregorian: "2024-03-20",
            },
            TestCase {
                jalali: (1400, 1, 1),
                gregorian: "2021-03-21",
            },
            TestCase {
                jalali: (1403, 12, 29),
                gregorian: "2025-03-19",
            },
            TestCase {
                // 1403 is a leap year, so Esfand has a 30th day
                jalali: (1403, 12, 30),
                gregorian: "2025-03-20",
            },
            TestCase {
                jalali: (1404, 1, 1),
                gregorian: "2025-03-21",
            },
            TestCase {
                // Unix epoch
                jalali: (1348, 10, 11),
                gregorian: "1970-01-01",
            },
            TestCase {
                jalali: (1403, 10, 12),
                gregorian: "2025-01-01",
            },
            TestCase {
                // First year of the calendar
                jalali: (1, 1, 1),
                gregorian: "0622-03-21",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.jalali;
            assert_eq!(
                jdate(y, m, d).to_gregorian().to_string(),
                case.gregorian,
                "Jalali {y:04}/{m:02}/{d:02}"
            );
        }
    }

    #[test]
    fn test_accessors() {
        let date = jdate(1403, 1, 1).to_gregorian();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 20);
    }

    #[test]
    fn test_deterministic_across_call_sites() {
        let first = jdate(1403, 6, 15).to_gregorian().to_string();
        let second = jdate(1403, 6, 15).to_gregorian().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_leap_esfand_day_30_follows_day_29() {
        let day_29 = jdate(1403, 12, 29).to_gregorian();
        let day_30 = jdate(1403, 12, 30).to_gregorian();
        assert_eq!(day_30.year(), day_29.year());
        assert_eq!(day_30.month(), day_29.month());
        assert_eq!(day_30.day(), day_29.day() + 1);
    }

    #[test]
    fn test_overflow_day_rolls_into_next_month() {
        // Mehr has 30 days; day 31 is accepted and converts to the same
        // point on the day-count line as Aban 1.
        assert_eq!(jdate(1403, 7, 31).to_gregorian(), jdate(1403, 8, 1).to_gregorian());
    }

    #[test]
    fn test_consecutive_days_stay_consecutive() {
        // New-year boundary: last day of 1402 and first day of 1403
        let before = jdate(1402, 12, 29).to_gregorian();
        let after = jdate(1403, 1, 1).to_gregorian();
        assert_eq!(before.to_string(), "2024-03-19");
        assert_eq!(after.to_string(), "2024-03-20");
    }

    #[test]
    fn test_output_is_always_a_valid_gregorian_date() {
        for year in [1, 500, 978, 979, 1300, 1398, 1403, 1500, 4000, 9999] {
            for month in 1..=12u8 {
                for day in [1, 15, 29, 30, 31] {
                    let date = jdate(year, month, day).to_gregorian();
                    assert!((1..=12).contains(&date.month()), "{date}");
                    let max = gregorian_month_length(date.month(), gregorian_leap(date.year()));
                    assert!(
                        date.day() >= 1 && date.day() <= max,
                        "Jalali {year}/{month}/{day} produced invalid {date}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_new_year_lands_in_march() {
        // Farvardin 1 falls on the vernal equinox, March 20 or 21
        for year in 1380..=1420 {
            let date = jdate(year, 1, 1).to_gregorian();
            assert_eq!(date.month(), 3, "Jalali {year}/01/01 gave {date}");
            assert!(
                date.day() == 20 || date.day() == 21,
                "Jalali {year}/01/01 gave {date}"
            );
        }
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(jdate(1, 1, 1).to_gregorian().to_string(), "0622-03-21");
        assert_eq!(jdate(1403, 10, 12).to_gregorian().to_string(), "2025-01-01");
    }

    #[test]
    fn test_serde_serializes_as_iso_string() {
        let date = jdate(1403, 1, 1).to_gregorian();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2024-03-20""#);
    }

    #[test]
    fn test_ordering_matches_chronology() {
        let earlier = jdate(1402, 12, 29).to_gregorian();
        let later = jdate(1403, 1, 1).to_gregorian();
        assert!(earlier < later);
    }
}
