/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Maximum day accepted by the coarse parse-time check.
/// The true month length (29/30/31) is not enforced at parse time.
pub const MAX_DAY: u8 = 31;

/// Month number for Farvardin, the first month of the Jalali year
pub const FARVARDIN: u8 = 1;
/// Month number for Mehr, the first 30-day month
pub const MEHR: u8 = 7;
/// Month number for Esfand, the last month of the Jalali year
pub const ESFAND: u8 = 12;

/// Days in Esfand during a leap year
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in each Jalali month (index 0 unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const JALALI_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_leap_year check)
];

/// Month number for February in the Gregorian month walk
pub(crate) const FEBRUARY: u8 = 2;

/// Days in February during a Gregorian leap year
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each Gregorian month (index 0 unused, months are 1-indexed)
/// February shows 28 days; the conversion's leap flag adds the 29th.
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Jalali year subtracted before the day-count arithmetic. Aligns the
/// Jalali epoch with the Gregorian day-count domain rooted at year 1600.
pub(crate) const JALALI_EPOCH_YEAR: i64 = 979;
/// Fixed day offset shifting the rebased Jalali day count into the
/// Gregorian domain
pub(crate) const GREGORIAN_EPOCH_SHIFT: i64 = 79;
/// Jalali leap years repeat on a 33-year cycle...
pub(crate) const JALALI_LEAP_CYCLE_YEARS: i64 = 33;
/// ...with 8 leap days per cycle
pub(crate) const JALALI_LEAP_DAYS_PER_CYCLE: i64 = 8;
/// Days in the 400-year Gregorian cycle (365*400 + 100 - 4 + 1)
pub(crate) const GREGORIAN_CYCLE_DAYS: i64 = 146_097;
/// Days in a Gregorian century without its century leap day (365*100 + 24)
pub(crate) const GREGORIAN_CENTURY_DAYS: i64 = 36_524;
/// Days in a 4-year Gregorian cycle (365*4 + 1)
pub(crate) const GREGORIAN_QUAD_DAYS: i64 = 1_461;
/// First year of the Gregorian day-count domain
pub(crate) const GREGORIAN_BASE_YEAR: i64 = 1600;

/// Separators accepted between the year, month, and day fields
pub const FIELD_SEPARATORS: [char; 2] = ['/', '-'];

/// Exact number of digits required for the year field
pub(crate) const YEAR_DIGITS: usize = 4;
/// Maximum number of digits accepted for the month and day fields
pub(crate) const MONTH_DAY_MAX_DIGITS: usize = 2;
