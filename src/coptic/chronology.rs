// The Coptic calendar runs in plain 4-year cycles: three 365-day years
// followed by one 366-day year, so every quadrennium is exactly
// 3*365 + 366 = 1461 days with the leap day at the very end. There are no
// century exceptions, which is why a single floor division recovers the
// year from a day count and no iteration is ever needed.
//
// A year is 13 months: twelve months of 30 days and a short 13th month of
// epagomenal days, 5 of them normally and 6 in a leap year. A year is leap
// when its proleptic number leaves remainder 3 after floor division by 4,
// i.e. the leap day falls at the end of the quadrennium, never at the start.
//
// Day counts are exchanged with the outside world as days since the ISO
// epoch 1970-01-01. Internally they are shifted so that day 0 is
// 0001-01-01 AM (which is 0284-08-29 ISO).

use num_integer::Integer;

use crate::coptic::CopticEra;
use crate::div_rem::RemFloor;
use crate::error::Error;
use crate::field::{ChronoField, ValueRange};

/// Days from 0001-01-01 AM to the ISO epoch 1970-01-01.
pub(crate) const EPOCH_DAY_DIFFERENCE: i64 = 574_971 + 40_587;

pub(crate) const DAYS_PER_STANDARD_YEAR: i64 = 365;
pub(crate) const DAYS_PER_QUADRENNIUM: i64 = 4 * 365 + 1;
pub(crate) const MONTHS_PER_YEAR: i64 = 13;

pub(crate) const MIN_YEAR: i64 = -999_999;
pub(crate) const MAX_YEAR: i64 = 999_999;

/// 0001-01-01 of year -999,999: shifted day (-1_000_000)*365 - 250_000,
/// minus the epoch difference.
pub(crate) const MIN_EPOCH_DAY: i64 = -365_865_558;
/// Last epagomenal day (the 6th; -999,999 mod 4 == 3 makes 999,999 leap) of
/// year 999,999: shifted day 999_998*365 + 249_999 + 365, minus the epoch
/// difference.
pub(crate) const MAX_EPOCH_DAY: i64 = 364_634_076;

/// The rules of the Coptic calendar system.
///
/// Everything here is a pure function over year/month numbers; dates
/// themselves live in [`CopticDate`](crate::CopticDate).
pub struct CopticChronology;

impl CopticChronology {
    pub const ID: &'static str = "Coptic";
    /// Calendar type as defined by the Unicode LDML specification.
    pub const CALENDAR_TYPE: &'static str = "coptic";

    /// True if the proleptic year is a leap year.
    ///
    /// Floor semantics keep the rule consistent for zero and negative
    /// years; the result is well-defined for any input, in or out of the
    /// supported range.
    pub fn is_leap_year(proleptic_year: i64) -> bool {
        proleptic_year.rem_floor(4) == 3
    }

    /// Days in the given month: 30 for months 1-12, 5 or 6 for month 13.
    pub fn days_in_month(month: u8, leap: bool) -> u8 {
        if month == 13 {
            if leap {
                6
            } else {
                5
            }
        } else {
            30
        }
    }

    pub fn days_in_year(leap: bool) -> u16 {
        if leap {
            366
        } else {
            365
        }
    }

    pub fn month_range() -> ValueRange {
        ValueRange::of(1, MONTHS_PER_YEAR)
    }

    /// Valid day-of-month range for a concrete month of a concrete year.
    pub fn day_of_month_range(month: u8, leap: bool) -> ValueRange {
        ValueRange::of(1, Self::days_in_month(month, leap) as i64)
    }

    /// Map an era and year-of-era to the continuous proleptic year.
    ///
    /// The year-of-era is not range-checked here; callers validate against
    /// the year-of-era range first.
    pub fn proleptic_year(era: CopticEra, year_of_era: i64) -> i64 {
        match era {
            CopticEra::Am => year_of_era,
            CopticEra::BeforeAm => 1 - year_of_era,
        }
    }

    pub fn era_of(value: i64) -> Result<CopticEra, Error> {
        CopticEra::of(value)
    }

    /// Both eras, previous first.
    pub fn eras() -> [CopticEra; 2] {
        [CopticEra::BeforeAm, CopticEra::Am]
    }

    /// Calendar-wide range of a field, independent of any concrete date.
    /// [`CopticDate::range`](crate::CopticDate::range) refines the variable
    /// ones.
    pub fn range(field: ChronoField) -> ValueRange {
        match field {
            ChronoField::DayOfWeek
            | ChronoField::AlignedDayOfWeekInMonth
            | ChronoField::AlignedDayOfWeekInYear => ValueRange::of(1, 7),
            ChronoField::DayOfMonth => ValueRange::of_variable(1, 5, 30),
            ChronoField::DayOfYear => ValueRange::of_variable(1, 365, 366),
            ChronoField::EpochDay => ValueRange::of(MIN_EPOCH_DAY, MAX_EPOCH_DAY),
            ChronoField::AlignedWeekOfMonth => ValueRange::of_variable(1, 1, 5),
            ChronoField::AlignedWeekOfYear => ValueRange::of(1, 53),
            ChronoField::MonthOfYear => ValueRange::of(1, MONTHS_PER_YEAR),
            ChronoField::YearOfEra => ValueRange::of_variable(1, MAX_YEAR, 1 - MIN_YEAR),
            ChronoField::Year => ValueRange::of(MIN_YEAR, MAX_YEAR),
            ChronoField::Era => ValueRange::of(0, 1),
        }
    }

    /// Shifted-day index (day 0 = 0001-01-01 AM) of day 1 of the given
    /// year: 365 days per elapsed year plus one leap day per completed
    /// quadrennium.
    pub(crate) fn year_start_day(proleptic_year: i64) -> i64 {
        let (leap_days, _) = proleptic_year.div_mod_floor(&4);
        (proleptic_year - 1) * DAYS_PER_STANDARD_YEAR + leap_days
    }
}
