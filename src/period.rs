use crate::error::Error;

/// An amount of time counted in Coptic calendar slots: years, months and
/// days.
///
/// This is not an elapsed-time duration. A duration measures how far the car
/// has traveled; a period counts how many houses it passed on the way. Two
/// periods of "1 month" can cover a different number of days depending on
/// where they start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    pub const ZERO: Period = Period {
        years: 0,
        months: 0,
        days: 0,
    };

    pub const fn new(years: i32, months: i32, days: i32) -> Period {
        Period {
            years,
            months,
            days,
        }
    }

    pub const fn years(&self) -> i32 {
        self.years
    }

    pub const fn months(&self) -> i32 {
        self.months
    }

    pub const fn days(&self) -> i32 {
        self.days
    }

    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Negate every component, failing on i32::MIN rather than wrapping.
    pub fn negated(self) -> Result<Period, Error> {
        let years = self.years.checked_neg().ok_or(Error::ArithmeticOverflow)?;
        let months = self.months.checked_neg().ok_or(Error::ArithmeticOverflow)?;
        let days = self.days.checked_neg().ok_or(Error::ArithmeticOverflow)?;
        Ok(Period::new(years, months, days))
    }
}
