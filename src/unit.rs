use std::fmt;

/// Units of date arithmetic, in increasing size.
///
/// Days and weeks operate on the epoch-day count. Months and everything
/// above operate on the month index, where a Coptic year is always 13
/// months; there is no cascading day-to-month borrow because the month
/// index absorbs it in one floor division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChronoUnit {
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
}

impl ChronoUnit {
    pub const fn name(self) -> &'static str {
        match self {
            ChronoUnit::Days => "Days",
            ChronoUnit::Weeks => "Weeks",
            ChronoUnit::Months => "Months",
            ChronoUnit::Years => "Years",
            ChronoUnit::Decades => "Decades",
            ChronoUnit::Centuries => "Centuries",
            ChronoUnit::Millennia => "Millennia",
        }
    }
}

impl fmt::Display for ChronoUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
