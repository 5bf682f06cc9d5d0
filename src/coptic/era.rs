use std::fmt;

use crate::error::Error;

/// The two eras of the Coptic calendar.
///
/// The current era, Anno Martyrum ("era of the martyrs", AM), starts at
/// proleptic year 1. Everything before it belongs to the previous era,
/// counted backwards: proleptic year 0 is year 1 before-AM, proleptic year
/// -1 is year 2 before-AM, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CopticEra {
    /// The era before AM, numeric value 0.
    BeforeAm,
    /// The current era, numeric value 1.
    Am,
}

impl CopticEra {
    /// Look up an era from its numeric value.
    pub fn of(value: i64) -> Result<CopticEra, Error> {
        match value {
            0 => Ok(CopticEra::BeforeAm),
            1 => Ok(CopticEra::Am),
            other => Err(Error::InvalidEra(other)),
        }
    }

    pub const fn value(self) -> i32 {
        match self {
            CopticEra::BeforeAm => 0,
            CopticEra::Am => 1,
        }
    }
}

impl fmt::Display for CopticEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopticEra::BeforeAm => f.write_str("BEFORE_AM"),
            CopticEra::Am => f.write_str("AM"),
        }
    }
}
