//! Tags that select which series a child record belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Leading key byte of every note record.
///
/// Sits above every [`BarDuration`] tag so notes sort after all bars.
pub const NOTE_TAG: u8 = 32;

/// The duration covered by a price bar.
///
/// The discriminant is the first byte of the bar's key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum BarDuration {
    /// A bar covering a whole trading day.
    #[default]
    Day = 0,
    /// A bar covering one minute.
    Minute = 1,
}

impl BarDuration {
    /// Every duration, in tag order.
    pub const ALL: [Self; 2] = [Self::Day, Self::Minute];

    /// Returns the key tag byte.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for BarDuration {
    type Error = crate::Error;

    fn try_from(tag: u8) -> crate::Result<Self> {
        match tag {
            0 => Ok(Self::Day),
            1 => Ok(Self::Minute),
            other => Err(crate::Error::UnknownDuration(other)),
        }
    }
}

impl From<BarDuration> for u8 {
    fn from(duration: BarDuration) -> Self {
        duration.tag()
    }
}

impl fmt::Display for BarDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Minute => write!(f, "minute"),
        }
    }
}
