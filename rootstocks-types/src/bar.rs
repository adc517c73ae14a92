//! Price bar types.
//!
//! Two generations of bar exist:
//! - [`BarDetails`] carries 64-bit prices and a full tick/volume breakdown
//! - [`PackedBar`] carries 32-bit prices, a single volume and a status word
//!
//! Both carry their duration and timestamp, which live in the record key
//! rather than the value.

use crate::BarDuration;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured price bar with tick and volume breakdowns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BarDetails {
    #[serde(skip)]
    pub duration: BarDuration,
    #[serde(skip)]
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub up_ticks: u64,
    pub up_volume: u64,
    pub down_ticks: u64,
    pub down_volume: u64,
    pub unchanged_ticks: u64,
    pub unchanged_volume: u64,
    pub total_ticks: u64,
    pub total_volume: u64,
    pub status: u32,
}

impl BarDetails {
    /// Creates a bar with prices set and all counters zeroed.
    #[must_use]
    pub fn new(
        duration: BarDuration,
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> Self {
        Self {
            duration,
            timestamp,
            open,
            high,
            low,
            close,
            ..Self::default()
        }
    }
}

/// Compact price bar stored as a fixed binary layout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PackedBar {
    pub duration: BarDuration,
    pub timestamp: DateTime<Utc>,
    pub open: f32,
    pub high: f32,
    pub low: f32,
    pub close: f32,
    pub volume: u64,
    pub status: u32,
}

impl PackedBar {
    /// Creates a bar with prices set, zero volume and zero status.
    #[must_use]
    pub fn new(
        duration: BarDuration,
        timestamp: DateTime<Utc>,
        open: f32,
        high: f32,
        low: f32,
        close: f32,
    ) -> Self {
        Self {
            duration,
            timestamp,
            open,
            high,
            low,
            close,
            volume: 0,
            status: 0,
        }
    }

    /// Returns a copy with the volume set.
    #[must_use]
    pub const fn with_volume(mut self, volume: u64) -> Self {
        self.volume = volume;
        self
    }

    /// Returns a copy with the status word set.
    #[must_use]
    pub const fn with_status(mut self, status: u32) -> Self {
        self.status = status;
        self
    }
}
