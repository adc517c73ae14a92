//! Value codec.
//!
//! Stock profiles and structured bars are stored as JSON objects, which
//! tolerate fields being added later. Packed bars use a fixed big-endian
//! layout:
//!
//! | offset | width | field  |
//! |--------|-------|--------|
//! | 0      | 4     | open   |
//! | 4      | 4     | high   |
//! | 8      | 4     | low    |
//! | 12     | 4     | close  |
//! | 16     | 8     | volume |
//! | 24     | 4     | status |
//!
//! Note text is stored as raw bytes.
//!
//! Which bar format a catalog uses is fixed by its [`BarValue`] type
//! parameter; the two formats are never mixed or detected at runtime.

use crate::{SchemaError, SchemaResult};
use chrono::{DateTime, Utc};
use rootstocks_types::{BarDetails, BarDuration, PackedBar, StockDetails};

/// Encoded length of a packed bar.
pub const PACKED_BAR_LEN: usize = 28;

/// Shortest buffer accepted as a packed bar. The status word is optional.
pub const MIN_PACKED_BAR_LEN: usize = 24;

/// A bar type with a storage encoding.
///
/// Duration and timestamp come from the record key, so they are passed to
/// [`BarValue::decode_value`] rather than read from the value bytes.
pub trait BarValue: Sized {
    /// Series the bar belongs to; becomes the key tag.
    fn duration(&self) -> BarDuration;

    /// Start of the bar; truncated to the second in the key.
    fn timestamp(&self) -> DateTime<Utc>;

    /// Encodes everything except duration and timestamp.
    fn encode_value(&self) -> SchemaResult<Vec<u8>>;

    /// Rebuilds a bar from its key fields and stored value.
    fn decode_value(
        duration: BarDuration,
        timestamp: DateTime<Utc>,
        bytes: &[u8],
    ) -> SchemaResult<Self>;
}

impl BarValue for BarDetails {
    fn duration(&self) -> BarDuration {
        self.duration
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn encode_value(&self) -> SchemaResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    fn decode_value(
        duration: BarDuration,
        timestamp: DateTime<Utc>,
        bytes: &[u8],
    ) -> SchemaResult<Self> {
        let mut bar: Self = serde_json::from_slice(bytes)?;
        bar.duration = duration;
        bar.timestamp = timestamp;
        Ok(bar)
    }
}

impl BarValue for PackedBar {
    fn duration(&self) -> BarDuration {
        self.duration
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn encode_value(&self) -> SchemaResult<Vec<u8>> {
        Ok(pack_bar(self).to_vec())
    }

    fn decode_value(
        duration: BarDuration,
        timestamp: DateTime<Utc>,
        bytes: &[u8],
    ) -> SchemaResult<Self> {
        unpack_bar(duration, timestamp, bytes)
    }
}

/// Lays a bar out in the packed format.
#[must_use]
pub fn pack_bar(bar: &PackedBar) -> [u8; PACKED_BAR_LEN] {
    let mut out = [0u8; PACKED_BAR_LEN];
    out[0..4].copy_from_slice(&bar.open.to_bits().to_be_bytes());
    out[4..8].copy_from_slice(&bar.high.to_bits().to_be_bytes());
    out[8..12].copy_from_slice(&bar.low.to_bits().to_be_bytes());
    out[12..16].copy_from_slice(&bar.close.to_bits().to_be_bytes());
    out[16..24].copy_from_slice(&bar.volume.to_be_bytes());
    out[24..28].copy_from_slice(&bar.status.to_be_bytes());
    out
}

/// Reads a packed bar. Prices keep their exact bit patterns.
pub fn unpack_bar(
    duration: BarDuration,
    timestamp: DateTime<Utc>,
    bytes: &[u8],
) -> SchemaResult<PackedBar> {
    if bytes.len() < MIN_PACKED_BAR_LEN {
        return Err(SchemaError::WrongValueLength {
            expected: MIN_PACKED_BAR_LEN,
            actual: bytes.len(),
        });
    }
    let word = |at: usize| {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&bytes[at..at + 4]);
        u32::from_be_bytes(buf)
    };
    let mut volume = [0u8; 8];
    volume.copy_from_slice(&bytes[16..24]);
    let status = if bytes.len() >= PACKED_BAR_LEN { word(24) } else { 0 };

    Ok(PackedBar {
        duration,
        timestamp,
        open: f32::from_bits(word(0)),
        high: f32::from_bits(word(4)),
        low: f32::from_bits(word(8)),
        close: f32::from_bits(word(12)),
        volume: u64::from_be_bytes(volume),
        status,
    })
}

/// Encodes a stock profile as JSON.
pub fn encode_profile(details: &StockDetails) -> SchemaResult<Vec<u8>> {
    Ok(serde_json::to_vec(details)?)
}

/// Decodes a stock profile, ignoring unknown fields.
pub fn decode_profile(bytes: &[u8]) -> SchemaResult<StockDetails> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Note text is stored verbatim; invalid UTF-8 is replaced on read.
#[must_use]
pub fn decode_note_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
