//! Key codec.
//!
//! Stocks are keyed by ticker directly under the root item. Within a stock,
//! bars and notes share one namespace keyed by a 9-byte composite:
//!
//! ```text
//! [tag:1][epoch seconds:8, big-endian]
//! ```
//!
//! Big-endian seconds make byte order equal chronological order, but only
//! for timestamps at or after 1970: negative seconds are stored as their
//! two's complement and sort after every positive value.
//!
//! A one-character ticker is padded with a zero byte so it keeps a stable
//! position among longer tickers. A two-character ticker whose second
//! character is NUL therefore decodes as the padded one-character ticker.
//!
//! Ticker keys are expected to be UTF-8. A key that is not (written by some
//! other producer) decodes with replacement characters, and that ticker no
//! longer encodes back to the stored key.

use crate::{SchemaError, SchemaResult};
use chrono::{DateTime, Utc};
use rootstocks_types::{BarDuration, NOTE_TAG};

/// Length of every bar and note key.
pub const TIME_KEY_LEN: usize = 9;

/// Encodes a ticker as a stock key.
#[must_use]
pub fn encode_ticker(ticker: &str) -> Vec<u8> {
    let mut key = ticker.as_bytes().to_vec();
    if key.len() == 1 {
        key.push(0);
    }
    key
}

/// Decodes a stock key back to its ticker.
#[must_use]
pub fn decode_ticker(key: &[u8]) -> String {
    let ticker = match key {
        [first, 0] => std::slice::from_ref(first),
        _ => key,
    };
    String::from_utf8_lossy(ticker).into_owned()
}

/// Builds a composite key from a tag and epoch seconds.
#[must_use]
pub fn encode_time_key(tag: u8, seconds: i64) -> [u8; TIME_KEY_LEN] {
    let mut key = [0u8; TIME_KEY_LEN];
    key[0] = tag;
    key[1..].copy_from_slice(&(seconds as u64).to_be_bytes());
    key
}

/// Splits a composite key into its tag and epoch seconds.
pub fn decode_time_key(key: &[u8]) -> SchemaResult<(u8, i64)> {
    let key: &[u8; TIME_KEY_LEN] = key.try_into().map_err(|_| SchemaError::WrongKeyLength {
        expected: TIME_KEY_LEN,
        actual: key.len(),
    })?;
    let mut seconds = [0u8; 8];
    seconds.copy_from_slice(&key[1..]);
    Ok((key[0], u64::from_be_bytes(seconds) as i64))
}

/// Key of the bar for `duration` at `timestamp`, truncated to the second.
#[must_use]
pub fn bar_key(duration: BarDuration, timestamp: DateTime<Utc>) -> [u8; TIME_KEY_LEN] {
    encode_time_key(duration.tag(), timestamp.timestamp())
}

/// Key of the note at `timestamp`, truncated to the second.
#[must_use]
pub fn note_key(timestamp: DateTime<Utc>) -> [u8; TIME_KEY_LEN] {
    encode_time_key(NOTE_TAG, timestamp.timestamp())
}

/// Decodes a bar key, requiring its tag to be `expected`.
pub fn decode_bar_key(
    key: &[u8],
    expected: BarDuration,
) -> SchemaResult<(BarDuration, DateTime<Utc>)> {
    let (tag, seconds) = decode_time_key(key)?;
    let duration = BarDuration::try_from(tag)?;
    if duration != expected {
        return Err(SchemaError::UnexpectedTag {
            expected: expected.tag(),
            actual: tag,
        });
    }
    Ok((duration, timestamp_from_seconds(seconds)?))
}

/// Decodes a note key, requiring the note tag.
pub fn decode_note_key(key: &[u8]) -> SchemaResult<DateTime<Utc>> {
    let (tag, seconds) = decode_time_key(key)?;
    if tag != NOTE_TAG {
        return Err(SchemaError::UnexpectedTag {
            expected: NOTE_TAG,
            actual: tag,
        });
    }
    timestamp_from_seconds(seconds)
}

fn timestamp_from_seconds(seconds: i64) -> SchemaResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or(SchemaError::InvalidTimestamp(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_ticker_layout() {
        assert_eq!(encode_ticker("A"), vec![0x41, 0x00]);
        assert_eq!(decode_ticker(&[0x41, 0x00]), "A");
    }

    #[test]
    fn time_key_layout_is_tag_then_big_endian_seconds() {
        let key = encode_time_key(1, 0x0102_0304_0506_0708);
        assert_eq!(key, [1, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn pre_epoch_seconds_sort_after_positive_ones() {
        let before = encode_time_key(0, -1);
        let after = encode_time_key(0, 1);
        assert!(before > after);
        assert_eq!(decode_time_key(&before).unwrap(), (0, -1));
    }
}
