//! Stock accessor.
//!
//! A [`Stock`] wraps the store item keyed by its ticker. The item's value is
//! the stock profile; its children are the stock's bars and notes, sharing
//! one key namespace partitioned by tag byte.
//!
//! Bars upsert: writing a bar at an existing duration and second replaces
//! it. Notes are unique: writing a note at an occupied second fails.
//!
//! Nothing here is atomic. `write_bar` reads and then creates or updates, so
//! two writers racing on the same key can lose an update or fail the create,
//! depending on the store.

use crate::keys;
use crate::range::{self, TAG_QUALIFIER};
use crate::values::{self, BarValue};
use crate::{SchemaError, SchemaResult};
use chrono::{DateTime, Utc};
use rootstocks_store::{Item, StoreError};
use rootstocks_types::{BarDuration, NOTE_TAG, NoteDetails, PackedBar, StockDetails};
use std::marker::PhantomData;
use tracing::debug;

/// One stock and its bars and notes.
///
/// `B` is the bar format this stock reads and writes.
#[derive(Debug, Clone)]
pub struct Stock<I, B = PackedBar> {
    item: I,
    bars: PhantomData<fn() -> B>,
}

impl<I: Item, B: BarValue> Stock<I, B> {
    pub(crate) fn from_item(item: I) -> Self {
        Self {
            item,
            bars: PhantomData,
        }
    }

    /// Returns the stock's ticker, decoded from its key.
    #[must_use]
    pub fn ticker(&self) -> String {
        keys::decode_ticker(&self.item.copy_key())
    }

    /// Decodes the stock profile.
    pub fn details(&self) -> SchemaResult<StockDetails> {
        values::decode_profile(self.item.value())
    }

    /// Replaces the stock profile. Last writer wins; nothing is merged.
    pub fn update(&mut self, details: &StockDetails) -> SchemaResult<()> {
        let value = values::encode_profile(details)?;
        self.item.update_value(&value)?;
        debug!("Updated stock {}", self.ticker());
        Ok(())
    }

    /// Deletes the stock record.
    ///
    /// Whether bars and notes go with it depends on the store; use
    /// [`Stock::delete_with_children`] for stores that do not cascade.
    pub fn delete(self) -> SchemaResult<()> {
        let ticker = self.ticker();
        self.item.delete()?;
        debug!("Deleted stock {}", ticker);
        Ok(())
    }

    /// Deletes every bar and note, then the stock record.
    pub fn delete_with_children(self) -> SchemaResult<()> {
        for duration in BarDuration::ALL {
            self.delete_bars(duration)?;
        }
        self.delete_notes()?;
        self.delete()
    }

    // ── Bars ─────────────────────────────────────────────────────

    /// Writes a bar, replacing any bar already stored for the same duration
    /// and second.
    pub fn write_bar(&self, bar: &B) -> SchemaResult<()> {
        let key = keys::bar_key(bar.duration(), bar.timestamp());
        let value = bar.encode_value()?;
        match self.item.read_child(&key) {
            Ok(mut existing) => existing.update_value(&value)?,
            Err(err) if err.is_not_found() => self.item.quick_child(&key, &value)?,
            Err(err) => return Err(err.into()),
        }
        debug!(
            "Wrote {} bar for {} at {}",
            bar.duration(),
            self.ticker(),
            bar.timestamp()
        );
        Ok(())
    }

    /// Reads the bar stored for `duration` at `timestamp`.
    pub fn read_bar(&self, duration: BarDuration, timestamp: DateTime<Utc>) -> SchemaResult<B> {
        let child = self.item.read_child(&keys::bar_key(duration, timestamp))?;
        decode_bar(&child, duration)
    }

    /// Visits bars of one duration starting at `start`, in chronological
    /// order or, with `reverse`, backwards from `start`.
    ///
    /// Only bars of `duration` are visited. The scan stops when `visit`
    /// returns `false` or a bar fails to decode; the decode error is
    /// returned.
    pub fn range_bars<F>(
        &self,
        duration: BarDuration,
        start: DateTime<Utc>,
        reverse: bool,
        visit: F,
    ) -> SchemaResult<()>
    where
        F: FnMut(B) -> bool,
    {
        range::scan_decoded(
            &self.item,
            &keys::bar_key(duration, start),
            TAG_QUALIFIER,
            reverse,
            |child| decode_bar(child, duration),
            visit,
        )
    }

    /// Deletes every bar of one duration, returning how many were removed.
    ///
    /// Not atomic; see [`range::delete_range`].
    pub fn delete_bars(&self, duration: BarDuration) -> SchemaResult<usize> {
        range::delete_range(&self.item, &[duration.tag()], TAG_QUALIFIER)
    }

    // ── Notes ────────────────────────────────────────────────────

    /// Writes a note. Fails with [`SchemaError::NoteAlreadyExists`] if a
    /// note is already stored at the same second.
    pub fn write_note(&self, note: &NoteDetails) -> SchemaResult<()> {
        let key = keys::note_key(note.timestamp);
        match self.item.read_child(&key) {
            Ok(_) => return Err(SchemaError::NoteAlreadyExists(note.timestamp)),
            Err(err) if err.is_not_found() => {}
            Err(err) => return Err(err.into()),
        }
        // A writer racing past the check above still loses at the create.
        match self.item.quick_child(&key, note.note.as_bytes()) {
            Ok(()) => {}
            Err(StoreError::AlreadyExists(_)) => {
                return Err(SchemaError::NoteAlreadyExists(note.timestamp));
            }
            Err(err) => return Err(err.into()),
        }
        debug!("Wrote note for {} at {}", self.ticker(), note.timestamp);
        Ok(())
    }

    /// Reads the note stored at `timestamp`.
    pub fn read_note(&self, timestamp: DateTime<Utc>) -> SchemaResult<NoteDetails> {
        let child = self.item.read_child(&keys::note_key(timestamp))?;
        decode_note(&child)
    }

    /// Visits notes starting at `start`, chronologically or backwards.
    pub fn range_notes<F>(
        &self,
        start: DateTime<Utc>,
        reverse: bool,
        visit: F,
    ) -> SchemaResult<()>
    where
        F: FnMut(NoteDetails) -> bool,
    {
        range::scan_decoded(
            &self.item,
            &keys::note_key(start),
            TAG_QUALIFIER,
            reverse,
            decode_note,
            visit,
        )
    }

    /// Deletes the note stored at `timestamp`.
    pub fn delete_note(&self, timestamp: DateTime<Utc>) -> SchemaResult<()> {
        let child = self.item.read_child(&keys::note_key(timestamp))?;
        child.delete()?;
        debug!("Deleted note for {} at {}", self.ticker(), timestamp);
        Ok(())
    }

    /// Deletes every note, returning how many were removed.
    pub fn delete_notes(&self) -> SchemaResult<usize> {
        range::delete_range(&self.item, &[NOTE_TAG], TAG_QUALIFIER)
    }
}

fn decode_bar<I: Item, B: BarValue>(child: &I, duration: BarDuration) -> SchemaResult<B> {
    let (duration, timestamp) = keys::decode_bar_key(&child.copy_key(), duration)?;
    B::decode_value(duration, timestamp, child.value())
}

fn decode_note<I: Item>(child: &I) -> SchemaResult<NoteDetails> {
    let timestamp = keys::decode_note_key(&child.copy_key())?;
    Ok(NoteDetails::new(timestamp, values::decode_note_text(child.value())))
}
