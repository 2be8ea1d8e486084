//! The entry store: ordered diary collection with write-through persistence.
//!
//! [`EntryStore`] owns the ordered collection of diary entries. New entries
//! prepend; edits replace in place; deletes remove. Every mutation persists
//! the full collection to durable storage before returning, and a failed
//! persist rolls the in-memory change back so prior state is preserved.

use crate::constants::KEY_ENTRIES;
use crate::errors::{AppResult, StorageError, StoreError};
use crate::journal::{Entry, EntryDraft};
use crate::sentiment;
use crate::storage::{set_with_retry, KeyValueStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Persisted form of the collection: display-ordered entries plus the
/// id counter, so identities survive restarts without reuse.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedCollection {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Ordered collection of diary entries.
///
/// Positions address the display order (newest first by insertion). Each
/// entry also carries a stable integer id so a row picked out of a filtered
/// view can be mapped back to its true position with [`EntryStore::position_of`]
/// before mutating.
#[derive(Debug)]
pub struct EntryStore {
    entries: Vec<Entry>,
    next_id: u64,
}

impl EntryStore {
    /// Loads the collection from storage, starting empty if none is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or the stored blob does
    /// not decode.
    pub fn load(storage: &dyn KeyValueStore) -> AppResult<Self> {
        match storage.get(KEY_ENTRIES)? {
            Some(raw) => {
                let persisted: PersistedCollection =
                    serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                        key: KEY_ENTRIES,
                        source,
                    })?;
                debug!("Loaded {} entries", persisted.entries.len());
                Ok(EntryStore {
                    entries: persisted.entries,
                    next_id: persisted.next_id,
                })
            }
            None => {
                debug!("No stored entries, starting empty");
                Ok(EntryStore {
                    entries: Vec::new(),
                    next_id: 1,
                })
            }
        }
    }

    /// Creates a new entry from `draft` and prepends it to the collection.
    ///
    /// The sentiment is classified from the draft text here, once; reads
    /// never reclassify. `timestamp_ms` becomes the entry's creation instant.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidEntry`] if the text is empty after
    /// trimming, or a storage error if persisting fails. The collection is
    /// unchanged in either case.
    pub fn save(
        &mut self,
        storage: &dyn KeyValueStore,
        draft: EntryDraft,
        timestamp_ms: i64,
    ) -> AppResult<Entry> {
        let entry = self.build_entry(self.next_id, draft, timestamp_ms)?;

        self.entries.insert(0, entry.clone());
        self.next_id += 1;
        if let Err(e) = self.persist(storage) {
            self.entries.remove(0);
            self.next_id -= 1;
            return Err(e);
        }

        info!("Saved entry {} ({})", entry.id, entry.sentiment);
        Ok(entry)
    }

    /// Replaces the entry at `position` in place, keeping its id and order.
    ///
    /// Text, date, mood and sentiment are all replaced together; the
    /// timestamp is updated to `timestamp_ms`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OutOfRange`] for an invalid position,
    /// [`StoreError::InvalidEntry`] for empty text, or a storage error if
    /// persisting fails. The collection is unchanged in every error case.
    pub fn update(
        &mut self,
        storage: &dyn KeyValueStore,
        position: usize,
        draft: EntryDraft,
        timestamp_ms: i64,
    ) -> AppResult<Entry> {
        if position >= self.entries.len() {
            return Err(StoreError::OutOfRange {
                position,
                len: self.entries.len(),
            }
            .into());
        }

        let id = self.entries[position].id;
        let replacement = self.build_entry(id, draft, timestamp_ms)?;

        let previous = std::mem::replace(&mut self.entries[position], replacement.clone());
        if let Err(e) = self.persist(storage) {
            self.entries[position] = previous;
            return Err(e);
        }

        info!("Updated entry {} at position {}", id, position);
        Ok(replacement)
    }

    /// Removes and returns the entry at `position`.
    ///
    /// The store deletes unconditionally; asking the user to confirm is the
    /// boundary layer's job.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OutOfRange`] for an invalid position, or a
    /// storage error if persisting fails (the entry is restored).
    pub fn delete(&mut self, storage: &dyn KeyValueStore, position: usize) -> AppResult<Entry> {
        if position >= self.entries.len() {
            return Err(StoreError::OutOfRange {
                position,
                len: self.entries.len(),
            }
            .into());
        }

        let removed = self.entries.remove(position);
        if let Err(e) = self.persist(storage) {
            self.entries.insert(position, removed);
            return Err(e);
        }

        info!("Deleted entry {} from position {}", removed.id, position);
        Ok(removed)
    }

    /// Read-only snapshot of the collection in display order.
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the collection holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maps a stable entry id back to its current position.
    ///
    /// Use this to resolve a row picked from a filtered view before calling
    /// [`EntryStore::update`] or [`EntryStore::delete`].
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Formats the whole collection as a shareable text blob.
    ///
    /// One record per entry in display order: date and mood line, sentiment
    /// line, the text, then a `---` rule. Pure formatting; handing the blob
    /// to a share mechanism is the caller's job.
    pub fn export(&self) -> String {
        self.entries
            .iter()
            .map(|e| {
                format!(
                    "📅 {} | {} {}\nSentiment: {}\n{}\n---\n",
                    e.display_date(),
                    e.mood.emoji(),
                    e.mood.label(),
                    e.sentiment,
                    e.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Validates a draft and assembles the entry record.
    fn build_entry(&self, id: u64, draft: EntryDraft, timestamp_ms: i64) -> AppResult<Entry> {
        if draft.text.trim().is_empty() {
            return Err(StoreError::InvalidEntry.into());
        }

        Ok(Entry {
            id,
            sentiment: sentiment::classify(&draft.text),
            text: draft.text,
            date: draft.date,
            timestamp: timestamp_ms,
            mood: draft.mood,
        })
    }

    /// Write-through persist of the full collection. Overwrites, never appends.
    fn persist(&self, storage: &dyn KeyValueStore) -> AppResult<()> {
        let blob = serde_json::to_string(&PersistedCollection {
            next_id: self.next_id,
            entries: self.entries.clone(),
        })
        .map_err(|source| StorageError::Encode {
            key: KEY_ENTRIES,
            source,
        })?;
        set_with_retry(storage, KEY_ENTRIES, &blob)
    }
}
