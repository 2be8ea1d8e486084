//! Session context: the explicit object every operation goes through.
//!
//! A [`Session`] bundles the storage handle, the passcode gate, the loaded
//! entry collection and the activity stats. Nothing here is global, so
//! tests can spin up as many independent sessions as they like, each over
//! its own store.
//!
//! The gate wraps all diary reads and writes: any entry operation while
//! the gate is not unlocked fails with `PasscodeError::Locked`. Mood
//! check-ins and the passcode-reset flow are intentionally outside the
//! gate, mirroring how the journal is used.

use crate::errors::AppResult;
use crate::filter::{self, FilterCriteria};
use crate::journal::{Entry, EntryDraft};
use crate::passcode::{AccessState, PasscodeGate};
use crate::stats::MoodStats;
use crate::storage::KeyValueStore;
use crate::store::EntryStore;
use chrono::NaiveDate;
use tracing::debug;

/// One application session over a storage backend.
///
/// Mutating operations take `&mut self`, so the borrow checker enforces
/// the single-writer rule: no two conflicting mutations of the collection
/// can be in flight at once.
pub struct Session<S: KeyValueStore> {
    storage: S,
    gate: PasscodeGate,
    store: EntryStore,
    stats: MoodStats,
}

impl<S: KeyValueStore> Session<S> {
    /// Opens a session: loads the gate, the entry collection and the
    /// activity stats from `storage`. The gate starts locked.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or a stored blob is
    /// corrupt.
    pub fn open(storage: S) -> AppResult<Self> {
        let gate = PasscodeGate::load(&storage)?;
        let store = EntryStore::load(&storage)?;
        let stats = MoodStats::load(&storage)?;
        debug!("Session opened with {} entries", store.len());

        Ok(Session {
            storage,
            gate,
            store,
            stats,
        })
    }

    /// Current state of the passcode gate.
    pub fn access_state(&self) -> AccessState {
        self.gate.state()
    }

    /// Attempts to unlock the diary with `input`.
    ///
    /// On a match the session also records a login for `today` (streak and
    /// points) and persists the updated stats. On a mismatch nothing
    /// changes and `false` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the login record fails; the
    /// diary stays unlocked in that case.
    pub fn unlock(&mut self, input: &str, today: NaiveDate) -> AppResult<bool> {
        if !self.gate.verify(input) {
            return Ok(false);
        }
        self.stats.record_login(today);
        self.stats.persist(&self.storage)?;
        Ok(true)
    }

    /// Enters the passcode-reset flow (no verification required).
    pub fn begin_passcode_reset(&mut self) {
        self.gate.begin_reset();
    }

    /// Stores a new passcode and unlocks the gate.
    ///
    /// # Errors
    ///
    /// Returns `PasscodeError::TooShort` for codes under four characters,
    /// or a storage error if persisting fails.
    pub fn set_passcode(&mut self, new_code: &str) -> AppResult<()> {
        self.gate.set_passcode(&self.storage, new_code)
    }

    /// Read-only snapshot of all entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `PasscodeError::Locked` while the gate is locked.
    pub fn entries(&self) -> AppResult<&[Entry]> {
        self.gate.require_unlocked()?;
        Ok(self.store.all())
    }

    /// Entries matching `criteria`, in their original relative order.
    ///
    /// # Errors
    ///
    /// Returns `PasscodeError::Locked` while the gate is locked.
    pub fn filtered_entries(&self, criteria: &FilterCriteria) -> AppResult<Vec<&Entry>> {
        self.gate.require_unlocked()?;
        Ok(filter::apply(self.store.all(), criteria))
    }

    /// Creates a new entry. See [`EntryStore::save`].
    ///
    /// # Errors
    ///
    /// Returns `PasscodeError::Locked` while the gate is locked, plus the
    /// store's own validation and persistence errors.
    pub fn save_entry(&mut self, draft: EntryDraft, timestamp_ms: i64) -> AppResult<Entry> {
        self.gate.require_unlocked()?;
        self.store.save(&self.storage, draft, timestamp_ms)
    }

    /// Replaces the entry at `position`. See [`EntryStore::update`].
    ///
    /// # Errors
    ///
    /// Returns `PasscodeError::Locked` while the gate is locked, plus the
    /// store's own validation and persistence errors.
    pub fn update_entry(
        &mut self,
        position: usize,
        draft: EntryDraft,
        timestamp_ms: i64,
    ) -> AppResult<Entry> {
        self.gate.require_unlocked()?;
        self.store.update(&self.storage, position, draft, timestamp_ms)
    }

    /// Deletes the entry at `position`. See [`EntryStore::delete`].
    ///
    /// The caller is responsible for having confirmed the delete with the
    /// user; this method removes unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `PasscodeError::Locked` while the gate is locked, plus the
    /// store's own validation and persistence errors.
    pub fn delete_entry(&mut self, position: usize) -> AppResult<Entry> {
        self.gate.require_unlocked()?;
        self.store.delete(&self.storage, position)
    }

    /// Maps a stable entry id back to its current position.
    ///
    /// # Errors
    ///
    /// Returns `PasscodeError::Locked` while the gate is locked.
    pub fn position_of(&self, id: u64) -> AppResult<Option<usize>> {
        self.gate.require_unlocked()?;
        Ok(self.store.position_of(id))
    }

    /// Formats all entries as a shareable text blob.
    ///
    /// # Errors
    ///
    /// Returns `PasscodeError::Locked` while the gate is locked.
    pub fn export(&self) -> AppResult<String> {
        self.gate.require_unlocked()?;
        Ok(self.store.export())
    }

    /// The activity stats (streak, points, check-ins). Not gated: the
    /// streak display lives outside the diary.
    pub fn stats(&self) -> &MoodStats {
        &self.stats
    }

    /// Records a mood check-in for `today` and persists the stats blob.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails.
    pub fn record_checkin(&mut self, mood: &str, today: NaiveDate) -> AppResult<()> {
        self.stats.record_checkin(mood, today);
        self.stats.persist(&self.storage)
    }
}
