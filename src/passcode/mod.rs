//! Passcode gate guarding diary visibility.
//!
//! The gate is a small state machine: every session starts `Locked`,
//! a matching passcode unlocks it, and a user-initiated reset moves to
//! `SettingNewPasscode` *without* verifying first. That bypass is stated
//! behavior of this design, as is the `"1234"` factory default; the
//! passcode is an access gate, not confidentiality protection, and the
//! diary text is stored in plaintext at rest.
//!
//! There is no attempt counter and no lockout: a mismatch is ordinary
//! user feedback, reported as `false` from [`PasscodeGate::verify`].

use crate::constants::{DEFAULT_PASSCODE, KEY_PASSCODE, MIN_PASSCODE_LEN};
use crate::errors::{AppResult, PasscodeError};
use crate::storage::{set_with_retry, KeyValueStore};
use tracing::{debug, info};

/// Visibility state of the diary within one session.
///
/// The state always starts at `Locked` on session start; it is never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    /// Diary contents are hidden; a passcode is required.
    Locked,
    /// The passcode matched; diary operations are allowed.
    Unlocked,
    /// The user chose to set a new passcode; the old one is not checked.
    SettingNewPasscode,
}

/// State machine guarding diary access.
pub struct PasscodeGate {
    state: AccessState,
    stored: String,
}

impl PasscodeGate {
    /// Loads the stored passcode, falling back to the factory default.
    ///
    /// The gate starts `Locked` regardless of what is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn load(storage: &dyn KeyValueStore) -> AppResult<Self> {
        let stored = match storage.get(KEY_PASSCODE)? {
            Some(code) => code,
            None => {
                debug!("No stored passcode, using factory default");
                DEFAULT_PASSCODE.to_string()
            }
        };

        Ok(PasscodeGate {
            state: AccessState::Locked,
            stored,
        })
    }

    /// Current access state.
    pub fn state(&self) -> AccessState {
        self.state
    }

    /// True when diary operations are allowed.
    pub fn is_unlocked(&self) -> bool {
        self.state == AccessState::Unlocked
    }

    /// Checks `input` against the stored passcode.
    ///
    /// An exact string match unlocks the gate and returns `true`. On a
    /// mismatch the gate stays locked and `false` is returned; the caller
    /// is expected to show an error and let the user retry.
    pub fn verify(&mut self, input: &str) -> bool {
        if input == self.stored {
            self.state = AccessState::Unlocked;
            info!("Diary unlocked");
            true
        } else {
            debug!("Passcode mismatch");
            false
        }
    }

    /// Enters the passcode-reset flow.
    ///
    /// Deliberately requires no verification first; see the module docs.
    pub fn begin_reset(&mut self) {
        self.state = AccessState::SettingNewPasscode;
    }

    /// Stores `new_code` as the passcode and unlocks the gate.
    ///
    /// # Errors
    ///
    /// Returns [`PasscodeError::TooShort`] if `new_code` has fewer than
    /// four characters (the stored passcode is unchanged), or a storage
    /// error if persisting fails.
    pub fn set_passcode(
        &mut self,
        storage: &dyn KeyValueStore,
        new_code: &str,
    ) -> AppResult<()> {
        if new_code.len() < MIN_PASSCODE_LEN {
            return Err(PasscodeError::TooShort {
                len: new_code.len(),
            }
            .into());
        }

        set_with_retry(storage, KEY_PASSCODE, new_code)?;
        self.stored = new_code.to_string();
        self.state = AccessState::Unlocked;
        info!("Passcode updated");
        Ok(())
    }

    /// Fails unless the gate is unlocked.
    ///
    /// # Errors
    ///
    /// Returns [`PasscodeError::Locked`] in any state other than
    /// [`AccessState::Unlocked`].
    pub fn require_unlocked(&self) -> AppResult<()> {
        if self.is_unlocked() {
            Ok(())
        } else {
            Err(PasscodeError::Locked.into())
        }
    }
}
