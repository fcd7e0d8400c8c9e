//! Review session: a loaded [`Store`] wired to its storage and clipboard.
//!
//! The session runs the effects the store asks for. State writes are
//! debounced: a change arms a deadline, `tick` writes once it has passed and
//! `flush` writes right away. With a zero debounce every change is written
//! immediately. A write that fails keeps the session dirty and is retried on
//! a later tick. Reads always go to the in-memory store, so they reflect the
//! latest change whether or not it has reached storage yet.

use std::time::{Duration, Instant};

use crate::kernel::services::ports::{
    ClipboardSink, StateStorage, StorageError, REVIEW_STATE_KEY,
};
use crate::kernel::{Action, Catalog, Effect, Store, VariantId};

pub struct ReviewSession<S: StateStorage, C: ClipboardSink> {
    store: Store,
    storage: S,
    clipboard: C,
    persist_debounce: Duration,
    pending_save_deadline: Option<Instant>,
    dirty: bool,
}

impl<S: StateStorage, C: ClipboardSink> ReviewSession<S, C> {
    pub fn open(catalog: Catalog, storage: S, clipboard: C, persist_debounce: Duration) -> Self {
        let store = Store::load(catalog, &storage);
        Self {
            store,
            storage,
            clipboard,
            persist_debounce,
            pending_save_deadline: None,
            dirty: false,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn pending_save_deadline(&self) -> Option<Instant> {
        self.pending_save_deadline
    }

    /// Applies `action` and runs its effects. Returns whether the review changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        self.dispatch_at(action, Instant::now())
    }

    pub fn dispatch_at(&mut self, action: Action, now: Instant) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect, now);
        }
        result.state_changed
    }

    pub fn toggle_favorite(&mut self, id: VariantId) -> bool {
        self.dispatch(Action::ToggleFavorite(id))
    }

    pub fn dismiss(&mut self, id: VariantId) -> bool {
        self.dispatch(Action::Dismiss(id))
    }

    pub fn undo_dismiss(&mut self, id: VariantId) -> bool {
        self.dispatch(Action::UndoDismiss(id))
    }

    pub fn set_feedback(&mut self, id: VariantId, text: impl Into<String>) -> bool {
        self.dispatch(Action::SetFeedback {
            id,
            text: text.into(),
        })
    }

    /// Copies the prompt for `count` more variants. Returns `false` when the
    /// clipboard rejected it.
    pub fn copy_prompt(&mut self, count: u32) -> bool {
        let now = Instant::now();
        let result = self.store.dispatch(Action::CopyPrompt { count });
        let mut copied = false;
        for effect in result.effects {
            copied |= self.run_effect(effect, now);
        }
        copied
    }

    /// Writes pending changes whose deadline has passed. Returns whether a
    /// write happened.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.pending_save_deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.pending_save_deadline = None;
        self.write_back_or_retry(now)
    }

    /// Writes pending changes now, regardless of the debounce deadline.
    pub fn flush(&mut self) -> Result<(), StorageError> {
        self.pending_save_deadline = None;
        if !self.dirty {
            return Ok(());
        }
        let result = self.write_back();
        if result.is_err() {
            self.pending_save_deadline = Some(Instant::now() + self.persist_debounce);
        }
        result
    }

    fn run_effect(&mut self, effect: Effect, now: Instant) -> bool {
        match effect {
            Effect::PersistState => {
                self.dirty = true;
                if self.persist_debounce.is_zero() {
                    return self.write_back_or_retry(now);
                }
                self.pending_save_deadline = Some(now + self.persist_debounce);
                true
            }
            Effect::SetClipboardText(text) => match self.clipboard.set_text(&text) {
                Ok(()) => {
                    tracing::info!(bytes = text.len(), "prompt copied to clipboard");
                    true
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to copy prompt");
                    false
                }
            },
        }
    }

    // A failed write re-arms the deadline so a later tick tries again.
    fn write_back_or_retry(&mut self, now: Instant) -> bool {
        if self.write_back().is_ok() {
            return true;
        }
        self.pending_save_deadline = Some(now + self.persist_debounce);
        false
    }

    fn write_back(&mut self) -> Result<(), StorageError> {
        let payload = self.store.serialize();
        match self.storage.save(REVIEW_STATE_KEY, &payload) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to persist review state");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/session.rs"]
mod tests;
