use super::catalog::{Catalog, DesignVariant, VariantId};
use super::prompt::compose_prompt;
use super::services::ports::{StateStorage, REVIEW_STATE_KEY};
use super::{Action, Effect, ReviewState};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: if state_changed {
                vec![Effect::PersistState]
            } else {
                Vec::new()
            },
            state_changed,
        }
    }
}

/// Review state for a fixed catalog.
///
/// A `Store` only exists once its state has been loaded, so every read is
/// against a ready state. All mutations go through [`Store::dispatch`] and are
/// visible to the next read immediately; writing back to storage is left to
/// the caller via [`Effect::PersistState`].
pub struct Store {
    catalog: Catalog,
    state: ReviewState,
}

impl Store {
    /// Loads the persisted review for `catalog`, falling back to an empty
    /// review when nothing was stored or the payload cannot be parsed.
    pub fn load<S: StateStorage + ?Sized>(catalog: Catalog, storage: &S) -> Self {
        let state = match storage.load(REVIEW_STATE_KEY) {
            Some(payload) => ReviewState::from_json(&payload).unwrap_or_default(),
            None => ReviewState::default(),
        };
        let store = Self::with_state(catalog, state);
        tracing::info!(
            variants = store.catalog.len(),
            favorites = store.state.favorites.len(),
            dismissed = store.state.dismissed.len(),
            "review state loaded"
        );
        store
    }

    pub fn with_state(catalog: Catalog, mut state: ReviewState) -> Self {
        let dropped = state.retain_catalog(&catalog);
        if dropped > 0 {
            tracing::warn!(dropped, "dropped review entries for variants outside the catalog");
        }
        Self { catalog, state }
    }

    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The payload written back to storage.
    pub fn serialize(&self) -> String {
        self.state.to_json()
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        if let Some(id) = action.variant() {
            if !self.catalog.contains(id) {
                tracing::warn!(%id, action = action.name(), "ignoring action for variant outside the catalog");
                return DispatchResult::unchanged();
            }
        }

        let action_name = action.name();
        let result = match action {
            Action::ToggleFavorite(id) => {
                if !self.state.favorites.remove(&id) {
                    self.state.favorites.insert(id);
                }
                DispatchResult::changed(true)
            }
            Action::Dismiss(id) => {
                let newly_dismissed = self.state.dismissed.insert(id);
                let was_favorite = self.state.favorites.remove(&id);
                DispatchResult::changed(newly_dismissed || was_favorite)
            }
            Action::UndoDismiss(id) => DispatchResult::changed(self.state.dismissed.remove(&id)),
            Action::SetFeedback { id, text } => {
                let prev = self.state.feedback.insert(id, text);
                let changed = prev.as_deref() != self.state.feedback(id);
                DispatchResult::changed(changed)
            }
            Action::CopyPrompt { count } => DispatchResult {
                effects: vec![Effect::SetClipboardText(compose_prompt(
                    &self.state,
                    &self.catalog,
                    count,
                ))],
                state_changed: false,
            },
        };

        if result.state_changed {
            tracing::debug!(action = action_name, "review state changed");
        }
        result
    }

    pub fn toggle_favorite(&mut self, id: VariantId) -> DispatchResult {
        self.dispatch(Action::ToggleFavorite(id))
    }

    pub fn dismiss(&mut self, id: VariantId) -> DispatchResult {
        self.dispatch(Action::Dismiss(id))
    }

    pub fn undo_dismiss(&mut self, id: VariantId) -> DispatchResult {
        self.dispatch(Action::UndoDismiss(id))
    }

    pub fn set_feedback(&mut self, id: VariantId, text: impl Into<String>) -> DispatchResult {
        self.dispatch(Action::SetFeedback {
            id,
            text: text.into(),
        })
    }

    pub fn active_variants(&self) -> Vec<&DesignVariant> {
        self.state.active_variants(&self.catalog)
    }

    pub fn dismissed_variants(&self) -> Vec<&DesignVariant> {
        self.state.dismissed_variants(&self.catalog)
    }

    pub fn has_notes(&self, id: VariantId) -> bool {
        self.state.has_notes(id)
    }

    pub fn prompt(&self, requested_count: u32) -> String {
        compose_prompt(&self.state, &self.catalog, requested_count)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
