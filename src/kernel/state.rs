use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::catalog::{Catalog, DesignVariant, VariantId};

/// The persisted review document.
///
/// Every member defaults to empty on load and unknown members are ignored,
/// so payloads written by older or newer builds still parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewState {
    pub dismissed: BTreeSet<VariantId>,
    pub favorites: BTreeSet<VariantId>,
    pub feedback: BTreeMap<VariantId, String>,
}

impl ReviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a persisted payload. Malformed or wrong-shaped input yields `None`.
    pub fn from_json(payload: &str) -> Option<Self> {
        match serde_json::from_str(payload) {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable review state");
                None
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.dismissed.is_empty() && self.favorites.is_empty() && self.feedback.is_empty()
    }

    pub fn is_dismissed(&self, id: VariantId) -> bool {
        self.dismissed.contains(&id)
    }

    pub fn is_favorite(&self, id: VariantId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn feedback(&self, id: VariantId) -> Option<&str> {
        self.feedback.get(&id).map(String::as_str)
    }

    /// Feedback text with surrounding whitespace removed, or `None` when blank.
    pub fn notes(&self, id: VariantId) -> Option<&str> {
        self.feedback(id).map(str::trim).filter(|text| !text.is_empty())
    }

    pub fn has_notes(&self, id: VariantId) -> bool {
        self.notes(id).is_some()
    }

    /// Non-dismissed variants: favorites first, then the rest, each in catalog order.
    pub fn active_variants<'a>(&self, catalog: &'a Catalog) -> Vec<&'a DesignVariant> {
        let (mut favorites, rest): (Vec<_>, Vec<_>) = catalog
            .iter()
            .filter(|variant| !self.is_dismissed(variant.id))
            .partition(|variant| self.is_favorite(variant.id));
        favorites.extend(rest);
        favorites
    }

    pub fn dismissed_variants<'a>(&self, catalog: &'a Catalog) -> Vec<&'a DesignVariant> {
        catalog
            .iter()
            .filter(|variant| self.is_dismissed(variant.id))
            .collect()
    }

    /// Drops ids the catalog does not know about. Returns how many entries were removed.
    pub fn retain_catalog(&mut self, catalog: &Catalog) -> usize {
        let before = self.dismissed.len() + self.favorites.len() + self.feedback.len();
        self.dismissed.retain(|id| catalog.contains(*id));
        self.favorites.retain(|id| catalog.contains(*id));
        self.feedback.retain(|id, _| catalog.contains(*id));
        before - (self.dismissed.len() + self.favorites.len() + self.feedback.len())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
