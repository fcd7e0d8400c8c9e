//! Design variant catalog.
//!
//! The catalog is the fixed, ordered list of homepage variants under review.
//! It is supplied from configuration and never mutated by the kernel; catalog
//! order is the tie-breaker for every derived view.

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u32);

impl VariantId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VariantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// One candidate homepage layout. `route` is opaque to the kernel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignVariant {
    pub id: VariantId,
    pub route: CompactString,
    pub label: CompactString,
}

impl DesignVariant {
    pub fn new(
        id: impl Into<VariantId>,
        route: impl Into<CompactString>,
        label: impl Into<CompactString>,
    ) -> Self {
        Self {
            id: id.into(),
            route: route.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    variants: Vec<DesignVariant>,
    index: FxHashMap<VariantId, usize>,
}

impl Catalog {
    /// Builds a catalog, keeping the first occurrence of a repeated id.
    pub fn new(variants: impl IntoIterator<Item = DesignVariant>) -> Self {
        let mut catalog = Self::default();
        for variant in variants {
            if catalog.index.contains_key(&variant.id) {
                tracing::warn!(id = %variant.id, label = %variant.label, "duplicate variant id in catalog; keeping first");
                continue;
            }
            catalog.index.insert(variant.id, catalog.variants.len());
            catalog.variants.push(variant);
        }
        catalog
    }

    pub fn variants(&self) -> &[DesignVariant] {
        &self.variants
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DesignVariant> {
        self.variants.iter()
    }

    pub fn get(&self, id: VariantId) -> Option<&DesignVariant> {
        self.index.get(&id).map(|&idx| &self.variants[idx])
    }

    pub fn contains(&self, id: VariantId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn position(&self, id: VariantId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a DesignVariant;
    type IntoIter = std::slice::Iter<'a, DesignVariant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/catalog.rs"]
mod tests;
