//! Prompt composition.
//!
//! Turns the current review into a plain-text request for more variants:
//! a header line followed by Favorites / Kept / Dismissed sections. Empty
//! sections are omitted. Within a section, variants carrying notes come first;
//! ties keep catalog order. The output depends only on its inputs.

use super::catalog::{Catalog, DesignVariant};
use super::state::ReviewState;

pub const MIN_REQUEST_COUNT: u32 = 1;
pub const MAX_REQUEST_COUNT: u32 = 5;

const FAVORITES_HEADING: &str = "Favorites (build on these):";
const KEPT_HEADING: &str = "Kept (fine to borrow from):";
const DISMISSED_HEADING: &str = "Dismissed (avoid these directions):";

/// Clamp applied by front ends before asking for a prompt. The composer itself
/// echoes whatever count it receives.
pub fn clamp_request_count(count: u32) -> u32 {
    count.clamp(MIN_REQUEST_COUNT, MAX_REQUEST_COUNT)
}

pub fn compose_prompt(state: &ReviewState, catalog: &Catalog, requested_count: u32) -> String {
    let (favorites, kept): (Vec<_>, Vec<_>) = state
        .active_variants(catalog)
        .into_iter()
        .partition(|variant| state.is_favorite(variant.id));
    let dismissed = state.dismissed_variants(catalog);

    let mut blocks = vec![header(requested_count)];
    for (heading, variants) in [
        (FAVORITES_HEADING, favorites),
        (KEPT_HEADING, kept),
        (DISMISSED_HEADING, dismissed),
    ] {
        if let Some(block) = section(state, heading, variants) {
            blocks.push(block);
        }
    }

    blocks.join("\n\n")
}

fn header(requested_count: u32) -> String {
    let noun = if requested_count == 1 {
        "variant"
    } else {
        "variants"
    };
    format!("Generate {requested_count} more homepage design {noun} based on this review.")
}

fn section(state: &ReviewState, heading: &str, variants: Vec<&DesignVariant>) -> Option<String> {
    if variants.is_empty() {
        return None;
    }

    let (noted, plain): (Vec<_>, Vec<_>) = variants
        .into_iter()
        .partition(|variant| state.has_notes(variant.id));

    let mut lines = Vec::with_capacity(noted.len() + plain.len() + 1);
    lines.push(heading.to_string());
    lines.extend(
        noted
            .into_iter()
            .chain(plain)
            .map(|variant| item_line(state, variant)),
    );
    Some(lines.join("\n"))
}

fn item_line(state: &ReviewState, variant: &DesignVariant) -> String {
    match state.notes(variant.id) {
        Some(notes) => format!("- {} ({}): \"{}\"", variant.id, variant.label, notes),
        None => format!("- {} ({})", variant.id, variant.label),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/prompt.rs"]
mod tests;
