use super::*;
use crate::kernel::catalog::DesignVariant;

fn catalog() -> Catalog {
    Catalog::new((1..=4).map(|id| DesignVariant::new(id, format!("/redesign/{id}"), format!("V{id}"))))
}

fn id(n: u32) -> VariantId {
    VariantId::new(n)
}

#[test]
fn json_roundtrip_preserves_state() {
    let mut state = ReviewState::new();
    state.favorites.insert(id(2));
    state.dismissed.insert(id(4));
    state.feedback.insert(id(2), "great".to_string());
    state.feedback.insert(id(1), String::new());

    let decoded = ReviewState::from_json(&state.to_json()).unwrap();
    assert_eq!(decoded, state);
}

#[test]
fn serialized_shape_has_three_members() {
    let mut state = ReviewState::new();
    state.favorites.insert(id(1));
    state.feedback.insert(id(3), "tighter copy".to_string());

    let value: serde_json::Value = serde_json::from_str(&state.to_json()).unwrap();
    assert_eq!(value["dismissed"], serde_json::json!([]));
    assert_eq!(value["favorites"], serde_json::json!([1]));
    assert_eq!(value["feedback"], serde_json::json!({"3": "tighter copy"}));
}

#[test]
fn missing_members_default_and_extra_members_are_ignored() {
    let state = ReviewState::from_json(r#"{"favorites":[3],"theme":"dark"}"#).unwrap();
    assert!(state.dismissed.is_empty());
    assert!(state.feedback.is_empty());
    assert!(state.is_favorite(id(3)));
}

#[test]
fn malformed_payloads_are_rejected() {
    for payload in [
        "",
        "{\"dismissed\":[1,",
        "null",
        "\"favorites\"",
        "{\"dismissed\":\"1\"}",
        "{\"feedback\":{\"x\":\"not a number key\"}}",
    ] {
        assert!(ReviewState::from_json(payload).is_none(), "{payload:?}");
    }
}

#[test]
fn has_notes_ignores_missing_and_blank_feedback() {
    let mut state = ReviewState::new();
    state.feedback.insert(id(1), String::new());
    state.feedback.insert(id(2), "  \n\t".to_string());
    state.feedback.insert(id(3), "  bolder hero ".to_string());

    assert!(!state.has_notes(id(1)));
    assert!(!state.has_notes(id(2)));
    assert!(state.has_notes(id(3)));
    assert!(!state.has_notes(id(4)));
    assert_eq!(state.notes(id(3)), Some("bolder hero"));
}

#[test]
fn active_variants_list_favorites_first_in_catalog_order() {
    let catalog = catalog();
    let mut state = ReviewState::new();
    state.favorites.insert(id(3));
    let ids: Vec<u32> = state
        .active_variants(&catalog)
        .iter()
        .map(|v| v.id.get())
        .collect();
    assert_eq!(ids, vec![3, 1, 2, 4]);
}

#[test]
fn dismissed_favorite_is_not_active() {
    let catalog = catalog();
    let mut state = ReviewState::new();
    state.favorites.insert(id(2));
    state.dismissed.insert(id(2));
    state.dismissed.insert(id(1));

    let active: Vec<u32> = state.active_variants(&catalog).iter().map(|v| v.id.get()).collect();
    let dismissed: Vec<u32> = state
        .dismissed_variants(&catalog)
        .iter()
        .map(|v| v.id.get())
        .collect();
    assert_eq!(active, vec![3, 4]);
    assert_eq!(dismissed, vec![1, 2]);
}

#[test]
fn retain_catalog_drops_unknown_ids() {
    let catalog = catalog();
    let mut state = ReviewState::new();
    state.favorites.extend([id(1), id(9)]);
    state.dismissed.insert(id(10));
    state.feedback.insert(id(11), "gone".to_string());
    state.feedback.insert(id(2), "kept".to_string());

    assert_eq!(state.retain_catalog(&catalog), 3);
    assert_eq!(state.favorites.iter().copied().collect::<Vec<_>>(), vec![id(1)]);
    assert!(state.dismissed.is_empty());
    assert_eq!(state.feedback(id(2)), Some("kept"));
    assert_eq!(state.retain_catalog(&catalog), 0);
}
