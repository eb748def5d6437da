//! Document model unit tests - ordering and id invariants.

use crate::helpers::{assert_component_count, document_with, ids, TestDocumentBuilder};
use pagecanvas::patch::ComponentPatch;
use pagecanvas::types::ComponentType;

#[test]
fn test_operation_sequence_preserves_untargeted_ids() {
    let mut doc = TestDocumentBuilder::new()
        .with_heading()
        .with_paragraph()
        .with_button()
        .with_image()
        .build();

    let removed = ids(&doc)[2];
    let mut survivors: Vec<u64> = ids(&doc);
    survivors.retain(|&id| id != removed);

    let fresh = doc.create(ComponentType::Paragraph);
    doc.insert_at(fresh, 1);
    doc.move_to(0, 3);
    doc.remove_by_id(removed);
    doc.move_to(2, 0);

    let after = ids(&doc);
    for id in &survivors {
        assert!(after.contains(id), "id {} lost by reorder/removal", id);
    }
    let mut unique = after.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), after.len(), "duplicate ids after operations");
}

#[test]
fn test_move_and_inverse_restore_order() {
    let mut doc = document_with(&[
        ComponentType::Heading,
        ComponentType::Paragraph,
        ComponentType::Button,
        ComponentType::Image,
    ]);
    let original = ids(&doc);

    for (from, to) in [(0usize, 3usize), (1, 2), (3, 0), (2, 1)] {
        doc.move_to(from, to);
        // recompute the inverse against the post-move state
        doc.move_to(to, from);
        assert_eq!(ids(&doc), original, "move ({from},{to}) was not a permutation");
    }
}

#[test]
fn test_style_merge_leaves_sibling_keys() {
    let mut doc = document_with(&[ComponentType::Button]);
    let id = ids(&doc)[0];
    let before = doc.get(id).unwrap().styles.clone();

    doc.update_by_id(id, &ComponentPatch::new().with_font_size("20px"));

    let styles = &doc.get(id).unwrap().styles;
    assert_eq!(styles.font_size, "20px");
    assert_eq!(styles.color, before.color);
    assert_eq!(styles.font_weight, before.font_weight);
    assert_eq!(styles.background_color, before.background_color);
}

#[test]
fn test_created_button_defaults() {
    let mut doc = pagecanvas::document::Document::new();
    let button = doc.create(ComponentType::Button);
    assert_eq!(button.component_type(), ComponentType::Button);
    assert!(!button.content.is_empty());
    assert_eq!(button.link(), Some("#"));
    let background = button.styles.background_color.as_deref().unwrap();
    assert!(!background.is_empty());
    assert_ne!(background, "transparent");
}

#[test]
fn test_created_heading_is_bold() {
    let mut doc = pagecanvas::document::Document::new();
    let heading = doc.create(ComponentType::Heading);
    assert_eq!(heading.styles.font_weight, "bold");
}

#[test]
fn test_insert_remove_counts() {
    let mut doc = document_with(&[ComponentType::Heading, ComponentType::Paragraph]);
    assert_component_count(&doc, 2);

    let image = doc.create(ComponentType::Image);
    let image_id = image.id;
    doc.insert_at(image, 1);
    assert_component_count(&doc, 3);
    assert_eq!(doc.index_of(image_id), Some(1));

    doc.remove_by_id(image_id);
    assert_component_count(&doc, 2);
    assert_eq!(doc.index_of(image_id), None);
}
