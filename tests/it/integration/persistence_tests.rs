//! Persistence integration tests - write-through saves and startup loads.

use crate::helpers::{editor_with, init_logging};
use pagecanvas::constants::STORAGE_KEY;
use pagecanvas::editor::PageEditor;
use pagecanvas::input::DragPayload;
use pagecanvas::storage::{BlobStore, FileStore, MemoryStore};
use pagecanvas::types::{ComponentKind, ComponentType};
use std::sync::Arc;

fn blob(store: &MemoryStore) -> Option<String> {
    store.get(STORAGE_KEY).unwrap()
}

#[test]
fn test_every_mutation_writes_through() {
    init_logging();
    let store = Arc::new(MemoryStore::new());
    let mut editor = PageEditor::new(store.clone());
    assert_eq!(blob(&store), None);

    editor.drag_start(DragPayload::Palette(ComponentType::Heading));
    editor.canvas_drop();
    let after_drop = blob(&store).expect("saved after insert");
    assert!(after_drop.contains("\"heading\""));

    let id = editor.components()[0].id;
    editor.set_content(id, "Persisted title");
    let after_edit = blob(&store).expect("saved after update");
    assert!(after_edit.contains("Persisted title"));

    editor.remove_component(id);
    assert_eq!(blob(&store).as_deref(), Some("[]"));
}

#[test]
fn test_reload_round_trip_preserves_fields() {
    let store = Arc::new(MemoryStore::new());
    {
        let mut editor = PageEditor::new(store.clone());
        editor.drag_start(DragPayload::Palette(ComponentType::Button));
        editor.canvas_drop();
        let id = editor.components()[0].id;
        editor.set_link(id, "https://example.com");
    }

    let reloaded = PageEditor::new(store);
    assert_eq!(reloaded.components().len(), 1);
    let button = &reloaded.components()[0];
    assert_eq!(button.component_type(), ComponentType::Button);
    assert_eq!(button.content, "Click me");
    assert_eq!(button.link(), Some("https://example.com"));
    assert!(button.styles.background_color.is_some());
}

#[test]
fn test_stored_file_reference_is_stripped_on_load() {
    // A blob written by a buggy client that persisted the transient handle.
    let store = Arc::new(MemoryStore::new());
    store
        .set(
            STORAGE_KEY,
            r##"[{"id":1,"type":"button","content":"Click me",
                "styles":{"color":"#ffffff","fontSize":"16px","fontWeight":"normal","backgroundColor":"#007bff"},
                "link":"#","file":{"name":"bogus.bin","size":12}}]"##,
        )
        .unwrap();

    let editor = PageEditor::new(store);
    assert_eq!(editor.components().len(), 1);
    let button = &editor.components()[0];
    assert_eq!(button.id, 1);
    assert_eq!(button.content, "Click me");
    assert_eq!(button.link(), Some("#"));
    assert_eq!(button.upload_file(), None);
}

#[test]
fn test_corrupt_blob_yields_empty_document() {
    init_logging();
    let store = Arc::new(MemoryStore::new());
    store.set(STORAGE_KEY, "]{ definitely not json").unwrap();

    let editor = PageEditor::new(store);
    assert!(editor.components().is_empty());
}

#[test]
fn test_shape_mismatch_yields_empty_document() {
    let store = Arc::new(MemoryStore::new());
    // valid JSON, wrong shape
    store.set(STORAGE_KEY, r#"{"items":[1,2,3]}"#).unwrap();

    let editor = PageEditor::new(store);
    assert!(editor.components().is_empty());
}

#[test]
fn test_id_assignment_resumes_past_stored_ids() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(
            STORAGE_KEY,
            r##"[{"id":41,"type":"paragraph","content":"old",
                "styles":{"color":"#000000","fontSize":"16px","fontWeight":"normal"}}]"##,
        )
        .unwrap();

    let mut editor = PageEditor::new(store);
    editor.drag_start(DragPayload::Palette(ComponentType::Heading));
    let fresh = editor.canvas_drop().unwrap();
    assert!(fresh > 41, "fresh id {fresh} collides with stored ids");
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path()));
    {
        let mut editor = PageEditor::new(store.clone());
        editor.drag_start(DragPayload::Palette(ComponentType::Image));
        editor.canvas_drop();
        editor.flush().unwrap();
    }

    let reloaded = PageEditor::new(store);
    assert_eq!(reloaded.components().len(), 1);
    assert!(matches!(
        reloaded.components()[0].kind,
        ComponentKind::Image { .. }
    ));
}

#[test]
fn test_file_store_missing_dir_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("never-created")));
    let editor = PageEditor::new(store);
    assert!(editor.components().is_empty());
}

#[test]
fn test_reorder_is_persisted() {
    let store = Arc::new(MemoryStore::new());
    {
        let mut editor = PageEditor::new(store.clone());
        for ty in [ComponentType::Heading, ComponentType::Paragraph] {
            editor.drag_start(DragPayload::Palette(ty));
            editor.canvas_drop();
        }
        let b = editor.components()[1].id;
        editor.drag_start(DragPayload::CanvasComponent { id: b, index: 1 });
        editor.slot_hover(0, 5.0, pagecanvas::input::SlotBounds::new(0.0, 40.0));
        editor.slot_drop(0);
    }

    let reloaded = PageEditor::new(store);
    let types: Vec<ComponentType> = reloaded
        .components()
        .iter()
        .map(|c| c.component_type())
        .collect();
    assert_eq!(types, vec![ComponentType::Paragraph, ComponentType::Heading]);
}

#[test]
fn test_editor_with_helper_uses_write_through() {
    // editor_with drives real palette drops, so its documents are persisted
    let editor = editor_with(&[ComponentType::Heading, ComponentType::Button]);
    assert_eq!(editor.components().len(), 2);
    editor.flush().unwrap();
}
