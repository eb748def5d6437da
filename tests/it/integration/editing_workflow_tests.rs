//! Selection, direct-edit, and upload workflow tests.

use crate::helpers::editor_with;
use pagecanvas::editor::PageEditor;
use pagecanvas::input::DragPayload;
use pagecanvas::storage::MemoryStore;
use pagecanvas::types::{ComponentType, ImageSource, UploadFile};
use pagecanvas::upload::encode_data_url;
use std::sync::Arc;

#[test]
fn test_background_click_commits_pending_edit_and_deselects() {
    let mut editor = editor_with(&[ComponentType::Heading]);
    let id = editor.components()[0].id;

    editor.component_click(id);
    editor.component_double_click(id);
    editor.edit_input("Typed but not blurred");
    editor.background_click();

    assert_eq!(editor.selection().selected(), None);
    assert_eq!(editor.selection().editing(), None);
    assert_eq!(editor.components()[0].content, "Typed but not blurred");
}

#[test]
fn test_selection_moves_between_components() {
    let mut editor = editor_with(&[ComponentType::Heading, ComponentType::Button]);
    let (a, b) = (editor.components()[0].id, editor.components()[1].id);

    editor.component_click(a);
    editor.component_click(b);
    assert!(editor.selection().is_selected(b));
    assert!(!editor.selection().is_selected(a));
}

#[test]
fn test_double_click_image_does_not_edit() {
    let mut editor = editor_with(&[ComponentType::Image]);
    let id = editor.components()[0].id;
    editor.component_double_click(id);
    assert_eq!(editor.selection().editing(), None);
}

#[test]
fn test_enter_commits_button_edit() {
    let mut editor = editor_with(&[ComponentType::Button]);
    let id = editor.components()[0].id;

    editor.component_double_click(id);
    editor.edit_input("Buy now");
    editor.edit_enter();

    assert_eq!(editor.selection().editing(), None);
    assert_eq!(editor.components()[0].content, "Buy now");
}

#[test]
fn test_enter_keeps_paragraph_edit_open() {
    let mut editor = editor_with(&[ComponentType::Paragraph]);
    let id = editor.components()[0].id;

    editor.component_double_click(id);
    editor.edit_input("first line");
    editor.edit_enter();
    assert_eq!(editor.selection().editing(), Some(id));

    editor.edit_blur();
    assert_eq!(editor.selection().editing(), None);
    assert_eq!(editor.components()[0].content, "first line");
}

#[test]
fn test_upload_workflow_end_to_end() {
    let store = Arc::new(MemoryStore::new());
    let mut editor = PageEditor::new(store.clone());
    editor.drag_start(DragPayload::Palette(ComponentType::Image));
    editor.canvas_drop();
    let id = editor.components()[0].id;

    editor.set_image_source(id, ImageSource::Upload);
    editor.start_upload(
        id,
        UploadFile {
            name: "logo.png".to_string(),
            size: 3,
        },
    );
    assert!(editor.components()[0].upload_file().is_some());

    // the file-read capability completes and delivers the encoded payload
    let payload = encode_data_url("image/png", b"abc");
    editor.finish_upload(id, Ok(payload.clone()));
    assert_eq!(editor.components()[0].content, payload);

    // a reload sees the encoded content but never the transient handle
    let reloaded = PageEditor::new(store);
    assert_eq!(reloaded.components()[0].content, payload);
    assert_eq!(reloaded.components()[0].upload_file(), None);
    assert_eq!(
        reloaded.components()[0].image_source(),
        Some(ImageSource::Upload)
    );
}

#[test]
fn test_switching_source_type_drops_stale_upload() {
    let mut editor = editor_with(&[ComponentType::Image]);
    let id = editor.components()[0].id;

    editor.set_image_source(id, ImageSource::Upload);
    editor.start_upload(
        id,
        UploadFile {
            name: "stale.jpg".to_string(),
            size: 9,
        },
    );
    editor.set_image_source(id, ImageSource::Link);

    let image = &editor.components()[0];
    assert_eq!(image.image_source(), Some(ImageSource::Link));
    assert_eq!(image.upload_file(), None);
    // content stays until the caller replaces it
    assert!(!image.content.is_empty());
}

#[test]
fn test_stale_panel_update_after_removal_is_harmless() {
    let mut editor = editor_with(&[ComponentType::Button]);
    let id = editor.components()[0].id;

    editor.remove_component(id);
    // the panel still holds the old id for one event
    editor.set_content(id, "ghost");
    editor.set_link(id, "https://example.com");
    assert!(editor.components().is_empty());
}
