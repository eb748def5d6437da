//! Editor façade - owns the document and the interaction state machines.
//!
//! [`PageEditor`] is the single owned state object: UI callbacks deliver
//! their events here and nothing else mutates the component sequence. On
//! construction it restores the document from the store and wires the
//! write-through hook so every successful mutation is persisted before the
//! triggering event returns.

use crate::document::Document;
use crate::error::StorageResult;
use crate::input::{DragEngine, DragPayload, DragState, SlotBounds};
use crate::patch::{ComponentPatch, StylePatch};
use crate::selection::SelectionManager;
use crate::storage::{BlobStore, DocumentStore, MemoryStore};
use crate::types::{CanvasComponent, ImageSource, UploadFile};
use std::sync::Arc;

/// Top-level editor state: document, drag engine, selection, persistence.
pub struct PageEditor {
    document: Document,
    drag: DragEngine,
    selection: SelectionManager,
    store: DocumentStore,
}

impl PageEditor {
    /// Restore the document from `store` and wire write-through saves.
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        let store = DocumentStore::new(store);
        let mut document = Document::from_components(store.load());
        let write_through = store.clone();
        document.set_on_mutation(Box::new(move |components| {
            // The mutation itself already succeeded; a failed save is a
            // diagnostics concern, not a reason to unwind the edit.
            if let Err(e) = write_through.save(components) {
                tracing::error!("write-through save failed: {e}");
            }
        }));
        Self {
            document,
            drag: DragEngine::new(),
            selection: SelectionManager::new(),
            store,
        }
    }

    /// Editor backed by an in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn components(&self) -> &[CanvasComponent] {
        self.document.components()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Persist the current document immediately, surfacing any failure.
    pub fn flush(&self) -> StorageResult<()> {
        self.store.save(self.document.components())
    }

    // ==================== Drag Transport Events ====================

    pub fn drag_start(&mut self, payload: DragPayload) {
        self.drag.drag_start(&self.document, payload);
    }

    /// Hover tick over the slot at `hover_index`. Returns whether a reorder
    /// move fired.
    pub fn slot_hover(&mut self, hover_index: usize, pointer_y: f32, bounds: SlotBounds) -> bool {
        self.drag
            .hover_slot(&mut self.document, hover_index, pointer_y, bounds)
    }

    /// Drop onto the slot at `drop_index`. Returns the id of a component
    /// inserted from the palette.
    pub fn slot_drop(&mut self, drop_index: usize) -> Option<u64> {
        self.drag.drop_on_slot(&mut self.document, drop_index)
    }

    /// Drop onto the canvas background (fires after any slot drop; ignored
    /// when the slot already consumed the gesture).
    pub fn canvas_drop(&mut self) -> Option<u64> {
        self.drag.drop_on_canvas(&mut self.document)
    }

    pub fn drag_cancel(&mut self) {
        self.drag.cancel(&mut self.document);
    }

    // ==================== Selection & Editing Events ====================

    /// Single click on a component. The transport must stop the click from
    /// also reaching the background handler, or the selection would be
    /// dropped again in the same gesture.
    pub fn component_click(&mut self, id: u64) {
        self.selection.click_component(&self.document, id);
    }

    pub fn background_click(&mut self) {
        self.selection.click_background(&mut self.document);
    }

    pub fn component_double_click(&mut self, id: u64) {
        self.selection.double_click_component(&mut self.document, id);
    }

    pub fn edit_input(&mut self, text: impl Into<String>) {
        self.selection.edit_input(text);
    }

    pub fn edit_blur(&mut self) {
        self.selection.blur(&mut self.document);
    }

    pub fn edit_enter(&mut self) {
        self.selection.enter_key(&mut self.document);
    }

    // ==================== Properties Panel Operations ====================

    pub fn set_content(&mut self, id: u64, content: impl Into<String>) {
        self.document
            .update_by_id(id, &ComponentPatch::new().with_content(content));
    }

    pub fn update_styles(&mut self, id: u64, styles: StylePatch) {
        self.document
            .update_by_id(id, &ComponentPatch::new().with_styles(styles));
    }

    pub fn set_link(&mut self, id: u64, link: impl Into<String>) {
        self.document
            .update_by_id(id, &ComponentPatch::new().with_link(link));
    }

    /// Switch how an image sources its content. Any in-flight upload handle
    /// is cleared along with it so a stale payload cannot linger; content
    /// itself is left for the caller to replace.
    pub fn set_image_source(&mut self, id: u64, source: ImageSource) {
        self.document.update_by_id(
            id,
            &ComponentPatch::new()
                .with_image_source(source)
                .clearing_file(),
        );
    }

    /// Record the in-flight upload handle when the file read begins.
    pub fn start_upload(&mut self, id: u64, file: UploadFile) {
        self.document
            .update_by_id(id, &ComponentPatch::new().with_file(file));
    }

    /// Deliver the upload outcome. Success merges the encoded payload as
    /// content in a single update, so the document never observes a
    /// half-populated upload; failure changes nothing.
    pub fn finish_upload(&mut self, id: u64, result: anyhow::Result<String>) {
        match result {
            Ok(payload) => {
                self.document
                    .update_by_id(id, &ComponentPatch::new().with_content(payload));
            }
            Err(e) => {
                tracing::warn!(id, "upload failed: {e}");
            }
        }
    }

    /// Remove a component, releasing any selection, edit, or drag state
    /// that referenced it.
    pub fn remove_component(&mut self, id: u64) {
        if self.document.remove_by_id(id) {
            self.selection.component_removed(id);
            self.drag.component_removed(id);
        }
    }
}
