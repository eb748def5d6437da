//! Selection and edit-mode state machine.
//!
//! At most one component is selected and at most one is in direct edit at
//! any time. The two are tracked independently: entering edit mode never
//! toggles selection, and selection moves freely while an edit is pending
//! (the transport delivers a blur to commit it). While editing, typed
//! content accumulates in a draft buffer and is committed through the
//! document's merge path on blur, Enter (single-line types), or background
//! click.

use crate::document::Document;
use crate::patch::ComponentPatch;
use crate::types::ComponentType;

/// Tracks the selected component and the component in direct edit mode.
#[derive(Default)]
pub struct SelectionManager {
    selected: Option<u64>,
    editing: Option<u64>,
    draft: Option<String>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    pub fn editing(&self) -> Option<u64> {
        self.editing
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected == Some(id)
    }

    pub fn is_editing(&self, id: u64) -> bool {
        self.editing == Some(id)
    }

    /// Single click on a component: select it, silently dropping the
    /// previous selection. A click on the component currently being edited
    /// belongs to the edit surface and changes nothing.
    pub fn click_component(&mut self, doc: &Document, id: u64) {
        if self.is_editing(id) {
            return;
        }
        if doc.get(id).is_none() {
            return;
        }
        self.selected = Some(id);
    }

    /// Click on the empty canvas background: commit any pending edit, exit
    /// edit mode, and deselect.
    pub fn click_background(&mut self, doc: &mut Document) {
        self.commit_edit(doc);
        self.selected = None;
    }

    /// Double click: enter direct edit mode for text-bearing components.
    /// Any other pending edit is committed first. Selection is untouched.
    pub fn double_click_component(&mut self, doc: &mut Document, id: u64) {
        let Some(component) = doc.get(id) else {
            return;
        };
        if !component.kind.is_text_bearing() {
            return;
        }
        if self.is_editing(id) {
            return;
        }
        self.commit_edit(doc);
        self.draft = Some(doc.get(id).map(|c| c.content.clone()).unwrap_or_default());
        self.editing = Some(id);
    }

    /// Replace the draft with the edit field's current text.
    pub fn edit_input(&mut self, text: impl Into<String>) {
        if self.editing.is_some() {
            self.draft = Some(text.into());
        }
    }

    /// Focus left the edit field: commit the draft and exit edit mode.
    pub fn blur(&mut self, doc: &mut Document) {
        self.commit_edit(doc);
    }

    /// Enter pressed while editing. Headings and buttons treat it as a
    /// blur; paragraphs are multi-line and ignore it.
    pub fn enter_key(&mut self, doc: &mut Document) {
        let Some(id) = self.editing else {
            return;
        };
        let multi_line = doc
            .get(id)
            .map(|c| c.component_type() == ComponentType::Paragraph)
            .unwrap_or(false);
        if !multi_line {
            self.commit_edit(doc);
        }
    }

    /// A component was removed: drop any state referencing it. A pending
    /// draft for the removed component is discarded, not committed.
    pub fn component_removed(&mut self, id: u64) {
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.editing == Some(id) {
            self.editing = None;
            self.draft = None;
        }
    }

    fn commit_edit(&mut self, doc: &mut Document) {
        let Some(id) = self.editing.take() else {
            return;
        };
        if let Some(draft) = self.draft.take() {
            doc.update_by_id(id, &ComponentPatch::new().with_content(draft));
        }
    }
}
