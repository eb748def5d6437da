//! Canvas component model and interaction core for a drag-and-drop page
//! editor.
//!
//! A palette of component templates (heading, paragraph, button, image) is
//! dragged onto a canvas, reordered with midpoint-crossing hysteresis,
//! edited in place, and styled through partial property merges; the
//! resulting component sequence is persisted write-through to a pluggable
//! blob store.
//!
//! Rendering, the pointer/drag transport, and the raw key-value store are
//! external collaborators: the transport delivers drag-start/hover/drop
//! events to [`PageEditor`], and storage implements [`storage::BlobStore`].

pub mod constants;
pub mod document;
pub mod editor;
pub mod error;
pub mod input;
pub mod patch;
pub mod registry;
pub mod selection;
pub mod storage;
pub mod types;
pub mod upload;

pub use document::Document;
pub use editor::PageEditor;
pub use input::{DragEngine, DragPayload, DragState, SlotBounds};
pub use patch::{ComponentPatch, StylePatch};
pub use selection::SelectionManager;
pub use types::{CanvasComponent, ComponentKind, ComponentType, ImageSource, Styles, UploadFile};
