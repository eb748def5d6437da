//! Drag gesture state machine - unified state for the reorder/drop engine.
//!
//! A single explicit state machine replaces scattered flags, making
//! impossible states unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging      (drag-start with a recognized payload)
//! Dragging -> Idle      (drop or cancel - finalizes the gesture)
//! ```

use crate::constants::CANVAS_COMPONENT_TAG;
use crate::types::ComponentType;

/// Where an active drag originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// A template dragged from the palette; nothing exists on the canvas yet
    Palette { component_type: ComponentType },
    /// An existing canvas component being reordered
    Canvas {
        component_id: u64,
        /// Index at drag-start, used to restore order on cancel
        origin_index: usize,
        /// Live index of the dragged component, refreshed from the document
        /// by the engine before each midpoint comparison.
        current_index: usize,
    },
}

/// State of the current drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No active gesture
    #[default]
    Idle,
    /// A payload is in flight over the canvas
    Dragging { source: DragSource },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Id of the canvas component being reordered, if any.
    pub fn dragged_component_id(&self) -> Option<u64> {
        match self {
            Self::Dragging {
                source: DragSource::Canvas { component_id, .. },
            } => Some(*component_id),
            _ => None,
        }
    }

    /// Current index of the dragged canvas component, if any.
    pub fn current_index(&self) -> Option<usize> {
        match self {
            Self::Dragging {
                source: DragSource::Canvas { current_index, .. },
            } => Some(*current_index),
            _ => None,
        }
    }

    /// Palette type in flight, if any.
    pub fn palette_type(&self) -> Option<ComponentType> {
        match self {
            Self::Dragging {
                source: DragSource::Palette { component_type },
            } => Some(*component_type),
            _ => None,
        }
    }

    /// Record the dragged component's new index after a hover move.
    pub fn set_current_index(&mut self, index: usize) {
        if let Self::Dragging {
            source: DragSource::Canvas { current_index, .. },
        } = self
        {
            *current_index = index;
        }
    }

    /// Reset to Idle.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

/// Payload delivered by the external drag transport at drag-start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPayload {
    /// A palette template identified by its component tag
    Palette(ComponentType),
    /// An existing canvas component identified by id and index
    CanvasComponent { id: u64, index: usize },
}

impl DragPayload {
    /// Parse the transport's `{ type, id?, index? }` triple. Unrecognized
    /// tags and incomplete canvas payloads yield `None` and are ignored by
    /// the engine.
    pub fn parse(tag: &str, id: Option<u64>, index: Option<usize>) -> Option<Self> {
        if tag == CANVAS_COMPONENT_TAG {
            return Some(DragPayload::CanvasComponent {
                id: id?,
                index: index?,
            });
        }
        ComponentType::from_tag(tag).map(DragPayload::Palette)
    }
}

/// Vertical extent of a candidate slot in client space, as reported by the
/// transport alongside each hover/drop callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotBounds {
    pub top: f32,
    pub bottom: f32,
}

impl SlotBounds {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// The half-way line the pointer must cross before a reorder fires.
    pub fn midpoint(&self) -> f32 {
        self.top + (self.bottom - self.top) / 2.0
    }
}
