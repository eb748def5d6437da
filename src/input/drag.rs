//! Drag engine - translates hover/drop geometry into document mutations.
//!
//! Hover is a hot path (many ticks per second during a gesture), so every
//! handler starts with cheap early exits. Reorder moves fire on hover with
//! midpoint-crossing hysteresis; palette drops mutate only at drop time.

use crate::document::Document;
use crate::input::state::{DragPayload, DragSource, DragState, SlotBounds};

/// Consumes transport-level drag events and drives the document.
///
/// One engine instance tracks at most one gesture. The first drop (or a
/// cancel) consumes the gesture; later deliveries for the same physical
/// drop find the engine idle and are ignored, so nested and outer drop
/// targets cannot both mutate.
#[derive(Default)]
pub struct DragEngine {
    state: DragState,
}

impl DragEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Begin a gesture. Malformed or stale payloads are ignored; a gesture
    /// already in flight is never replaced.
    pub fn drag_start(&mut self, doc: &Document, payload: DragPayload) {
        if self.state.is_dragging() {
            return;
        }
        match payload {
            DragPayload::Palette(component_type) => {
                self.state = DragState::Dragging {
                    source: DragSource::Palette { component_type },
                };
            }
            DragPayload::CanvasComponent { id, .. } => {
                // The transport's index can lag behind the document; resolve
                // the live index instead.
                let Some(index) = doc.index_of(id) else {
                    tracing::debug!(id, "drag-start for absent component ignored");
                    return;
                };
                self.state = DragState::Dragging {
                    source: DragSource::Canvas {
                        component_id: id,
                        origin_index: index,
                        current_index: index,
                    },
                };
            }
        }
    }

    /// Hover tick over the slot at `hover_index`.
    ///
    /// Palette sources never mutate on hover. Canvas sources reorder once
    /// the pointer crosses the slot's midpoint in the direction of travel:
    /// dragging downward requires the pointer below the midpoint, dragging
    /// upward above it. Returns whether a move was performed.
    pub fn hover_slot(
        &mut self,
        doc: &mut Document,
        hover_index: usize,
        pointer_y: f32,
        bounds: SlotBounds,
    ) -> bool {
        let DragState::Dragging {
            source: DragSource::Canvas { component_id, .. },
        } = self.state
        else {
            return false;
        };
        // Removals elsewhere in the document shift indices mid-gesture, so
        // the cached index cannot be trusted; re-derive the live one.
        let Some(current_index) = doc.index_of(component_id) else {
            self.state.reset();
            return false;
        };
        self.state.set_current_index(current_index);
        let hover_index = hover_index.min(doc.len().saturating_sub(1));
        if current_index == hover_index {
            return false;
        }

        let midpoint = bounds.midpoint();
        let dragging_down = current_index < hover_index;
        if dragging_down && pointer_y < midpoint {
            return false;
        }
        if !dragging_down && pointer_y > midpoint {
            return false;
        }

        let moved = doc.move_to(current_index, hover_index);
        if moved {
            self.state.set_current_index(hover_index);
        }
        moved
    }

    /// Drop onto the slot at `drop_index`.
    ///
    /// Palette sources insert a freshly created component there; canvas
    /// sources are already in place from hover moves, so the drop only
    /// confirms. Returns the id of an inserted component.
    pub fn drop_on_slot(&mut self, doc: &mut Document, drop_index: usize) -> Option<u64> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging {
                source: DragSource::Palette { component_type },
            } => {
                let component = doc.create(component_type);
                let id = component.id;
                doc.insert_at(component, drop_index);
                self.state.reset();
                Some(id)
            }
            DragState::Dragging {
                source: DragSource::Canvas { .. },
            } => {
                self.state.reset();
                None
            }
        }
    }

    /// Drop onto the canvas background, outside any slot. Ignored when a
    /// slot already consumed the gesture.
    pub fn drop_on_canvas(&mut self, doc: &mut Document) -> Option<u64> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging {
                source: DragSource::Palette { component_type },
            } => {
                let component = doc.create(component_type);
                let id = component.id;
                doc.append(component);
                self.state.reset();
                Some(id)
            }
            DragState::Dragging {
                source: DragSource::Canvas { .. },
            } => {
                self.state.reset();
                None
            }
        }
    }

    /// Cancel the gesture (released outside any valid target). Reorder
    /// gestures restore the pre-gesture order.
    pub fn cancel(&mut self, doc: &mut Document) {
        if let DragState::Dragging {
            source:
                DragSource::Canvas {
                    component_id,
                    origin_index,
                    ..
                },
        } = self.state
        {
            // Re-derive the live index; removals mid-gesture shift it.
            if let Some(current_index) = doc.index_of(component_id) {
                if current_index != origin_index {
                    doc.move_to(current_index, origin_index);
                }
            }
        }
        self.state.reset();
    }

    /// Drop the gesture if the component it was reordering went away.
    pub fn component_removed(&mut self, id: u64) {
        if self.state.dragged_component_id() == Some(id) {
            self.state.reset();
        }
    }
}
