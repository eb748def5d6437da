//! Drag/reorder input handling for the canvas.
//!
//! This module translates the external drag transport's events (drag-start,
//! hover, drop, cancel) into document mutations.
//!
//! ## Architecture
//!
//! An explicit state machine ([`DragState`]) tracks the current gesture,
//! replacing scattered flags and making impossible states unrepresentable.
//! The engine carries the dragged component's index across hover ticks so
//! the midpoint-hysteresis rule compares against where the component
//! actually is, not where the transport last saw it.
//!
//! ## Modules
//!
//! - `state` - gesture state machine, drag payloads, slot geometry
//! - `drag` - the engine consuming hover/drop events

mod drag;
mod state;

pub use drag::DragEngine;
pub use state::{DragPayload, DragSource, DragState, SlotBounds};
