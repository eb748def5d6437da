//! Document model - the ordered component sequence and its operations.
//!
//! The [`Document`] is the single source of truth for what is on the canvas.
//! Every mutation funnels through its operation set; nothing else touches
//! the sequence directly. Each successful mutation synchronously invokes the
//! on-mutation hook with the new component slice, which is where the
//! write-through persistence adapter attaches.

use crate::patch::ComponentPatch;
use crate::registry;
use crate::types::{CanvasComponent, ComponentKind, ComponentType};

/// Callback invoked after every successful mutating operation.
pub type MutationHook = Box<dyn FnMut(&[CanvasComponent])>;

/// An ordered sequence of canvas components with unique ids.
///
/// Order is render order. Ids are assigned from a monotonic counter and stay
/// unique for the document's lifetime.
#[derive(Default)]
pub struct Document {
    components: Vec<CanvasComponent>,
    next_id: u64,
    on_mutation: Option<MutationHook>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a document from restored components, resuming id assignment
    /// past the highest id present.
    pub fn from_components(components: Vec<CanvasComponent>) -> Self {
        let next_id = components.iter().map(|c| c.id + 1).max().unwrap_or(0);
        Self {
            components,
            next_id,
            on_mutation: None,
        }
    }

    /// Install the hook invoked after each successful mutation.
    pub fn set_on_mutation(&mut self, hook: MutationHook) {
        self.on_mutation = Some(hook);
    }

    pub fn components(&self) -> &[CanvasComponent] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&CanvasComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.components.iter().position(|c| c.id == id)
    }

    /// Build a fully populated component from the registry defaults for
    /// `component_type`, consuming a fresh id.
    pub fn create(&mut self, component_type: ComponentType) -> CanvasComponent {
        let defaults = registry::defaults(component_type);
        let id = self.next_id;
        self.next_id += 1;
        let kind = match component_type {
            ComponentType::Heading => ComponentKind::Heading,
            ComponentType::Paragraph => ComponentKind::Paragraph,
            ComponentType::Button => ComponentKind::Button {
                link: defaults.link.unwrap_or_default().to_string(),
            },
            ComponentType::Image => ComponentKind::Image {
                source: defaults.image_source.unwrap_or_default(),
                file: None,
            },
        };
        CanvasComponent {
            id,
            content: defaults.content.to_string(),
            styles: defaults.styles.clone(),
            kind,
        }
    }

    /// Add a component to the end of the sequence.
    pub fn append(&mut self, component: CanvasComponent) {
        tracing::debug!(id = component.id, "append component");
        self.components.push(component);
        self.notify();
    }

    /// Insert a component at `index`, clamped to `[0, len]`.
    pub fn insert_at(&mut self, component: CanvasComponent, index: usize) {
        let index = index.min(self.components.len());
        tracing::debug!(id = component.id, index, "insert component");
        self.components.insert(index, component);
        self.notify();
    }

    /// Move the component at `from` to `to` as one atomic step.
    ///
    /// An out-of-range `from` is a no-op; `to` is clamped. Returns whether
    /// the order changed.
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        if from >= self.components.len() {
            return false;
        }
        let to = to.min(self.components.len() - 1);
        if from == to {
            return false;
        }
        let component = self.components.remove(from);
        self.components.insert(to, component);
        self.notify();
        true
    }

    /// Merge `patch` into the component with `id`. A missing id is a silent
    /// no-op so removal races with in-flight edits cannot fail.
    pub fn update_by_id(&mut self, id: u64, patch: &ComponentPatch) {
        let Some(index) = self.index_of(id) else {
            tracing::debug!(id, "update for absent component ignored");
            return;
        };
        self.components[index] = patch.apply_to(&self.components[index]);
        self.notify();
    }

    /// Remove the component with `id`. Returns whether anything was removed.
    pub fn remove_by_id(&mut self, id: u64) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        tracing::debug!(id, index, "remove component");
        self.components.remove(index);
        self.notify();
        true
    }

    fn notify(&mut self) {
        let Self {
            components,
            on_mutation,
            ..
        } = self;
        if let Some(hook) = on_mutation.as_mut() {
            hook(components);
        }
    }
}
