//! Core types for the pagecanvas component model.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: canvas components, the closed component-type tag set, style
//! properties, and the transient upload handle.

use serde::{Deserialize, Serialize};

/// The closed set of component templates offered by the palette.
///
/// The serialized form of each tag ("heading", "paragraph", ...) matches the
/// drag payload tags and the persisted record layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Heading,
    Paragraph,
    Button,
    Image,
}

impl ComponentType {
    /// String tag as used in drag payloads and persisted records.
    pub fn tag(&self) -> &'static str {
        match self {
            ComponentType::Heading => "heading",
            ComponentType::Paragraph => "paragraph",
            ComponentType::Button => "button",
            ComponentType::Image => "image",
        }
    }

    /// Parse a payload tag. Returns `None` for anything outside the
    /// recognized set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "heading" => Some(ComponentType::Heading),
            "paragraph" => Some(ComponentType::Paragraph),
            "button" => Some(ComponentType::Button),
            "image" => Some(ComponentType::Image),
            _ => None,
        }
    }

    /// True for components whose content is editable text (heading,
    /// paragraph, button). Images carry a URL or encoded payload instead.
    pub fn is_text_bearing(&self) -> bool {
        !matches!(self, ComponentType::Image)
    }

    pub fn all() -> &'static [ComponentType] {
        &[
            ComponentType::Heading,
            ComponentType::Paragraph,
            ComponentType::Button,
            ComponentType::Image,
        ]
    }
}

/// How an image component's `content` is interpreted: a plain URL, or an
/// encoded payload produced by the upload capability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    #[default]
    Link,
    Upload,
}

/// Style properties applied to a canvas component.
///
/// `background_color` is meaningful only for buttons but lives here so a
/// partial style update can address every key uniformly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Styles {
    /// Text color as a hex string (e.g. "#000000")
    pub color: String,
    /// Font size with unit (e.g. "16px")
    pub font_size: String,
    /// Font weight keyword (e.g. "bold", "normal")
    pub font_weight: String,
    /// Optional background color, used by buttons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Transient handle for an in-progress image upload.
///
/// Never persisted; always empty after a document is loaded from storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    /// Original file name as reported by the picker
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

/// Type-specific payload of a canvas component.
///
/// Each variant lists exactly the fields valid for its type, so the engines
/// never need tag-gated access to optional fields.
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentKind {
    Heading,
    Paragraph,
    Button {
        /// Navigation target for the rendered button
        link: String,
    },
    Image {
        /// Selects how `content` is interpreted
        source: ImageSource,
        /// In-flight upload handle, if any
        file: Option<UploadFile>,
    },
}

impl ComponentKind {
    pub fn component_type(&self) -> ComponentType {
        match self {
            ComponentKind::Heading => ComponentType::Heading,
            ComponentKind::Paragraph => ComponentType::Paragraph,
            ComponentKind::Button { .. } => ComponentType::Button,
            ComponentKind::Image { .. } => ComponentType::Image,
        }
    }

    pub fn is_text_bearing(&self) -> bool {
        self.component_type().is_text_bearing()
    }
}

/// A component placed on the canvas.
///
/// `content` holds display text for text types and a URL or encoded payload
/// for images. Document order is render order.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasComponent {
    /// Unique identifier, monotonically assigned at creation
    pub id: u64,
    /// Text payload or image source string
    pub content: String,
    /// Style settings
    pub styles: Styles,
    /// Type tag plus type-specific fields
    pub kind: ComponentKind,
}

impl CanvasComponent {
    pub fn component_type(&self) -> ComponentType {
        self.kind.component_type()
    }

    /// Button navigation target, if this is a button.
    pub fn link(&self) -> Option<&str> {
        match &self.kind {
            ComponentKind::Button { link } => Some(link),
            _ => None,
        }
    }

    /// Image source mode, if this is an image.
    pub fn image_source(&self) -> Option<ImageSource> {
        match &self.kind {
            ComponentKind::Image { source, .. } => Some(*source),
            _ => None,
        }
    }

    /// In-flight upload handle, if this is an image with one.
    pub fn upload_file(&self) -> Option<&UploadFile> {
        match &self.kind {
            ComponentKind::Image { file, .. } => file.as_ref(),
            _ => None,
        }
    }
}
