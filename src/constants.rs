//! Application-wide constants.
//!
//! Centralizes palette defaults and storage values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Storage
// ============================================================================

/// Blob-store key under which the document is persisted
pub const STORAGE_KEY: &str = "pagecanvas-document";

// ============================================================================
// Palette Default Content
// ============================================================================

/// Default content for a freshly dropped heading
pub const DEFAULT_HEADING_CONTENT: &str = "New Heading";

/// Default content for a freshly dropped paragraph
pub const DEFAULT_PARAGRAPH_CONTENT: &str = "Some default text";

/// Default content for a freshly dropped button
pub const DEFAULT_BUTTON_CONTENT: &str = "Click me";

/// Placeholder image URL for a freshly dropped image
pub const DEFAULT_IMAGE_URL: &str = "https://placehold.co/600x400";

/// Default navigation target for buttons
pub const DEFAULT_BUTTON_LINK: &str = "#";

// ============================================================================
// Default Styles (hex values and CSS keywords)
// ============================================================================

/// Default text color for canvas components
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// Default text color for buttons (rendered on a filled background)
pub const DEFAULT_BUTTON_TEXT_COLOR: &str = "#ffffff";

/// Default button background color
pub const DEFAULT_BUTTON_BACKGROUND: &str = "#007bff";

/// Default font size for body-level components
pub const DEFAULT_FONT_SIZE: &str = "16px";

/// Default font size for headings
pub const HEADING_FONT_SIZE: &str = "28px";

/// Normal font weight keyword
pub const FONT_WEIGHT_NORMAL: &str = "normal";

/// Bold font weight keyword
pub const FONT_WEIGHT_BOLD: &str = "bold";

// ============================================================================
// Drag Transport
// ============================================================================

/// Payload tag used by the transport for reordering an existing component
pub const CANVAS_COMPONENT_TAG: &str = "canvasComponent";
