//! Component registry - palette defaults for each component type.
//!
//! A pure lookup table: given a [`ComponentType`], it yields the default
//! content, styles, and auxiliary fields a freshly dropped component starts
//! with. The document factory consumes these when a palette item lands on
//! the canvas.

use crate::constants::{
    DEFAULT_BUTTON_BACKGROUND, DEFAULT_BUTTON_CONTENT, DEFAULT_BUTTON_LINK,
    DEFAULT_BUTTON_TEXT_COLOR, DEFAULT_FONT_SIZE, DEFAULT_HEADING_CONTENT, DEFAULT_IMAGE_URL,
    DEFAULT_PARAGRAPH_CONTENT, DEFAULT_TEXT_COLOR, FONT_WEIGHT_BOLD, FONT_WEIGHT_NORMAL,
    HEADING_FONT_SIZE,
};
use crate::types::{ComponentType, ImageSource, Styles};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Defaults for one component type.
#[derive(Clone, Debug)]
pub struct ComponentDefaults {
    /// Initial `content` string
    pub content: &'static str,
    /// Initial style settings
    pub styles: Styles,
    /// Initial navigation target (buttons only)
    pub link: Option<&'static str>,
    /// Initial image source mode (images only)
    pub image_source: Option<ImageSource>,
}

static REGISTRY: Lazy<HashMap<ComponentType, ComponentDefaults>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(
        ComponentType::Heading,
        ComponentDefaults {
            content: DEFAULT_HEADING_CONTENT,
            styles: Styles {
                color: DEFAULT_TEXT_COLOR.to_string(),
                font_size: HEADING_FONT_SIZE.to_string(),
                font_weight: FONT_WEIGHT_BOLD.to_string(),
                background_color: None,
            },
            link: None,
            image_source: None,
        },
    );
    table.insert(
        ComponentType::Paragraph,
        ComponentDefaults {
            content: DEFAULT_PARAGRAPH_CONTENT,
            styles: Styles {
                color: DEFAULT_TEXT_COLOR.to_string(),
                font_size: DEFAULT_FONT_SIZE.to_string(),
                font_weight: FONT_WEIGHT_NORMAL.to_string(),
                background_color: None,
            },
            link: None,
            image_source: None,
        },
    );
    table.insert(
        ComponentType::Button,
        ComponentDefaults {
            content: DEFAULT_BUTTON_CONTENT,
            styles: Styles {
                color: DEFAULT_BUTTON_TEXT_COLOR.to_string(),
                font_size: DEFAULT_FONT_SIZE.to_string(),
                font_weight: FONT_WEIGHT_NORMAL.to_string(),
                background_color: Some(DEFAULT_BUTTON_BACKGROUND.to_string()),
            },
            link: Some(DEFAULT_BUTTON_LINK),
            image_source: None,
        },
    );
    table.insert(
        ComponentType::Image,
        ComponentDefaults {
            content: DEFAULT_IMAGE_URL,
            styles: Styles {
                color: DEFAULT_TEXT_COLOR.to_string(),
                font_size: DEFAULT_FONT_SIZE.to_string(),
                font_weight: FONT_WEIGHT_NORMAL.to_string(),
                background_color: None,
            },
            link: None,
            image_source: Some(ImageSource::Link),
        },
    );
    table
});

/// Look up the palette defaults for a component type.
pub fn defaults(component_type: ComponentType) -> &'static ComponentDefaults {
    // The table covers the closed tag set exhaustively.
    &REGISTRY[&component_type]
}
