//! Property merge engine - partial updates applied to a single component.
//!
//! A [`ComponentPatch`] carries only the fields an edit wants to change;
//! everything absent stays untouched. Style keys merge individually, so
//! updating `font_size` never clobbers `color`. Fields that do not apply to
//! the target's type (a link on a heading, an image source on a button) are
//! ignored rather than rejected.

use crate::types::{CanvasComponent, ComponentKind, ImageSource, Styles, UploadFile};

/// Partial style update. Each key is merged independently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StylePatch {
    pub color: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub background_color: Option<String>,
}

impl StylePatch {
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.font_size.is_none()
            && self.font_weight.is_none()
            && self.background_color.is_none()
    }

    fn apply(&self, styles: &mut Styles) {
        if let Some(color) = &self.color {
            styles.color = color.clone();
        }
        if let Some(font_size) = &self.font_size {
            styles.font_size = font_size.clone();
        }
        if let Some(font_weight) = &self.font_weight {
            styles.font_weight = font_weight.clone();
        }
        if let Some(background_color) = &self.background_color {
            styles.background_color = Some(background_color.clone());
        }
    }
}

/// Partial component update.
///
/// `file` uses a double `Option`: `None` leaves the upload handle alone,
/// `Some(None)` clears it, `Some(Some(_))` replaces it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComponentPatch {
    pub content: Option<String>,
    pub styles: StylePatch,
    pub link: Option<String>,
    pub image_source: Option<ImageSource>,
    pub file: Option<Option<UploadFile>>,
}

impl ComponentPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.styles.color = Some(color.into());
        self
    }

    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.styles.font_size = Some(font_size.into());
        self
    }

    pub fn with_font_weight(mut self, font_weight: impl Into<String>) -> Self {
        self.styles.font_weight = Some(font_weight.into());
        self
    }

    pub fn with_background_color(mut self, background_color: impl Into<String>) -> Self {
        self.styles.background_color = Some(background_color.into());
        self
    }

    pub fn with_styles(mut self, styles: StylePatch) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_image_source(mut self, source: ImageSource) -> Self {
        self.image_source = Some(source);
        self
    }

    pub fn with_file(mut self, file: UploadFile) -> Self {
        self.file = Some(Some(file));
        self
    }

    pub fn clearing_file(mut self) -> Self {
        self.file = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.styles.is_empty()
            && self.link.is_none()
            && self.image_source.is_none()
            && self.file.is_none()
    }

    /// Merge this patch into `component`, returning the updated copy.
    ///
    /// The original is left untouched; fields absent from the patch carry
    /// over verbatim.
    pub fn apply_to(&self, component: &CanvasComponent) -> CanvasComponent {
        let mut next = component.clone();
        if let Some(content) = &self.content {
            next.content = content.clone();
        }
        self.styles.apply(&mut next.styles);
        match &mut next.kind {
            ComponentKind::Button { link } => {
                if let Some(new_link) = &self.link {
                    *link = new_link.clone();
                }
            }
            ComponentKind::Image { source, file } => {
                if let Some(new_source) = self.image_source {
                    *source = new_source;
                }
                if let Some(new_file) = &self.file {
                    *file = new_file.clone();
                }
            }
            ComponentKind::Heading | ComponentKind::Paragraph => {}
        }
        next
    }
}
