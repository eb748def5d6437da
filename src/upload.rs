//! Upload boundary - encoding uploaded image bytes for use as content.
//!
//! The external file-read capability delivers raw bytes asynchronously; the
//! editor turns them into a `data:` URL that drops straight into an image
//! component's `content` through the regular merge path.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encode raw file bytes as a `data:` URL.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
