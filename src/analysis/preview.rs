//! Describes the preview image attached to a verdict entry.
//!
//! A terminal cannot show the picture, so the panel prints what it is:
//! format, dimensions and size for inline data URIs, or the scraped URL.

use std::io::Cursor;

use base64::Engine;
use image::ImageReader;

use super::types::VerdictEntry;

#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Inline `data:` URI that decoded into a readable image.
    Inline {
        format: String,
        width: u32,
        height: u32,
        bytes: usize,
    },
    /// Inline payload that could not be decoded.
    Unreadable { reason: String },
    /// Remote image the service scraped.
    Remote(String),
}

impl Preview {
    /// Inline image wins over the scraped URL when both are present.
    pub fn for_entry(entry: &VerdictEntry) -> Option<Self> {
        if let Some(data_uri) = entry.base64_image.as_deref() {
            return Some(describe_data_uri(data_uri));
        }
        entry.scraped_image_url.clone().map(Preview::Remote)
    }

    pub fn label(&self) -> String {
        match self {
            Preview::Inline {
                format,
                width,
                height,
                bytes,
            } => format!("{} {}x{} ({})", format, width, height, human_size(*bytes)),
            Preview::Unreadable { reason } => format!("inline image unreadable: {}", reason),
            Preview::Remote(url) => url.clone(),
        }
    }
}

fn describe_data_uri(data_uri: &str) -> Preview {
    let encoded = match data_uri.split_once(',') {
        Some((header, payload)) if header.starts_with("data:") => payload,
        _ => data_uri,
    };

    let bytes = match base64::engine::general_purpose::STANDARD.decode(encoded.trim()) {
        Ok(bytes) => bytes,
        Err(err) => {
            return Preview::Unreadable {
                reason: err.to_string(),
            }
        }
    };

    let reader = match ImageReader::new(Cursor::new(&bytes)).with_guessed_format() {
        Ok(reader) => reader,
        Err(err) => {
            return Preview::Unreadable {
                reason: err.to_string(),
            }
        }
    };
    let format = reader
        .format()
        .map(|f| format!("{:?}", f).to_uppercase())
        .unwrap_or_else(|| "IMAGE".to_string());

    match reader.into_dimensions() {
        Ok((width, height)) => Preview::Inline {
            format,
            width,
            height,
            bytes: bytes.len(),
        },
        Err(err) => Preview::Unreadable {
            reason: err.to_string(),
        },
    }
}

fn human_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
