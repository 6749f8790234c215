//! Selected-file state — what the form holds for each of its two upload slots.

use std::path::Path;

use anyhow::{Context, Result};
use bytes::Bytes;

/// One of the two independent upload positions on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Resume,
    JobDescription,
}

/// A file the user has picked for a slot. Selection captures metadata and raw
/// bytes; no validation happens until submit.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    name: String,
    content_type: String,
    bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk, inferring its MIME type from the extension the
    /// same way the upload picker's accept list does. Unknown extensions still
    /// select fine; they are rejected later, at submit time.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let content_type = mime_for_extension(path)
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Could not read '{}'", path.display()))?;

        Ok(Self {
            name,
            content_type,
            bytes: Bytes::from(bytes),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Raw bytes, cheaply cloneable for the multipart body.
    pub fn bytes(&self) -> Bytes {
        self.bytes.clone()
    }
}

/// Extension-to-MIME mapping for the four accepted upload types.
fn mime_for_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some("application/pdf"),
        "doc" => Some("application/msword"),
        "docx" => {
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        }
        "txt" => Some("text/plain"),
        _ => None,
    }
}
