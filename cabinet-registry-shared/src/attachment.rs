use std::io::{Read, Write};

use chrono::{DateTime, Utc};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::draft::SelectedFile;
use crate::error::RegistryError;

/// The photo stored against a member record
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct Attachment {
    /// Unique identifier for this attachment
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Original filename of the attachment
    pub filename: String,

    /// MIME type of the file (e.g., "image/png", "image/jpeg")
    pub content_type: String,

    /// Size of the file in bytes (uncompressed)
    pub size: i64,

    /// File data, stored as gzip-compressed bytes
    pub data: Vec<u8>,

    /// When this attachment was created
    pub created: DateTime<Utc>,
}

impl Attachment {
    /// Create a new attachment, compressing the given data
    pub fn new(filename: String, content_type: String, data: &[u8]) -> Result<Self, RegistryError> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).map_err(|e| {
            RegistryError::IOError(format!("Failed to compress attachment data: {}", e))
        })?;
        let compressed = encoder.finish().map_err(|e| {
            RegistryError::IOError(format!("Failed to finish compression: {}", e))
        })?;

        Ok(Self {
            id: Uuid::new_v4(),
            filename,
            content_type,
            size: data.len() as i64,
            data: compressed,
            created: Utc::now(),
        })
    }

    pub fn from_selected(file: &SelectedFile) -> Result<Self, RegistryError> {
        Self::new(file.name.clone(), file.content_type.clone(), &file.data)
    }

    /// The original, decompressed file bytes
    pub fn contents(&self) -> Result<Vec<u8>, RegistryError> {
        let mut decoder = GzDecoder::new(&self.data[..]);
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed).map_err(|e| {
            RegistryError::IOError(format!("Failed to decompress attachment data: {}", e))
        })?;
        Ok(decompressed)
    }
}
