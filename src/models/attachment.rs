//! Attachment references
//!
//! Drafts never carry attachment bytes. They hold either the path of a file
//! picked during this session or the key under which the bytes already live
//! in the blob store.
//!
//! On input a bare string is read as a stored key, so drafts saved as
//! `{"companyLogo": "companyLogo"}` load as a stored reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Reference to an attached file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "AttachmentWire")]
pub enum AttachmentRef {
    /// A file chosen in this session; read only when it is persisted
    File(PathBuf),
    /// Bytes stored in the blob store under this key
    Stored(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
enum TaggedAttachment {
    File(PathBuf),
    Stored(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AttachmentWire {
    Key(String),
    Tagged(TaggedAttachment),
}

impl From<AttachmentWire> for AttachmentRef {
    fn from(wire: AttachmentWire) -> Self {
        match wire {
            AttachmentWire::Key(key) => Self::Stored(key),
            AttachmentWire::Tagged(TaggedAttachment::File(path)) => Self::File(path),
            AttachmentWire::Tagged(TaggedAttachment::Stored(key)) => Self::Stored(key),
        }
    }
}

impl AttachmentRef {
    /// Build a file reference from user input; blank input means no attachment
    pub fn from_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::File(PathBuf::from(trimmed)))
        }
    }

    /// Path of a freshly picked file
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stored(_) => None,
        }
    }

    /// Whether the bytes already live in the blob store
    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored(_))
    }
}

impl fmt::Display for AttachmentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stored(key) => write!(f, "saved ({})", key),
        }
    }
}
