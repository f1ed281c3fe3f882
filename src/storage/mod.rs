//! Storage layer for the onboarding wizard
//!
//! Attachment bytes live in a blob store outside the wizard state; drafts
//! only hold references. Writes are atomic and may run on background
//! threads so navigation never waits on disk.

pub mod blob;
pub mod file_io;
pub mod resilient;
pub mod writer;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore, COMPANY_LOGO_KEY, LOGO_STORE};
pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use resilient::ResilientBlobStore;
pub use writer::{BlobWriter, PendingWrite};
