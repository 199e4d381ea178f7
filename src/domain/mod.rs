//! Domain logic - pure release bookkeeping rules, no filesystem access

pub mod header;
pub mod version;
pub mod version_file;

pub use header::{compute_new_header, ChangelogHeaderLine, ChangelogUpdate};
pub use version::{validate, Version};
