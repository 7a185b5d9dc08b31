//! Band notation mapping.
//!
//! A [`NotationMapper`] holds an optional user-supplied table translating the
//! raw CA notation found in filenames into project-specific N-plexer bank
//! labels. The host owns one mapper and lends it to each conversion.

pub mod editor;
pub mod error;
pub mod file;
pub mod mapper;

pub use editor::{EntryIssue, MappingEntry, entries_to_mappings, validate_entries};
pub use error::{MapperError, Result};
pub use file::{MappingFile, MappingMetadata, MappingTable, SCHEMA_VERSION};
pub use mapper::{LoadReport, NotationMapper};
