//! partpage-core: Data model and state store (sans-IO).
//!
//! Describes a downloadable file split into parts, computes the total
//! size shown to end users, and keeps the form state in sync with a
//! pluggable key-value [`Storage`] backend.
//!
//! This crate has **no browser dependencies** -- persistence goes
//! through the [`Storage`] trait. The localStorage implementation
//! lives in `partpage-io`.

pub mod size;
pub mod store;
pub mod types;

pub use size::{calculate_total_size, format_total_size, total_megabytes};
pub use store::{MemoryStorage, Restore, STATE_KEY, StateStore, Storage, StorageError, StoreError};
pub use types::{FileType, GeneratorState, ParseLabelError, Part, PartId, PartUpdate, SizeUnit};
