//! Общие типы и трейты агрегатов

pub mod aggregate_id;
pub mod aggregate_root;
pub mod base_aggregate;
pub mod entity_metadata;
pub mod memory_store;
pub mod record_status;

// Реэкспорт
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use base_aggregate::BaseAggregate;
pub use entity_metadata::EntityMetadata;
pub use memory_store::{MemoryStore, StoreError};
pub use record_status::RecordStatus;
