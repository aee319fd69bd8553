//! Ali, Wake Up — snapshot persistence adapters.
//!
//! Implementations of `SnapshotRepository`: a `PostgreSQL` table holding
//! one JSONB document per save key, and an in-process map for hosts that
//! run without a database.

pub mod memory;
pub mod pg_snapshot_repository;
pub mod schema;

pub use memory::InMemorySnapshotRepository;
pub use pg_snapshot_repository::PgSnapshotRepository;
