/// Comics records are keyed by a random (v4) UUID.
pub type ComicId = uuid::Uuid;

/// Largest unsigned value that fits a PostgreSQL `BIGINT` column.
pub const MAX_STORED_UNSIGNED: u64 = i64::MAX as u64;
