//! Snapshot store database schema.

/// SQL to create the snapshots table.
pub const CREATE_SNAPSHOTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS player_snapshots (
    save_key  TEXT PRIMARY KEY,
    snapshot  JSONB NOT NULL,
    saved_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";
