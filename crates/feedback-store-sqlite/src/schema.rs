//! SQL schema for the letter store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! layout revision so later migrations can be gated on it.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per letter. A write with an existing (namespace, id) replaces
-- the whole row.
CREATE TABLE IF NOT EXISTS letters (
    namespace     TEXT    NOT NULL,  -- storage project identifier
    id            TEXT    NOT NULL,  -- client-generated letter id
    email         TEXT    NOT NULL,
    name          TEXT    NOT NULL,
    num_children  INTEGER NOT NULL,
    schools       TEXT    NOT NULL DEFAULT '[]',  -- JSON array of School
    concerns      TEXT    NOT NULL DEFAULT '[]',  -- JSON array of Concern
    freeform      TEXT    NOT NULL DEFAULT '',
    created_at    TEXT    NOT NULL,               -- RFC 3339 UTC
    send_count    INTEGER NOT NULL DEFAULT 0,
    sent_receipts TEXT    NOT NULL DEFAULT '[]',  -- JSON array of RFC 3339
    PRIMARY KEY (namespace, id)
);

PRAGMA user_version = 1;
";
