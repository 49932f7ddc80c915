//! SQL DDL for the roster and question tables.
//! Additive only: every statement is `IF NOT EXISTS`, so re-running is a no-op.

/// SQLite schema with:
/// - `shareholders`: roster imported from CSV, `shareholder_number` UNIQUE
/// - `questions`: submissions; `shareholder_number` is a plain text reference
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS shareholders (
    id INTEGER PRIMARY KEY,
    shareholder_number TEXT UNIQUE,
    name TEXT,
    postal_code TEXT,
    shares INTEGER
);

CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY,
    shareholder_number TEXT,
    question TEXT
);
"#;
