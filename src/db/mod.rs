//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: pooled storage handle with the roster and question operations

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{NewShareholder, Question, ShareholderLogin};
pub use schema::SQLITE_INIT;
pub use sqlite::{QnaStorage, SqlitePool};
