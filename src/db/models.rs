use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One roster row as it arrives from an import, before it has a row id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewShareholder {
    pub shareholder_number: String,
    pub name: String,
    pub postal_code: String,
    pub shares: i64,
}

/// Result of a successful roster lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct ShareholderLogin {
    pub name: String,
    pub shares: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i64,
    pub shareholder_number: String,
    pub question: String,
}
