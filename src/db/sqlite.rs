use crate::db::models::{NewShareholder, Question, ShareholderLogin};
use crate::db::schema::SQLITE_INIT;
use crate::error::QnaError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct QnaStorage {
    pool: SqlitePool,
}

impl QnaStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating the file if needed) a pool for `database_url` and ensure the schema.
    pub async fn connect(database_url: &str) -> Result<Self, QnaError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        // An in-memory database lives and dies with its connection, so pin it to one.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        info!(database_url = %database_url, "storage ready");
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), QnaError> {
        // sqlx::query runs a single statement, so split the script.
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Append roster rows in one transaction. Returns the number of rows inserted.
    ///
    /// A duplicate `shareholder_number` (against the table or within the batch)
    /// aborts the whole import; nothing is committed.
    pub async fn import_shareholders(&self, rows: &[NewShareholder]) -> Result<u64, QnaError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for row in rows {
            sqlx::query(
                r#"INSERT INTO shareholders (shareholder_number, name, postal_code, shares)
                   VALUES (?, ?, ?, ?)"#,
            )
            .bind(&row.shareholder_number)
            .bind(&row.name)
            .bind(&row.postal_code)
            .bind(row.shares)
            .execute(&mut *tx)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    QnaError::DuplicateShareholder(row.shareholder_number.clone())
                }
                other => QnaError::DatabaseError(other),
            })?;
            inserted += 1;
        }

        tx.commit().await?;
        Ok(inserted)
    }

    pub async fn count_shareholders(&self) -> Result<i64, QnaError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shareholders")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    /// Exact match on both number and postal code.
    pub async fn find_shareholder_login(
        &self,
        shareholder_number: &str,
        postal_code: &str,
    ) -> Result<Option<ShareholderLogin>, QnaError> {
        let found = sqlx::query_as::<_, ShareholderLogin>(
            r#"SELECT COALESCE(name, '') AS name, COALESCE(shares, 0) AS shares
               FROM shareholders
               WHERE shareholder_number = ? AND postal_code = ?
               LIMIT 1"#,
        )
        .bind(shareholder_number)
        .bind(postal_code)
        .fetch_optional(&self.pool)
        .await?;
        debug!(matched = found.is_some(), "roster lookup");
        Ok(found)
    }

    /// Insert unconditionally. Returns the new row id.
    pub async fn save_question(
        &self,
        shareholder_number: &str,
        question: &str,
    ) -> Result<i64, QnaError> {
        let res = sqlx::query("INSERT INTO questions (shareholder_number, question) VALUES (?, ?)")
            .bind(shareholder_number)
            .bind(question)
            .execute(&self.pool)
            .await?;
        Ok(res.last_insert_rowid())
    }

    /// Every question, in insertion order.
    pub async fn list_questions(&self) -> Result<Vec<Question>, QnaError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"SELECT id,
                      COALESCE(shareholder_number, '') AS shareholder_number,
                      COALESCE(question, '') AS question
               FROM questions ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
