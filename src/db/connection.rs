use async_trait::async_trait;
use duckdb::{params, Connection};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::db::store::{DocumentStore, Filter, StoreError};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    collection VARCHAR NOT NULL,
    doc VARCHAR NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection);
"#;

/// DuckDB-backed document store. Each document is one row of JSON text;
/// filters are applied in-process since the store is schemaless on purpose.
pub struct DocStore {
    conn: Arc<Mutex<Connection>>,
}

impl DocStore {
    pub fn open(config: &DatabaseConfig) -> Result<Self, StoreError> {
        info!("Connecting to DuckDB at {}", config.path);
        let conn = Connection::open(&config.path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn rows(&self, conn: &Connection, collection: &str) -> Result<Vec<(i64, Value)>, StoreError> {
        let mut stmt = conn.prepare("SELECT rowid, doc FROM documents WHERE collection = ?")?;
        let mapped = stmt.query_map(params![collection], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut docs = Vec::new();
        for row in mapped {
            let (rowid, text) = row?;
            docs.push((rowid, serde_json::from_str(&text)?));
        }
        Ok(docs)
    }
}

#[async_trait]
impl DocumentStore for DocStore {
    async fn insert_one(&self, collection: &str, document: Value) -> Result<(), StoreError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO documents (collection, doc) VALUES (?, ?)",
            params![collection, document.to_string()],
        )?;
        Ok(())
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Value>, StoreError> {
        let conn = self.conn.lock().unwrap();
        let docs = self.rows(&conn, collection)?;
        Ok(docs
            .into_iter()
            .map(|(_, doc)| doc)
            .filter(|doc| filter.matches(doc))
            .take(limit)
            .collect())
    }

    async fn delete_many(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        let conn = self.conn.lock().unwrap();

        if filter.is_empty() {
            let removed = conn.execute(
                "DELETE FROM documents WHERE collection = ?",
                params![collection],
            )?;
            return Ok(removed as u64);
        }

        let matching: Vec<i64> = self
            .rows(&conn, collection)?
            .into_iter()
            .filter(|(_, doc)| filter.matches(doc))
            .map(|(rowid, _)| rowid)
            .collect();

        let mut removed = 0u64;
        for rowid in matching {
            removed +=
                conn.execute("DELETE FROM documents WHERE rowid = ?", params![rowid])? as u64;
        }
        Ok(removed)
    }
}
