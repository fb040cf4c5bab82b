use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store Backend Error: {0}")]
    Backend(#[from] duckdb::Error),
    #[error("Malformed Document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Generic collection-of-documents interface. Documents are untyped field
/// maps; no schema validation happens here, that is the repository's job.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_one(&self, collection: &str, document: Value) -> Result<(), StoreError>;

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Value>, StoreError>;

    async fn delete_many(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError>;
}

/// Predicate applied to documents: every `eq` pair must match exactly, and,
/// when present, at least one of the `contains` fields must contain the term
/// case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    eq: Vec<(String, Value)>,
    contains: Option<(Vec<String>, String)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.eq.push((field.to_string(), value.into()));
        self
    }

    pub fn contains_any(mut self, fields: &[&str], term: &str) -> Self {
        self.contains = Some((
            fields.iter().map(|f| f.to_string()).collect(),
            term.to_lowercase(),
        ));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.eq.is_empty() && self.contains.is_none()
    }

    pub fn matches(&self, doc: &Value) -> bool {
        for (field, expected) in &self.eq {
            if doc.get(field) != Some(expected) {
                return false;
            }
        }

        if let Some((fields, term)) = &self.contains {
            let hit = fields.iter().any(|field| {
                doc.get(field)
                    .and_then(Value::as_str)
                    .map(|s| s.to_lowercase().contains(term.as_str()))
                    .unwrap_or(false)
            });
            if !hit {
                return false;
            }
        }

        true
    }
}
