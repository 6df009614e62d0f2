use crate::domain::model::{Combination, GenerateResponse};
use crate::domain::ports::CombinationStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

/// MySQL-backed persistence sink.
///
/// Connections come from a managed pool with scoped acquisition; every exit
/// path returns the connection to the pool, and an uncommitted transaction
/// rolls back when dropped.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        tracing::debug!("Connected to MySQL");
        Ok(Self { pool })
    }
}

#[async_trait]
impl CombinationStore for MySqlStore {
    async fn persist(&self, combinations: &[Combination]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        // One item row per occurrence across the whole result set.
        // Duplicates are kept; downstream consumers rely on multiplicity.
        for item in combinations.iter().flatten() {
            sqlx::query("INSERT INTO items (name) VALUES (?)")
                .bind(item)
                .execute(&mut *tx)
                .await?;
        }

        let serialized = serde_json::to_string(combinations)?;
        let result = sqlx::query("INSERT INTO combinations (combination) VALUES (?)")
            .bind(&serialized)
            .execute(&mut *tx)
            .await?;
        let id = result.last_insert_id();

        let envelope = serde_json::to_string(&GenerateResponse {
            id,
            combination: combinations.to_vec(),
        })?;
        sqlx::query("INSERT INTO responses (response) VALUES (?)")
            .bind(&envelope)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(id)
    }
}
