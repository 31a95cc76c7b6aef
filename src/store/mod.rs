use async_trait::async_trait;
use sqlx::SqlitePool;
use std::fmt;

use crate::models::Message;

/// Failure surfaced by the storage gateway. Wraps the driver error
/// unchanged; nothing is retried or recovered at this layer.
#[derive(Debug)]
pub struct StoreError(pub sqlx::Error);

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage error: {}", self.0)
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError(err)
    }
}

/// Gateway through which the HTTP surface persists and queries messages.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persists a message, assigning an id if absent, and returns the
    /// persisted record.
    async fn save(&self, message: Message) -> Result<Message, StoreError>;

    /// Returns all messages whose topic equals the argument, in
    /// storage-native order.
    async fn find_by_topic(&self, topic: &str) -> Result<Vec<Message>, StoreError>;
}

pub struct SqliteMessageStore {
    pool: SqlitePool,
}

impl SqliteMessageStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for SqliteMessageStore {
    async fn save(&self, mut message: Message) -> Result<Message, StoreError> {
        if message.id.is_empty() {
            message.id = uuid::Uuid::new_v4().to_string();
        }

        sqlx::query(
            r#"INSERT INTO messages (id, topic, sender, content, created_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(&message.id)
        .bind(&message.topic)
        .bind(&message.sender)
        .bind(&message.content)
        .bind(&message.created_at)
        .execute(&self.pool)
        .await?;

        Ok(message)
    }

    async fn find_by_topic(&self, topic: &str) -> Result<Vec<Message>, StoreError> {
        // No ORDER BY: callers get whatever order the storage returns.
        let items = sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE topic = ?")
            .bind(topic)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }
}
