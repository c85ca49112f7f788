use std::future::Future;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use crate::entities::{ConversationRecord, NewConversation, SqliteStore};

pub trait ConversationStore: Send + Sync + 'static {
    /// Append one exchange, stamping it with the current time.
    fn save_conversation(
        &self,
        conversation: NewConversation,
    ) -> impl Future<Output = Result<ConversationRecord, sqlx::Error>> + Send;

    /// At most `limit` records, newest first.
    fn recent_conversations(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<ConversationRecord>, sqlx::Error>> + Send;
}

impl ConversationStore for SqliteStore {
    async fn save_conversation(
        &self,
        conversation: NewConversation,
    ) -> Result<ConversationRecord, sqlx::Error> {
        // Fixed-width UTC text so that lexical order is chronological order.
        let timestamp = Utc::now().trunc_subsecs(6);
        let stamp = timestamp.to_rfc3339_opts(SecondsFormat::Micros, true);

        let result = sqlx::query(
            "INSERT INTO conversations (user_message, ai_response, timestamp, user_ip) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&conversation.user_message)
        .bind(&conversation.ai_response)
        .bind(&stamp)
        .bind(&conversation.user_ip)
        .execute(&self.pool)
        .await?;

        Ok(ConversationRecord {
            id: result.last_insert_rowid(),
            user_message: conversation.user_message,
            ai_response: conversation.ai_response,
            timestamp,
            user_ip: conversation.user_ip,
        })
    }

    async fn recent_conversations(&self, limit: u32) -> Result<Vec<ConversationRecord>, sqlx::Error> {
        let rows: Vec<(i64, String, String, String, Option<String>)> = sqlx::query_as(
            "SELECT id, user_message, ai_response, timestamp, user_ip \
             FROM conversations ORDER BY timestamp DESC, id DESC LIMIT ?1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, user_message, ai_response, timestamp, user_ip)| {
                let timestamp = timestamp
                    .parse::<DateTime<Utc>>()
                    .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
                Ok(ConversationRecord {
                    id,
                    user_message,
                    ai_response,
                    timestamp,
                    user_ip,
                })
            })
            .collect()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
