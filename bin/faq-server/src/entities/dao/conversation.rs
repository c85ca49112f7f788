use chrono::{DateTime, Utc};

/// A row in the `conversations` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationRecord {
    pub id: i64,
    pub user_message: String,
    pub ai_response: String,
    /// Assigned by the server at insert time.
    pub timestamp: DateTime<Utc>,
    /// Caller address; `None` when it could not be determined.
    pub user_ip: Option<String>,
}

/// An exchange about to be persisted.
#[derive(Debug, Clone)]
pub struct NewConversation {
    pub user_message: String,
    pub ai_response: String,
    pub user_ip: Option<String>,
}
