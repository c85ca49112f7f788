use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entities::ConversationRecord;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The user's question.
    #[schema(example = "Quanto costa Alomana?")]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    /// Model reply.
    pub response: String,
    /// `"faq"` when the question matched a fixed FAQ entry, `"website"` otherwise.
    #[schema(example = "faq")]
    pub source: String,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// Maximum number of conversations to return.
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversationResponse {
    pub id: i64,
    pub user_message: String,
    pub ai_response: String,
    /// RFC 3339, UTC.
    pub timestamp: String,
    pub user_ip: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    pub conversations: Vec<ConversationResponse>,
}

impl ConversationRecord {
    pub fn to_response(&self) -> ConversationResponse {
        ConversationResponse {
            id: self.id,
            user_message: self.user_message.clone(),
            ai_response: self.ai_response.clone(),
            timestamp: self.timestamp.to_rfc3339(),
            user_ip: self.user_ip.clone(),
        }
    }
}
