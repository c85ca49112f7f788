pub mod conversation;

pub use conversation::{ConversationRecord, NewConversation};
