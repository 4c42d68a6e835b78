//! Conversation store adapters

mod memory;

pub use memory::InMemoryConversationStore;
