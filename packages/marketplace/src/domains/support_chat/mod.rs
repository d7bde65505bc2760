pub mod models;
pub mod session;

pub use models::{ChatError, ChatMessage, Sender};
pub use session::{ChatConfig, SupportChat};
