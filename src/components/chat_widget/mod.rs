//! Floating chat widget backed by a webhook-driven assistant.
//!
//! - Conversation state and the send lifecycle in [`ChatSession`]
//! - Ordered, tolerant reply parsing in [`reply`]
//! - Safe `**bold**` / line-break formatting in [`format`]
//! - Delivery over `fetch` with a bounded timeout in [`FetchTransport`]

mod component;
mod config;
pub mod format;
pub mod reply;
mod session;
mod transport;
mod types;

pub use component::ChatWidget;
pub use config::{ChatConfig, DEFAULT_ENDPOINT};
pub use session::{ChatSession, KeyAction, submit_key_action};
pub use transport::{ChatError, ChatTransport, FetchTransport};
pub use types::{ChatMessage, ChatRequest, Role};
