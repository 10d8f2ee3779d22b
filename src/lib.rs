//! # tgmenu
//!
//! A server-side engine for stateful, menu-driven conversations over
//! Telegram's callback-button mechanism. A conversation is a graph of named
//! processors; each button press decodes to a transition, which the engine
//! resolves against the session stored for that message, re-invokes the
//! target processor, and renders as the next menu.
//!
//! Transport and persistence stay outside: implement [`sender::Sender`] and
//! [`storage::Storage`] and hand them to a [`manager::CallbackManager`].

pub mod callback;
pub mod container;
pub mod error;
pub mod inline;
pub mod manager;
pub mod node;
pub mod sender;
pub mod session;
pub mod storage;
pub mod types;

pub use callback::CallbackData;
pub use container::{Button, TelegramContainer};
pub use error::Error;
pub use manager::{CallbackManager, Config, InlineQuery};
pub use node::{NextNode, NodeKind};
pub use sender::Sender;
pub use session::SessionState;
pub use storage::{MemoryStorage, Storage};
pub use types::{AppearType, ProcessorType};
