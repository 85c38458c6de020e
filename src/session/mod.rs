pub mod controller;
pub mod error;
pub mod item;
pub mod pool;
pub mod result;

pub use controller::{CompletionSink, Feedback, Mode, Phase, SessionController};
pub use error::SessionError;
pub use item::{Item, ItemSet};
pub use pool::ItemPool;
