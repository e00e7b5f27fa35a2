pub mod conversation;
pub mod error;
pub mod event;
pub mod format;
pub mod message;
pub mod segment;
pub mod session;

pub use conversation::Conversation;
pub use error::{CoreError, Result};
pub use event::SessionEvent;
pub use format::format_code;
pub use message::{Message, Role};
pub use segment::{extract, Segment, SegmentKind, FENCE};
pub use session::{Session, SessionId};
