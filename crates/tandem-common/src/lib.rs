pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, PlatformError, SessionError, TandemError};
pub use id::{next_session_id, SessionId};
pub use types::{Rect, Size};

pub type Result<T> = std::result::Result<T, TandemError>;
