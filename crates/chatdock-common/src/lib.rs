pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ChatdockError, ConfigError};
pub use events::{EventBus, StateEvent};
pub use id::{new_correlation_id, RequestId};
pub use types::{Point, Rect, Size, Viewport};

pub type Result<T> = std::result::Result<T, ChatdockError>;
