pub mod color;
pub mod errors;
pub mod id;

pub use color::Color;
pub use errors::{ConfigError, PetalError};
pub use id::{new_id, SessionId};

pub type Result<T> = std::result::Result<T, PetalError>;
