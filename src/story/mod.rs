//! Story domain types
//!
//! The settings catalogue (which options each enumerated setting offers), the
//! snapshot read out of the panel, and the errors raised while validating it.

mod catalogue;
mod error;
mod values;

pub use catalogue::SettingKey;
pub use error::StoryError;
pub use values::{StoryRequest, StoryWindowValues};
