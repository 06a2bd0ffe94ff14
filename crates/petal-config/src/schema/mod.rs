//! Configuration schema types for Petal.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod display;
mod model;
mod system;

pub use display::*;
pub use model::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Petal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PetalConfig {
    pub model: ModelConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}
