//! Render settings

use serde::{Deserialize, Serialize};

/// Conventional background character
pub const DEFAULT_FILL: char = '.';
/// Conventional foreground character
pub const DEFAULT_MARK: char = '#';

/// Settings for one render pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Background cell character
    pub fill: char,
    /// Character painted over cells a shape passes through
    pub mark: char,
    /// Upper bound on appends per traced shape; a cycle that has not
    /// closed by then is reported as an error instead of spinning
    pub trace_limit: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL,
            mark: DEFAULT_MARK,
            trace_limit: 1 << 16,
        }
    }
}
