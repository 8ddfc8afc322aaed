// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerPreferences {
    /// Whether to collect detailed token metrics
    pub collect_detailed_metrics: bool,

    /// Whether to track operator usage patterns
    pub track_operator_patterns: bool,

    /// Whether to log warnings for unusually long identifiers and string
    /// literals
    pub warn_on_long_lexemes: bool,

    /// Whether to show position information in logged error messages
    pub include_position_in_errors: bool,
}

impl Default for TokenizerPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env::var("EVL_TOKENIZER_DETAILED_METRICS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            track_operator_patterns: env::var("EVL_TOKENIZER_TRACK_OPERATORS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            warn_on_long_lexemes: env::var("EVL_TOKENIZER_WARN_LONG_LEXEMES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_position_in_errors: env::var("EVL_TOKENIZER_INCLUDE_POSITIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}
