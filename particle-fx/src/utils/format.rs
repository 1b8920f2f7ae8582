//! Formatting utilities

/// Format a sampled value with fixed precision
pub fn format_value(value: f32) -> String {
    format!("{value:.4}")
}
