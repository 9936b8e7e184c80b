pub mod health;
pub mod player;
pub mod report;
pub mod sse;
pub mod validation;
pub mod ws;

/// Sentinel category stored when a client omits one.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

pub(crate) fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}
