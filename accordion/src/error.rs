use thiserror::Error;

/// Markup problems found while scanning. Each one costs only the affected item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("trigger {trigger} is not inside an accordion item")]
    OrphanTrigger { trigger: String },

    #[error("item {item} has no content panel")]
    MissingPanel { item: String },

    #[error("trigger {trigger} belongs to item {item}, which already has a trigger")]
    DuplicateTrigger { trigger: String, item: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("process has no steps")]
    NoSteps,
}
