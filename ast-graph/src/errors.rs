use thiserror::Error;

/// Failure raised when a structural heuristic cannot find the delimiter or
/// keyword it needs. Aborts processing of the current file only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("{construct}: no `{delimiter}` found in `{fragment}`")]
    MissingDelimiter {
        construct: &'static str,
        delimiter: char,
        fragment: String,
    },

    #[error("keyword `{keyword}` not found in `{fragment}`")]
    MissingKeyword {
        keyword: &'static str,
        fragment: String,
    },

    #[error("modifiers `{fragment}` are not followed by a class")]
    OrphanModifiers { fragment: String },

    #[error("conditionals nested deeper than {limit} levels at `{fragment}`")]
    NestingTooDeep { limit: usize, fragment: String },
}

#[derive(Debug, Error)]
pub enum AstGraphError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serde json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("yaml config error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("structural error: {0}")]
    Structural(#[from] StructuralError),

    #[error("invalid config: {0}")]
    Config(String),
}

impl AstGraphError {
    /// Short failure kind used in diagnostics and `summary.json`.
    pub fn kind(&self) -> &'static str {
        match self {
            AstGraphError::Io(_) => "io",
            AstGraphError::SerdeJson(_) => "json",
            AstGraphError::Yaml(_) => "yaml",
            AstGraphError::Structural(_) => "structural",
            AstGraphError::Config(_) => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, AstGraphError>;

/// Clip long source text for error messages.
pub(crate) fn excerpt(s: &str) -> String {
    const MAX_CHARS: usize = 80;
    let trimmed = s.trim();
    if trimmed.chars().count() <= MAX_CHARS {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(MAX_CHARS).collect();
    format!("{head}...")
}
