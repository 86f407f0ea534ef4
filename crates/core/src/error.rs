use thiserror::Error;

/// Top-level error type shared by every crate in the workspace.
///
/// All variants are fatal for the call that produced them; nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum MenuError {
    /// A theme field has the wrong type, shape or value.
    #[error("config error: {0}")]
    Config(String),

    /// A configuration key that is not part of the theme schema.
    #[error("parameter Theme.{0} does not exist")]
    UnknownParameter(String),

    /// A bounded value (opacity, border width, ...) is out of range.
    #[error("value out of range: {0}")]
    Range(String),

    /// A title bar style code or name that matches none of the styles.
    #[error("invalid menubar style {0}")]
    InvalidStyle(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = MenuError> = std::result::Result<T, E>;
