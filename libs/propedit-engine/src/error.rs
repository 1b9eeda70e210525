use propedit_api::error::EditorError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Caller contract violation (e.g. no target type).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("type not found: {0}")]
    TypeNotFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("editor error: {0}")]
    Editor(#[from] EditorError),
}

impl EngineError {
    /// Add context to the error.
    ///
    /// For `Editor` variant, context is added to the inner `EditorError`.
    /// For string variants, context is prepended to the message.
    pub fn with_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            EngineError::Editor(e) => EngineError::Editor(e.with_context(ctx)),
            EngineError::Config(msg) => EngineError::Config(format!("{ctx}: {msg}")),
            EngineError::TypeNotFound(msg) => EngineError::TypeNotFound(format!("{ctx}: {msg}")),
            EngineError::InvalidArgument(msg) => {
                EngineError::InvalidArgument(format!("{ctx}: {msg}"))
            }
        }
    }
}
