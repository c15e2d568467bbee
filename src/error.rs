use thiserror::Error;

/// Errors produced while turning a tree widget into a selection prompt.
#[derive(Error, Debug)]
pub enum TreePromptError {
    /// The host rendering pipeline is unusable. Raised at construction time,
    /// before any prompt is built, and signals an incompatible environment
    /// (zero-width console, unqueryable terminal) rather than bad input.
    #[error("Rendering capability unavailable: {0}")]
    MissingCapability(String),

    /// Rendering yielded no text where at least one line was expected. A tree
    /// with a root always renders to at least one line, so this either means
    /// the tree had no nodes at all or the host widget broke its contract.
    #[error("Renderer produced no output where at least one line was expected")]
    EmptyRender,

    /// The host tree widget rejected its input (e.g. duplicate node
    /// identifiers). Passed through unchanged from the widget's validation.
    #[error("Tree widget rejected the input: {0}")]
    InvalidTree(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreePromptError>;
