/// Convenience result type used across the crate.
pub type RevealResult<T> = Result<T, RevealError>;

/// Top-level error taxonomy.
///
/// Everything here is raised during the load phase. Once a [`crate::Piece`] exists, advancing
/// and slicing are total and never fail.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Malformed path data: bad numeric token, wrong operand count, unknown operator.
    #[error("parse error: {0}")]
    Parse(String),

    /// Artwork element outside the supported `svg`/`g`/`path` set.
    #[error("unsupported node: <{0}>")]
    UnsupportedNode(String),

    /// Artwork could not be read or is not a well-formed document.
    #[error("geometry load error: {0}")]
    GeometryLoad(String),

    /// Invalid configuration or encoder settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Renderer or encoder failure.
    #[error("render error: {0}")]
    Render(String),

    /// Any other error (usually IO with context attached).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Parse`].
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Parse error for an operator letter outside the path mini-language.
    pub fn unsupported_operator(op: char) -> Self {
        Self::Parse(format!("unsupported operator '{op}'"))
    }

    /// Build a [`RevealError::UnsupportedNode`].
    pub fn unsupported_node(tag: impl Into<String>) -> Self {
        Self::UnsupportedNode(tag.into())
    }

    /// Build a [`RevealError::GeometryLoad`].
    pub fn geometry_load(msg: impl Into<String>) -> Self {
        Self::GeometryLoad(msg.into())
    }

    /// Build a [`RevealError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
