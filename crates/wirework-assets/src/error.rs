/// Errors that can occur during resource resolution.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResourceError {
    /// No document, template, or asset exists at the given path. Fatal to
    /// the construction that requested it.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// An asset exists at the path but is not of the requested type.
    #[error("asset at '{path}' is not a {expected}")]
    WrongType {
        path: String,
        expected: &'static str,
    },
}
