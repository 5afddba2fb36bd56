use wirework_assets::ResourceError;

/// Errors raised while building an object graph.
///
/// Resolution failures abort the entire construction that depended on them;
/// partially built graphs are never returned.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InjectError {
    /// No binding registered for the requested type.
    #[error("no binding registered for {0}")]
    MissingBinding(&'static str),

    /// A resource parameter failed to resolve. Propagated unmodified from
    /// the resource loader.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Scope resolution produced no usable context. The scope rules make
    /// this unreachable; seeing it indicates a bug in the kernel, not a
    /// recoverable condition.
    #[error("no node context available while resolving {0}")]
    ScopeConflict(&'static str),
}
