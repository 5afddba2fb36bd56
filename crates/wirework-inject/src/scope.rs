//! Scope resolution
//!
//! Decides, for every resolution request, whether the requested type shares
//! the enclosing node context or gets a freshly created one. The decision is
//! computed fresh for every request and never cached: two sibling requests
//! for the same boundary type must end up on distinct nodes.

/// Node-context policy a type is bound with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindScope {
    /// Resolve in whatever node context the enclosing construction uses.
    Shared,
    /// Boundary marker: every resolution of this type gets its own node.
    Boundary,
}

/// Outcome of scope resolution for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeDecision {
    /// Construct against the enclosing node context.
    Reuse,
    /// Construct against a brand-new node.
    Create,
}

/// Decide the node context for one resolution request.
///
/// - A root request always creates: either the type is boundary-marked and
///   owns the whole graph's context, or there is simply nothing to reuse.
/// - A parameter marked boundary at the request site creates, regardless of
///   how its type is bound.
/// - A boundary-bound type creates wherever it is requested.
/// - Everything else reuses the enclosing context.
///
/// Named-prefab-resource parameters never reach this function; the resource
/// loader supplies their node directly.
pub fn decide(bind_scope: BindScope, parameter_boundary: bool, is_root: bool) -> ScopeDecision {
    if is_root || parameter_boundary || bind_scope == BindScope::Boundary {
        ScopeDecision::Create
    } else {
        ScopeDecision::Reuse
    }
}
