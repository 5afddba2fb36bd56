//! Wirework Inject - Injection kernel and scope resolution
//!
//! The kernel builds scene-shaped object graphs from factory bindings. For
//! every resolution it decides, through the scope rules in [`scope`],
//! whether a dependency shares the enclosing node context or is given a
//! freshly created one. Constructed behaviours self-register with the
//! kernel's update scheduler and advance only through explicit [`Kernel::step`]
//! calls.

mod error;
mod kernel;
pub mod scope;

pub use error::InjectError;
pub use kernel::{InjectCtx, Kernel};
pub use scope::{BindScope, ScopeDecision};
