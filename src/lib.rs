//! Wirework - dependency injection for scene-shaped object graphs
//!
//! Wirework lets component trees attached to hierarchical nodes be
//! constructed and exercised without a real rendering or physics host. The
//! [`Kernel`] builds object graphs from factory bindings, deciding for each
//! dependency whether it shares the enclosing node context or gets a fresh
//! one; the [`ResourceLoader`] turns symbolic paths into documents, prefab
//! nodes, and typed assets; and the update scheduler advances live
//! behaviours in discrete, test-controlled steps.
//!
//! ```
//! use wirework::{BindScope, Behaviour, Clock, Kernel};
//!
//! struct Spinner {
//!     revolutions: f32,
//! }
//!
//! impl Behaviour for Spinner {
//!     fn update(&mut self, clock: &Clock) {
//!         self.revolutions += clock.delta();
//!     }
//! }
//!
//! let mut kernel = Kernel::new();
//! kernel.bind_behaviour::<Spinner, _>(BindScope::Boundary, |_cx| {
//!     Ok(Spinner { revolutions: 0.0 })
//! });
//!
//! let spinner = kernel.get::<Spinner>().unwrap();
//! kernel.step(1);
//! assert!(spinner.lock().revolutions > 0.0);
//! ```

pub use wirework_assets::{Document, PrefabTemplate, ResourceError, ResourceLoader, SpawnedPrefab};
pub use wirework_core::{
    Behaviour, Clock, ClockConfig, Collision, Handle, LayerMask, Node, NodeId, Pose, Transform,
    UpdateScheduler,
};
pub use wirework_inject::{BindScope, InjectCtx, InjectError, Kernel, ScopeDecision};
