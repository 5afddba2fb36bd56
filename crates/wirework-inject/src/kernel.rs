use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use wirework_assets::{Document, ResourceLoader};
use wirework_core::{Behaviour, Clock, ClockConfig, Handle, Node, UpdateScheduler};

use crate::error::InjectError;
use crate::scope::{self, BindScope, ScopeDecision};

type FactoryFn = dyn Fn(&mut InjectCtx<'_>) -> Result<Box<dyn Any>, InjectError> + Send + Sync;

#[derive(Clone)]
struct Binding {
    scope: BindScope,
    factory: Arc<FactoryFn>,
}

/// Object-graph builder plus the scene services it wires together.
///
/// The kernel is an explicitly constructed, passed-down context: it owns the
/// clock, the update scheduler, and the resource loader, with creation and
/// teardown controlled entirely by the embedding code. There is no ambient
/// singleton.
///
/// Types are bound with factory functions; a factory receives an
/// [`InjectCtx`] through which it requests its own dependencies, so parameter
/// markers (boundary, named resource) are expressed as method choices at the
/// request site rather than through reflection.
pub struct Kernel {
    bindings: HashMap<TypeId, Binding>,
    scheduler: UpdateScheduler,
    clock: Clock,
    loader: ResourceLoader,
}

impl Kernel {
    pub fn new() -> Self {
        Self::with_config(ClockConfig::default())
    }

    /// Create a kernel with a custom clock configuration
    pub fn with_config(config: ClockConfig) -> Self {
        info!("kernel created");
        Self {
            bindings: HashMap::new(),
            scheduler: UpdateScheduler::new(),
            clock: Clock::new(config),
            loader: ResourceLoader::new(),
        }
    }

    /// Bind a plain value type. Re-binding a type replaces the previous
    /// binding.
    pub fn bind<T, F>(&mut self, scope: BindScope, factory: F)
    where
        T: Send + 'static,
        F: Fn(&mut InjectCtx<'_>) -> Result<T, InjectError> + Send + Sync + 'static,
    {
        let factory: Arc<FactoryFn> = Arc::new(move |cx: &mut InjectCtx<'_>| {
            let handle: Handle<T> = Arc::new(Mutex::new(factory(cx)?));
            Ok(Box::new(handle) as Box<dyn Any>)
        });
        self.bindings.insert(TypeId::of::<T>(), Binding { scope, factory });
    }

    /// Bind a behaviour type. Constructed instances are attached to their
    /// scope's node and registered with the update scheduler, so they start
    /// receiving updates on the next step.
    pub fn bind_behaviour<T, F>(&mut self, scope: BindScope, factory: F)
    where
        T: Behaviour + 'static,
        F: Fn(&mut InjectCtx<'_>) -> Result<T, InjectError> + Send + Sync + 'static,
    {
        let factory: Arc<FactoryFn> = Arc::new(move |cx: &mut InjectCtx<'_>| {
            let node = cx.node();
            let handle: Handle<T> = Arc::new(Mutex::new(factory(cx)?));
            let hook: Arc<Mutex<dyn Behaviour>> = handle.clone();
            node.attach(&hook);
            cx.kernel.scheduler.register(node, hook);
            Ok(Box::new(handle) as Box<dyn Any>)
        });
        self.bindings.insert(TypeId::of::<T>(), Binding { scope, factory });
    }

    /// Resolve a full object graph for `T` starting from a fresh root
    /// context.
    pub fn get<T: 'static>(&mut self) -> Result<Handle<T>, InjectError> {
        self.resolve(None, false)
    }

    /// Instantiate the prefab at `path` and register its behaviours with the
    /// scheduler.
    pub fn instantiate(&mut self, path: &str) -> Result<Arc<Node>, InjectError> {
        let spawned = self.loader.instantiate(path)?;
        for behaviour in &spawned.behaviours {
            self.scheduler.register(spawned.node.clone(), behaviour.clone());
        }
        Ok(spawned.node)
    }

    /// Advance the clock and every live behaviour by `ticks` discrete steps.
    pub fn step(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.scheduler.step(&mut self.clock);
        }
    }

    /// Number of registered behaviours whose owning node is not destroyed
    pub fn count(&self) -> usize {
        self.scheduler.count()
    }

    /// The kernel's clock, advanced solely by [`Kernel::step`]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// The resource loader backing `load`/`instantiate`/`load_asset`
    pub fn loader(&self) -> &ResourceLoader {
        &self.loader
    }

    /// Mutable loader access, used by setup code to populate the backing
    /// store
    pub fn loader_mut(&mut self) -> &mut ResourceLoader {
        &mut self.loader
    }

    fn resolve<T: 'static>(
        &mut self,
        enclosing: Option<Arc<Node>>,
        parameter_boundary: bool,
    ) -> Result<Handle<T>, InjectError> {
        let binding = self
            .bindings
            .get(&TypeId::of::<T>())
            .cloned()
            .ok_or(InjectError::MissingBinding(type_name::<T>()))?;

        // Scope is recomputed for every request; sibling boundary requests
        // must land on distinct nodes.
        let decision = scope::decide(binding.scope, parameter_boundary, enclosing.is_none());
        let node = match decision {
            ScopeDecision::Reuse => {
                enclosing.ok_or(InjectError::ScopeConflict(type_name::<T>()))?
            }
            ScopeDecision::Create => Node::new(),
        };
        debug!(ty = type_name::<T>(), ?decision, node = %node.id(), "resolving");

        let mut cx = InjectCtx { kernel: self, node };
        let built = (binding.factory)(&mut cx)?;
        Ok(*built
            .downcast::<Handle<T>>()
            .expect("binding produced a mismatched type"))
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolution context handed to binding factories.
///
/// Each method corresponds to one kind of constructor-parameter marking:
/// [`get`](Self::get) for plain parameters, [`get_boundary`](Self::get_boundary)
/// for boundary-marked parameters, and [`prefab`](Self::prefab) /
/// [`document`](Self::document) / [`asset`](Self::asset) for named-resource
/// parameters.
pub struct InjectCtx<'k> {
    kernel: &'k mut Kernel,
    node: Arc<Node>,
}

impl InjectCtx<'_> {
    /// The node context this construction resolves against
    pub fn node(&self) -> Arc<Node> {
        self.node.clone()
    }

    /// Resolve a dependency. Whether it shares this context's node follows
    /// from how its type is bound.
    pub fn get<T: 'static>(&mut self) -> Result<Handle<T>, InjectError> {
        self.kernel.resolve(Some(self.node.clone()), false)
    }

    /// Resolve a dependency in a brand-new node context, regardless of how
    /// its type is bound.
    pub fn get_boundary<T: 'static>(&mut self) -> Result<Handle<T>, InjectError> {
        self.kernel.resolve(Some(self.node.clone()), true)
    }

    /// Instantiate a named prefab. The returned node is always freshly
    /// created by the resource loader, detached and parentless; its template
    /// behaviours are registered with the scheduler.
    pub fn prefab(&mut self, path: &str) -> Result<Arc<Node>, InjectError> {
        self.kernel.instantiate(path)
    }

    /// Load a named structured document
    pub fn document(&mut self, path: &str) -> Result<Document, InjectError> {
        Ok(self.kernel.loader.load(path)?)
    }

    /// Resolve a named opaque asset as a `T`
    pub fn asset<T: Send + Sync + 'static>(&mut self, path: &str) -> Result<Arc<T>, InjectError> {
        Ok(self.kernel.loader.load_asset(path)?)
    }

    /// The kernel clock, for behaviours that want to capture time access
    pub fn clock(&self) -> &Clock {
        &self.kernel.clock
    }
}
