//! Capability-based dispatch over an open set of concrete types
//!
//! ## Design
//!
//! Two call seams cover both halves of the capability contract:
//!
//! 1. **Static path**: `dispatch` takes `&dyn Named`. Conformance is
//!    proven at compile time and the dispatcher never learns the concrete
//!    type.
//! 2. **Dynamic path**: `DispatchRegistry` routes type-erased values.
//!    Conformances are registered up front; a value whose type was never
//!    registered fails fast with `CapabilityUnsatisfied` and writes
//!    nothing to the sink. Never a silent no-op.
//!
//! The dispatcher holds no entity state. Each call borrows the entity for
//! the duration of the dispatch only.

use semprobe_core::error::{Error, Result};
use semprobe_core::traits::{NameSink, Named};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use tracing::debug;

/// Route one entity's name to the sink
///
/// Stateless single-call contract: resolves the name through the
/// capability and forwards it. Any type implementing `Named` is accepted;
/// non-conforming values are rejected by the type checker.
pub fn dispatch(entity: &dyn Named, sink: &mut dyn NameSink) {
    let name = entity.name();
    debug!(entity = name, "dispatching name");
    sink.accept(name);
}

/// Adapter from a type-erased value to its `Named` conformance
type Adapter = fn(&dyn Any, &mut dyn NameSink);

/// Conformance registry for dispatching type-erased values
///
/// Holds one adapter per registered concrete type, keyed by `TypeId`.
/// The variant set stays open: any `Named + 'static` type can be
/// registered after the fact, and the registry never enumerates it.
///
/// # Example
///
/// ```
/// use semprobe_core::Professor;
/// use semprobe_primitives::DispatchRegistry;
///
/// let mut registry = DispatchRegistry::new();
/// registry.register::<Professor>();
///
/// let professor = Professor { id: 1, name: "John".into() };
/// let mut names: Vec<String> = Vec::new();
/// registry.dispatch_value(&professor, &mut names)?;
/// assert_eq!(names, ["John"]);
/// # Ok::<(), semprobe_core::Error>(())
/// ```
#[derive(Default)]
pub struct DispatchRegistry {
    adapters: HashMap<TypeId, Adapter>,
}

impl DispatchRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a conformance for `T`
    ///
    /// Idempotent: registering the same type twice keeps one adapter.
    pub fn register<T: Named + Any>(&mut self) {
        self.adapters.insert(TypeId::of::<T>(), |value, sink| {
            if let Some(entity) = value.downcast_ref::<T>() {
                dispatch(entity, sink);
            }
        });
    }

    /// Number of registered conformances
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Whether no conformance has been registered
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Route a type-erased value through its registered conformance
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityUnsatisfied` naming the rejected type if
    /// `T` was never registered. Nothing reaches the sink in that case.
    pub fn dispatch_value<T: Any>(&self, value: &T, sink: &mut dyn NameSink) -> Result<()> {
        match self.adapters.get(&TypeId::of::<T>()) {
            Some(adapter) => {
                adapter(value, sink);
                Ok(())
            }
            None => Err(Error::CapabilityUnsatisfied {
                type_name: std::any::type_name::<T>(),
            }),
        }
    }
}

/// Sink that forwards each dispatched name to the tracing pipeline
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NameSink for TracingSink {
    fn accept(&mut self, name: &str) {
        tracing::info!(entity = name, "name dispatched");
    }
}
