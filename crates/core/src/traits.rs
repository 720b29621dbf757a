//! Capability traits for polymorphic dispatch
//!
//! This module defines the Named capability and the NameSink seam that let
//! a dispatcher route calls over an open set of concrete types without
//! knowing the variant set in advance.

/// Capability: a value that can report its display name
///
/// Any concrete type implementing this trait is accepted by the
/// dispatcher; the dispatcher itself stays ignorant of the implementing
/// set. Object safe so that `&dyn Named` works at the call seam.
pub trait Named {
    /// The entity's display name
    fn name(&self) -> &str;
}

/// Receiving end for dispatched names
///
/// The dispatcher resolves a name through the capability and forwards it
/// here; rendering is the sink's concern, not the dispatcher's.
pub trait NameSink {
    /// Accept one dispatched name
    fn accept(&mut self, name: &str);
}

/// Collecting sink: appends each dispatched name in arrival order
impl NameSink for Vec<String> {
    fn accept(&mut self, name: &str) {
        self.push(name.to_string());
    }
}
