//! DOM Events
//!
//! Event objects and the listener callbacks registered on elements.

use std::fmt;
use std::rc::Rc;

use crate::NodeId;

/// DOM event delivered to listeners
#[derive(Debug, Clone)]
pub struct DomEvent {
    /// Event type without any prefix (`click`, `input`, ...)
    pub event_type: String,
    /// Node the event was dispatched on
    pub target: NodeId,
    /// Node whose listener is currently running
    pub current_target: NodeId,
    propagation_stopped: bool,
}

impl DomEvent {
    pub fn new(event_type: &str, target: NodeId) -> Self {
        Self {
            event_type: event_type.to_string(),
            target,
            current_target: target,
            propagation_stopped: false,
        }
    }

    /// Stop the event from bubbling to ancestors
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Event listener callback
///
/// Cheap to clone. Two listeners are equal only when they share the same
/// callback allocation, which is how removal finds the registration.
#[derive(Clone)]
pub struct EventListener(Rc<dyn Fn(&mut DomEvent)>);

impl EventListener {
    pub fn new(callback: impl Fn(&mut DomEvent) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    /// Invoke the callback
    pub fn call(&self, event: &mut DomEvent) {
        (self.0)(event)
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast::<()>()
    }
}

impl PartialEq for EventListener {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for EventListener {}

impl fmt::Debug for EventListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventListener").field(&self.addr()).finish()
    }
}
