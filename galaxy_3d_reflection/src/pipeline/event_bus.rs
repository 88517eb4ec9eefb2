/// Camera render events: begin/end notifications around each camera.
///
/// The host pipeline raises two events per camera per frame. Observers
/// subscribe to both through a `CameraEventBus`. A reflection pass
/// renders a nested camera from inside a begin event, and that nested
/// render raises its own events, so dispatch never holds the bus or an
/// observer lock across another observer's callback.

use std::sync::{Arc, Mutex, TryLockError};
use slotmap::{new_key_type, SlotMap};
use crate::camera::Camera;
use crate::device::{RenderBackend, RenderContext};
use crate::error::Result;

new_key_type! {
    /// Handle of a subscription in a CameraEventBus
    pub struct SubscriptionKey;
}

/// Which side of a camera render an event is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEventPhase {
    /// Before the camera draws
    BeginCamera,
    /// After the camera drew
    EndCamera,
}

/// Receiver of camera begin/end events.
pub trait CameraRenderObserver: Send {
    /// Called before `camera` renders
    fn on_begin_camera_rendering(
        &mut self,
        backend: &mut dyn RenderBackend,
        context: &RenderContext,
        camera: &Camera,
    ) -> Result<()>;

    /// Called after `camera` rendered
    fn on_end_camera_rendering(
        &mut self,
        backend: &mut dyn RenderBackend,
        context: &RenderContext,
        camera: &Camera,
    ) -> Result<()>;
}

/// Shared observer handle
pub type SharedObserver = Arc<Mutex<dyn CameraRenderObserver>>;

/// Subscription registry for camera render events.
pub struct CameraEventBus {
    observers: SlotMap<SubscriptionKey, SharedObserver>,
}

impl CameraEventBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self { observers: SlotMap::with_key() }
    }

    /// Register an observer for both phases
    pub fn subscribe(&mut self, observer: SharedObserver) -> SubscriptionKey {
        self.observers.insert(observer)
    }

    /// Remove a subscription. Returns false if the key was not registered.
    pub fn unsubscribe(&mut self, key: SubscriptionKey) -> bool {
        self.observers.remove(key).is_some()
    }

    /// Returns true if the key is registered
    pub fn is_subscribed(&self, key: SubscriptionKey) -> bool {
        self.observers.contains_key(key)
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Snapshot of the registered observers, in registration order
    pub fn observers(&self) -> Vec<SharedObserver> {
        self.observers.values().cloned().collect()
    }

    /// Notify every registered observer of `phase` for `camera`.
    ///
    /// Returns the number of observers actually called.
    pub fn dispatch(
        &self,
        phase: RenderEventPhase,
        backend: &mut dyn RenderBackend,
        context: &RenderContext,
        camera: &Camera,
    ) -> usize {
        notify_observers(&self.observers(), phase, backend, context, camera)
    }
}

impl Default for CameraEventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Call `phase` on each observer in order.
///
/// An observer that is already locked is inside its own callback (its
/// nested render raised this event) and is skipped. A failing observer
/// is logged and does not stop the others. Returns the number of
/// observers called.
pub fn notify_observers(
    observers: &[SharedObserver],
    phase: RenderEventPhase,
    backend: &mut dyn RenderBackend,
    context: &RenderContext,
    camera: &Camera,
) -> usize {
    let mut called = 0;

    for observer in observers {
        let mut guard = match observer.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => {
                crate::engine_trace!("galaxy3d::pipeline::EventBus",
                    "{:?} for camera {} skipped a re-entered observer",
                    phase, camera.id().raw());
                continue;
            }
            Err(TryLockError::Poisoned(_)) => {
                crate::engine_error!("galaxy3d::pipeline::EventBus",
                    "{:?} for camera {} skipped a poisoned observer",
                    phase, camera.id().raw());
                continue;
            }
        };

        let result = match phase {
            RenderEventPhase::BeginCamera => guard.on_begin_camera_rendering(backend, context, camera),
            RenderEventPhase::EndCamera => guard.on_end_camera_rendering(backend, context, camera),
        };
        called += 1;

        if let Err(err) = result {
            crate::engine_error!("galaxy3d::pipeline::EventBus",
                "{:?} observer failed for camera '{}': {}",
                phase, camera.name(), err);
        }
    }

    called
}

#[cfg(test)]
#[path = "event_bus_tests.rs"]
mod tests;
