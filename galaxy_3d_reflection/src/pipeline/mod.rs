//! Pipeline module
//!
//! Camera begin/end render events and the subscription registry the
//! host raises them through.

mod event_bus;

pub use event_bus::{
    CameraEventBus, CameraRenderObserver, RenderEventPhase,
    SharedObserver, SubscriptionKey, notify_observers,
};
