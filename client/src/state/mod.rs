//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The viewer's domain state lives in `viewer::controller::ViewerCore`, held
//! in an `RwSignal` context. These modules hold what only the browser shell
//! needs: start-up progress, in-flight requests, and toast notifications.

pub mod session;
pub mod toasts;
