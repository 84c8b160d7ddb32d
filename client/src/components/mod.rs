//! Viewer UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `ViewerCore` and shell state from context and route every
//! state-changing interaction through the `Dispatcher`, which owns side effects.

pub mod highlight_layer;
pub mod page_host;
pub mod quote_form;
pub mod quote_list;
pub mod sidebar;
pub mod toast_stack;
pub mod toolbar;
