//! Page-level components.

pub mod document;
