//! Browser-facing helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate DOM, pdf.js and timer concerns from components so
//! the components stay declarative and the viewer core stays browser-free.

pub mod dialog;
pub mod effects;
pub mod host_config;
#[cfg(feature = "csr")]
pub mod pdfjs;
pub mod selection;
