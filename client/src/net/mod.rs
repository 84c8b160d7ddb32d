//! Networking for the annotation store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and `types` defines the wire schema and
//! host configuration shared with the server that embeds the viewer.

pub mod api;
pub mod types;
