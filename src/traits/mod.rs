//! Trait abstractions for external collaborators.
//!
//! The engine talks to the network through these seams so tests can inject
//! doubles; production adapters live in `crate::adapters`.

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
