//! Concrete implementations of trait abstractions.
//!
//! Production adapters wrap real transport crates behind the traits defined
//! in `crate::traits`; the [`mock`] submodule provides configurable test
//! doubles for the same seams.

pub mod mock;
pub mod reqwest_http;

pub use mock::MockHttpClient;
pub use reqwest_http::ReqwestHttpClient;
