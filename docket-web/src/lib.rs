//! HTTP plumbing shared by the docket controllers.
//!
//! Nothing in here knows about the store: handlers produce a `result::ApiError`
//! and this crate decides what goes over the wire for it.

#[macro_use] extern crate log;

pub mod mw;
pub mod result;

pub use result::{ApiError, Result};
