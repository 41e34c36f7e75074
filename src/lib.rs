#[macro_use] extern crate log;

pub mod context;
pub mod controllers;
pub mod error;
pub mod models;
pub mod schema;
pub mod util;

pub use crate::context::Context;
pub use crate::error::{Error, Result};
