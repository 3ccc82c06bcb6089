#![forbid(unsafe_code)]

//! Core types shared by the sorteringen crates.

pub mod error;
pub mod ns;

pub use error::{Error, Result};
