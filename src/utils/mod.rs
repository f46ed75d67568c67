//! Utility modules: build info, logging, persistence, terminal.

#![allow(unused_imports)]

pub mod build_info;
pub mod logging;
pub mod persistence;
pub mod terminal;

pub use build_info::*;
pub use logging::*;
