#![allow(dead_code)] // Not every suite exercises every fixture

pub mod fixtures;

pub use fixtures::*;
