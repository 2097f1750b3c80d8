//! Platform-neutral half of the test generator client: the wire contract with
//! the generator server, client configuration, and the upload controller the
//! browser frontend drives.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod render;
