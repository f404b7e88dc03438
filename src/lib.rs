// ABOUTME: Library root for dockery - keeps a container listing in step with the runtime.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod runtime;
pub mod status;
pub mod sync;
pub mod types;
pub mod view;
