// ABOUTME: Composable capability traits for container runtimes.
// ABOUTME: Defines ContainerOps, EventOps and RuntimeInfo.

mod container;
mod events;
mod runtime_info;
mod shared_types;

pub use container::{ContainerError, ContainerOps};
pub use events::{EventError, EventOps, EventStream};
pub use runtime_info::{RuntimeInfo, RuntimeInfoError};
pub use shared_types::*;

