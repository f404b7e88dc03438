// ABOUTME: Type-safe identifiers and small domain value types.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod id;
mod restart_policy;

pub use id::{ContainerId, ImageId};
pub use restart_policy::RestartPolicy;
