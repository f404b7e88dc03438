// ABOUTME: Container runtime access for Docker and Podman.
// ABOUTME: Detection, capability traits, and the bollard-backed client.

mod bollard;
mod detection;
mod error;
pub mod traits;
mod types;

pub use self::bollard::BollardRuntime;
pub use detection::{DetectionError, detect_local};
pub use error::{RuntimeError, RuntimeErrorKind};
pub use traits::{
    ContainerError, ContainerOps, ContainerRecord, EventAction, EventError, EventOps,
    EventStream, RuntimeEvent, RuntimeInfo as RuntimeInfoTrait, RuntimeInfoError,
    RuntimeMetadata,
};
pub use types::{RuntimeConfig, RuntimeInfo, RuntimeType};
