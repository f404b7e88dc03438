// ABOUTME: Keeps a local view of container state in step with the runtime.
// ABOUTME: Event subscriber, container cache and lifecycle command dispatcher.

mod cache;
mod dispatcher;
mod subscriber;

pub use cache::{ContainerCache, ObserverId};
pub use dispatcher::CommandDispatcher;
pub use subscriber::{EventSubscriber, Invalidation, Subscription};
