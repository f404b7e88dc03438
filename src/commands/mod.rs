// ABOUTME: Command module aggregator for the dockery CLI.
// ABOUTME: Re-exports the listing, lifecycle, watch and info command handlers.

mod info;
mod lifecycle;
mod list;
mod runtime_connection;
mod watch;

pub use info::info;
pub use lifecycle::lifecycle;
pub use list::{inspect, list};
pub use runtime_connection::connect_local;
pub use watch::watch;
