//! In-memory battleship game backend.
//!
//! Clients create boards, place ships and attack positions through
//! [`GameService`]; with the `net` feature the same operations are served
//! over TCP by [`Skeleton`] and consumed by [`Stub`].

pub mod config;
pub mod core;
pub mod domain;
pub mod events;
mod logging;
#[cfg(feature = "net")]
pub mod play;
pub mod prelude;
pub mod service;
pub mod store;
#[cfg(feature = "net")]
pub mod protocol;
#[cfg(feature = "net")]
mod skeleton;
#[cfg(feature = "net")]
mod stub;
#[cfg(feature = "net")]
pub mod transport;

pub use crate::core::*;
pub use domain::{BoardCreation, PlacementOutcome};
pub use events::{EventSink, Events, LogSink, MemorySink, NullSink};
pub use logging::init_logging;
pub use service::GameService;
pub use store::{GameStateStore, SharedBoard};
#[cfg(feature = "net")]
pub use protocol::{GameApi, Message, PROTOCOL_VERSION};
#[cfg(feature = "net")]
pub use skeleton::Skeleton;
#[cfg(feature = "net")]
pub use stub::Stub;
#[cfg(feature = "net")]
pub use transport::tcp::TcpTransport;
