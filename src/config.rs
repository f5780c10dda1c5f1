//! Network defaults.

use std::time::Duration;

/// Version exchanged in the session handshake.
pub const PROTOCOL_VERSION: u8 = 1;

/// Address `serve` binds to unless told otherwise.
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Address `play` connects to unless told otherwise.
pub const DEFAULT_CONNECT: &str = "127.0.0.1:8080";

/// Default timeout for a single send or receive.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum frame size (1 MB).
pub const MAX_MESSAGE_SIZE: u32 = 1_000_000;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";
