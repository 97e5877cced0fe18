//! Configuration constants for pipeline-dag
//!
//! This module contains all configurable constants used throughout the
//! application. Server values can be overridden through environment
//! variables, CLI flags or a TOML settings file.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while pipeline files are discovered
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Name used for documents read from standard input
    pub const STDIN_NAME: &str = "<stdin>";
}

/// HTTP server configuration
pub mod server {
    use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

    /// Address the server listens on by default
    pub const DEFAULT_BIND: SocketAddr =
        SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8000));

    /// Largest request body accepted by default (2 MiB)
    pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

    /// Route that evaluates a pipeline
    pub const PARSE_ROUTE: &str = "/pipelines/parse";

    /// Origin pattern that allows every origin
    pub const ANY_ORIGIN: &str = "*";
}

/// Pipeline file discovery
pub mod discovery {
    /// Extension of pipeline documents found while walking directories
    pub const PIPELINE_EXTENSION: &str = "json";

    /// Directories never descended into
    pub const SKIPPED_DIRS: &[&str] = &[".git", "node_modules", "target"];
}
