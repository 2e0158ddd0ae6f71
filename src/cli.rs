//! Command line options.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::http_probe::prelude::ClientOptions;
use crate::report::DisplayMode;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "headprobe",
    version = env!("CARGO_PKG_VERSION"),
    max_term_width = 120,
)]
/// Send every configured HTTP method to every configured site and print
/// one pipe-delimited line per response: site, method, status code and the
/// Server, X-Powered-By and Max-Forwards headers.
pub struct Opts {
    /// Path to the YAML file listing `sites` and `methods`.
    #[arg(long, env = "CONFIG_FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Print responses with every status code, not only those below 400.
    #[arg(long)]
    pub all: bool,

    /// Dump every response header for each probe.
    #[arg(long)]
    pub headers: bool,

    /// Maximum number of requests in flight at once. 0 means no limit.
    #[arg(long, default_value_t = 0)]
    pub concurrency: usize,

    /// Per-request deadline in seconds. Without it requests wait indefinitely.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Accept invalid TLS certificates.
    #[arg(long)]
    pub insecure: bool,
}

impl Opts {
    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::new(self.all, self.headers)
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: self.timeout.map(Duration::from_secs),
            accept_invalid_certs: self.insecure,
        }
    }
}
