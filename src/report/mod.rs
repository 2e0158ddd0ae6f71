//! Turning probe outcomes into report text.
//!
//! A summary line has six pipe-delimited columns:
//! `site|method|status|server|x-powered-by|max-forwards`, with absent headers left empty.
//! A header dump is a status line, one `name:value` line per response header
//! and a blank separator line.

pub mod output;

pub use output::Output;

use std::fmt::Write;

use crate::http_probe::result::ProbeResult;

/// Column titles printed before any probe output, unless headers are dumped.
pub const HEADER_LINE: &str =
    "Site|Method|StatusCode|Server Header|X-Powered-By Header|Max-Forwards Header";

/// Report verbosity, straight from the `--all` and `--headers` flags.
/// Both may be set at once, in which case a probe prints a summary line and a header dump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayMode {
    pub print_all: bool,
    pub all_headers: bool,
}

impl DisplayMode {
    pub fn new(print_all: bool, all_headers: bool) -> Self {
        Self {
            print_all,
            all_headers,
        }
    }

    pub fn wants_header_line(&self) -> bool {
        !self.all_headers
    }

    /// Whether a response with `http_status` gets a summary line.
    pub fn wants_summary(&self, http_status: u16) -> bool {
        self.print_all || (!self.all_headers && http_status < 400)
    }
}

pub fn summary_line(result: &ProbeResult) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}\n",
        result.task.uri(),
        result.task.method(),
        result.http_status,
        result.header("Server"),
        result.header("X-Powered-By"),
        result.header("Max-Forwards"),
    )
}

/// `content-type` -> `Content-Type`: uppercase the first letter and every letter after a `-`.
/// Names holding a byte that is not an HTTP token character are returned as they are.
pub fn canonical_header_name(name: &str) -> String {
    let is_token = |b: u8| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b);
    if !name.bytes().all(is_token) {
        return name.to_string();
    }

    let mut canonical = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        if upper {
            canonical.push(c.to_ascii_uppercase());
        } else {
            canonical.push(c.to_ascii_lowercase());
        }
        upper = c == '-';
    }
    canonical
}

pub fn header_dump(result: &ProbeResult) -> String {
    let mut block = format!(
        "{} - {} - Status Code:{}\n",
        result.task.uri(),
        result.task.method(),
        result.http_status
    );
    for (name, value) in &result.headers {
        let _ = writeln!(block, "{}:{value}", canonical_header_name(name));
    }
    block.push('\n');
    block
}

/// Everything `mode` prints for one result, as a single chunk, or `None` when suppressed.
pub fn render(result: &ProbeResult, mode: DisplayMode) -> Option<String> {
    let mut chunk = String::new();
    if mode.wants_summary(result.http_status) {
        chunk.push_str(&summary_line(result));
    }
    if mode.all_headers {
        chunk.push_str(&header_dump(result));
    }
    (!chunk.is_empty()).then_some(chunk)
}
