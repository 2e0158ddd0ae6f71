pub mod probe;
pub mod result;
pub mod task;

pub mod prelude {
    pub use super::probe::{ClientOptions, build_client, probe_task};
    pub use super::result::{ProbeError, ProbeFailure, ProbeResult};
    pub use super::task::ProbeTask;
}

use std::fmt::Write;

/// Render an error and its whole `source()` chain on a single line.
pub fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s.replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_flattens_chain() {
        let inner = std::io::Error::other("connection refused");
        let err = result::ProbeError::InvalidMethod("BAD METHOD".into());
        assert_eq!(report(&err), "invalid method \"BAD METHOD\"");
        assert_eq!(report(&inner), "connection refused");
    }
}
