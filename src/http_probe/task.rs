use std::fmt;

/// One request to send: a method against a target URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProbeTask {
    method: String,
    uri: String,
}

impl ProbeTask {
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Build one task per (site, method) pair.
    /// Sites form the outer loop and methods the inner one, both in configured order.
    pub fn cross_product(sites: &[String], methods: &[String]) -> Vec<ProbeTask> {
        let mut tasks = Vec::with_capacity(sites.len() * methods.len());
        for uri in sites {
            for method in methods {
                tasks.push(ProbeTask::new(method.as_str(), uri.as_str()));
            }
        }
        tasks
    }
}

impl fmt::Display for ProbeTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.uri)
    }
}
