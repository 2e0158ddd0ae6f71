use serde::Deserialize;

/// The probe configuration read from `config.yml`.
/// Every site is requested once with every method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProbeConfig {
    /// Target URIs, e.g. `https://example.com`.
    /// Defaults to an empty list when the key is missing.
    #[serde(default)]
    pub sites: Vec<String>,

    /// HTTP verbs to send to every site, e.g. `GET`, `HEAD`, `OPTIONS`.
    /// Defaults to an empty list when the key is missing.
    #[serde(default)]
    pub methods: Vec<String>,
}

impl ProbeConfig {
    /// Number of probes a run over this configuration dispatches.
    pub fn task_count(&self) -> usize {
        self.sites.len() * self.methods.len()
    }
}
