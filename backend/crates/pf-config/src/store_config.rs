use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Start with the two showcase projects instead of an empty store
    pub seed_sample_projects: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_sample_projects: true,
        }
    }
}
