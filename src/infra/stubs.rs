use anyhow::Result;

use crate::infra::{
    config::AppConfig,
    contracts::{ConfigAdapter, DataSink},
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Keeps delivered payloads in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub delivered: Vec<String>,
}

impl DataSink for MemorySink {
    fn deliver(&mut self, data: &str) -> Result<()> {
        self.delivered.push(data.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let config = StubConfigAdapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }
}
