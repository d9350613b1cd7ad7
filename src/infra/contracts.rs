use anyhow::Result;

use crate::infra::config::AppConfig;

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

/// Destination for data the page hands to the host.
pub trait DataSink {
    fn deliver(&mut self, data: &str) -> Result<()>;
}
