use crate::{domain::host_user::HostUser, infra::config::AppConfig};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    /// Host user snapshot, fixed for the whole session.
    pub user: Option<HostUser>,
}

impl AppContext {
    pub fn new(config: AppConfig, user: Option<HostUser>) -> Self {
        Self { config, user }
    }
}
