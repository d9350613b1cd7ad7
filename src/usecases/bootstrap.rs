use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    domain::host_user::HostUser,
    infra::{
        self,
        config::{FileConfigAdapter, HostConfig},
        contracts::ConfigAdapter,
        error::AppError,
        init_data::user_from_init_data,
    },
    usecases::context::AppContext,
};

pub fn bootstrap(
    config_path: Option<&Path>,
    init_data: Option<&str>,
) -> Result<(AppContext, WorkerGuard), AppError> {
    let context = build_context(&FileConfigAdapter::new(config_path), init_data)?;
    let guard = infra::logging::init(&context.config.logging)?;

    tracing::info!(
        user_present = context.user.is_some(),
        outbox = %context.config.host.outbox_path.display(),
        "context ready"
    );

    Ok((context, guard))
}

fn build_context(
    config_adapter: &dyn ConfigAdapter,
    init_data: Option<&str>,
) -> Result<AppContext, AppError> {
    let config = config_adapter.load()?;
    let user = resolve_user(&config.host, init_data)?;

    Ok(AppContext::new(config, user))
}

/// Launch parameters from the command line win over the config file, which
/// in turn prefers raw init data over an explicit user table.
fn resolve_user(
    host: &HostConfig,
    cli_init_data: Option<&str>,
) -> Result<Option<HostUser>, AppError> {
    if let Some(raw) = cli_init_data.or(host.init_data.as_deref()) {
        return Ok(user_from_init_data(raw)?);
    }

    Ok(host.user.clone())
}
