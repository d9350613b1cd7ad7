use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain::{self, user_info::render_user_info},
    infra, ui,
    usecases::{self, bootstrap, context::AppContext},
};

pub fn run(cli: Cli) -> Result<()> {
    let (context, _log_guard) = bootstrap::bootstrap(cli.config.as_deref(), cli.init_data.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => ui::shell::start(&context, Box::new(ui::CrosstermEventSource))?,
        Command::Preview => {
            for line in preview_lines(&context) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn preview_lines(context: &AppContext) -> Vec<String> {
    let theme = context.config.host.theme.resolve();

    let mut lines = render_user_info(context.user.as_ref()).lines();
    lines.push(format!("theme: background {} text {}", theme.background, theme.text));
    lines
}
