use crate::config::Config;
use crate::core::run_session;
use crate::errors::AppResult;
use crate::ui::Console;

/// Handle the `explore` command (and the bare invocation)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut console = Console::stdio();
    run_session(&mut console, cfg)
}
