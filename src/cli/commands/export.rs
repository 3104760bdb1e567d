use super::load_or_warn;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportRequest;
use crate::ui::messages::info;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        archive,
        format,
        file,
        view,
        year,
        search,
        force,
    } = cmd
    {
        let Some(history) = load_or_warn(archive, cfg)? else {
            return Ok(());
        };

        info(format!("View: {view:?}, format: {}", format.as_str()));

        let req = ExportRequest {
            view: *view,
            format: *format,
            file: file.clone(),
            year: *year,
            search: search.clone(),
            force: *force,
        };

        ExportLogic::export(&history, cfg, &req)?;
    }
    Ok(())
}
