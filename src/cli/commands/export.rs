use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        out,
        force,
    } = cmd
    {
        let attendance = super::read_attendance(Some(input.as_path()))?;
        let report = Core::build_report(&attendance, cfg)?;
        ExportLogic::export(&report, *format, out, *force, cfg)?;
    }
    Ok(())
}
