use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        out,
        day,
        close_day,
        force,
    } = cmd
    {
        let trip = Core::load_trip(file)?;
        let sheets = Core::build_sheets(&trip, *day, Core::sheet_options(cfg, *close_day))?;
        ExportLogic::export(&sheets, trip.trip_label(), *format, out, *force)?;
    }
    Ok(())
}
