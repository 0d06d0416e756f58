use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::timeline::validate_trip;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `check` command: a trip either validates fully or fails on
/// its first bad checkpoint.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Check { file } = cmd {
        let trip = Core::load_trip(file)?;
        let days = validate_trip(&trip)?;
        let checkpoints: usize = days.iter().map(|d| d.graph_points.len()).sum();
        success(format!(
            "{} day(s), {} checkpoint(s) valid in {}",
            days.len(),
            checkpoints,
            file.display()
        ));
    }
    Ok(())
}
