use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::render::{TextOptions, render_day};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        file,
        day,
        close_day,
    } = cmd
    {
        let trip = Core::load_trip(file)?;
        let sheets = Core::build_sheets(&trip, *day, Core::sheet_options(cfg, *close_day))?;

        if let Some(id) = trip.trip_label() {
            println!("Trip {id}");
        }

        if sheets.is_empty() {
            println!("No days in trip log.");
            return Ok(());
        }

        let opts = TextOptions::from(cfg);
        for sheet in &sheets {
            println!("{}", render_day(sheet, opts));
        }
    }
    Ok(())
}
