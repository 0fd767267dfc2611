use crate::cli::commands::{clock, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{PredictionLog, VisitLog};
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportTarget};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        predictions,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let clock = clock(cfg)?;
        let visit_log = VisitLog::new(&store, clock.clone());
        let prediction_log = PredictionLog::new(&store, clock);

        let target = if *predictions {
            ExportTarget::Predictions
        } else {
            ExportTarget::Visits
        };

        ExportLogic::export(&visit_log, &prediction_log, target, *format, file, *force)?;
    }
    Ok(())
}
