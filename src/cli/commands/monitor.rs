use crate::cli::commands::{clock, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::monitor::MonitorLogic;
use crate::core::record_navigation;
use crate::db::{PredictionLog, VisitLog};
use crate::errors::AppResult;
use crate::models::page::Page;
use crate::ui::messages::{header, section};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Monitor { pages, predictions } = cmd {
        // No filter flag means both sections.
        let (show_pages, show_predictions) = if !*pages && !*predictions {
            (true, true)
        } else {
            (*pages, *predictions)
        };

        let store = open_store(cfg)?;
        let clock = clock(cfg)?;

        let visits = VisitLog::new(&store, clock.clone());
        record_navigation(&visits, Page::Monitor);

        header(Page::Monitor.icon(), "Monitor App");

        if show_pages {
            section("Page Metrics");
            let history = MonitorLogic::load_visits(&visits);
            println!("{}", MonitorLogic::render_page_metrics(&history, cfg.bar_width));
        }

        if show_predictions {
            section("Emotion Classifier Metrics");
            let log = PredictionLog::new(&store, clock);
            let history = MonitorLogic::load_predictions(&log);
            println!(
                "{}",
                MonitorLogic::render_prediction_metrics(&history, cfg.bar_width)
            );
        }
    }

    Ok(())
}
