use crate::classifier::LinearTextClassifier;
use crate::cli::commands::{clock, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::home::HomeLogic;
use crate::core::record_navigation;
use crate::db::{PredictionLog, VisitLog};
use crate::errors::AppResult;
use crate::models::page::Page;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Home { text } = cmd {
        let store = open_store(cfg)?;
        let clock = clock(cfg)?;

        let visits = VisitLog::new(&store, clock.clone());
        record_navigation(&visits, Page::Home);

        header(Page::Home.icon(), "Emotion Detection in Text");

        match text {
            None => info("✏️  Type your text: emotrack home \"<text>\""),
            Some(text) => {
                let classifier = LinearTextClassifier::load(&cfg.model_path())?;
                let predictions = PredictionLog::new(&store, clock);

                let submission = HomeLogic::submit(&predictions, &classifier, text);
                print!("{}", HomeLogic::render(&submission, cfg.bar_width));
            }
        }
    }

    Ok(())
}
