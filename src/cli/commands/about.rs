use crate::cli::commands::{clock, open_store};
use crate::config::Config;
use crate::core::about;
use crate::core::record_navigation;
use crate::db::VisitLog;
use crate::errors::AppResult;
use crate::models::page::Page;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let visits = VisitLog::new(&store, clock(cfg)?);
    record_navigation(&visits, Page::About);

    print!("{}", about::render());
    Ok(())
}
