use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        let store = open_store(cfg)?;

        //
        // 1) INFO
        //
        if *info {
            stats::print_db_info(&store)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = store
                .with_conn(|conn| conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0)))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);

            store.with_conn(|conn| conn.execute_batch("VACUUM;"))?;

            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }

        store.close()?;
    }

    Ok(())
}
