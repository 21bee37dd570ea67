use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print, evaluations } = cmd {
        if !*print && !*evaluations {
            return Ok(());
        }

        let mut pool = DbPool::open_existing(&cfg.database)?.ok_or_else(|| {
            AppError::Config(format!(
                "database '{}' not found, run `alibi init` first",
                cfg.database
            ))
        })?;
        init_db(&pool.conn)?;

        if *print {
            LogLogic::print_log(&mut pool)?;
        }
        if *evaluations {
            LogLogic::print_evaluations(&mut pool)?;
        }
    }

    Ok(())
}
