use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{encode_verdicts, insert_evaluation};
use crate::errors::AppResult;
use crate::models::{AlibiVerdict, Case};

pub struct HistoryLogic;

impl HistoryLogic {
    /// Store an evaluation and a matching log line.
    ///
    /// Returns `Ok(false)` without touching the filesystem when the configured
    /// database has not been created by `init` yet.
    pub fn record(
        cfg: &Config,
        operation: &str,
        source: &str,
        case: &Case,
        verdicts: &[AlibiVerdict],
    ) -> AppResult<bool> {
        let Some(pool) = DbPool::open_existing(&cfg.database)? else {
            return Ok(false);
        };

        init_db(&pool.conn)?;

        let id = insert_evaluation(&pool.conn, source, case, verdicts)?;
        ttlog(
            &pool.conn,
            operation,
            source,
            &format!("evaluation #{id}: {}", encode_verdicts(verdicts)),
        )?;

        Ok(true)
    }
}
