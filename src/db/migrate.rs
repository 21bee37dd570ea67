use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Every other migration records itself
/// there, so this one runs unconditionally.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// A schema step identified by a sortable version string.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20260301_0001_create_evaluations",
        description: "Created evaluations table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS evaluations (
                id           INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at   TEXT NOT NULL,
                source       TEXT NOT NULL DEFAULT 'stdin',
                suspects     INTEGER NOT NULL,
                crime_start  TEXT NOT NULL,
                crime_end    TEXT NOT NULL,
                min_duration INTEGER NOT NULL,
                verdicts     TEXT NOT NULL
            );
        "#,
    },
    Migration {
        version: "20260412_0002_index_evaluations_created_at",
        description: "Indexed evaluations by creation time",
        sql: r#"
            CREATE INDEX IF NOT EXISTS idx_evaluations_created_at ON evaluations(created_at);
        "#,
    },
];

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db(). Returns `version → description` for
/// each step applied; printing them is left to the caller.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<String>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        conn.execute_batch(m.sql)?;
        mark_applied(conn, m.version, m.description)?;

        applied.push(format!("{} → {}", m.version, m.description));
    }

    Ok(applied)
}
