use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::{Error, Result};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// The pool type shared with every handler through `Context`
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Applied to each connection as it is checked out of the pool.
///
/// SQLite serializes writers; w/o a busy timeout a second writer fails
/// immediately with `SQLITE_BUSY` instead of waiting its turn.
///
/// Diesel switches `foreign_keys` on when it connects. Deleting an entry
/// must leave its comments and tag links in place, so it is switched back
/// off here.
#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> ::std::result::Result<(), r2d2::Error> {
        let pragma = format!("PRAGMA busy_timeout = {}; PRAGMA foreign_keys = OFF;",
                             self.busy_timeout.as_millis());

        conn.batch_execute(&pragma).map_err(r2d2::Error::QueryError)
    }
}

/// Opens a pool against `database_url` and brings its schema up to date.
pub fn establish(database_url: &str, pool_size: u32) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let options = ConnectionOptions { busy_timeout: Duration::from_secs(5) };

    let pool = Pool::builder()
        .max_size(pool_size)
        .connection_customizer(Box::new(options))
        .build(manager)?;

    run_migrations(&pool)?;
    Ok(pool)
}

pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut pooled = pool.get()?;
    let conn: &mut SqliteConnection = &mut pooled;

    let applied = conn.run_pending_migrations(MIGRATIONS)
        .map_err(Error::Migration)?;

    for version in applied {
        info!("applied migration {}", version);
    }

    Ok(())
}
