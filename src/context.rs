use diesel::sqlite::SqliteConnection;

use crate::error::Result;
use crate::util::db::DbPool;

/// Everything a handler needs, built once at startup and shared through
/// the router's state.
#[derive(Clone)]
pub struct Context {
    pool: DbPool,
}

impl Context {
    pub fn new(pool: DbPool) -> Self {
        Context { pool: pool }
    }

    /// Runs a store operation on the blocking pool w/ a pooled connection.
    ///
    /// Diesel is synchronous, so the connection never crosses an `.await`.
    pub async fn run<F, T>(&self, op: F) -> Result<T>
    where F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
          T: Send + 'static {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            op(&mut *conn)
        }).await?
    }
}
