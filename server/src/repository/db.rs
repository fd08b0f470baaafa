//! Database Connection Pool and Setup
//!
//! Manages a bounded set of SQLite connections and the schema migrations.
//! rusqlite is synchronous, so [`DbPool::run`] executes every unit of work on
//! tokio's blocking thread pool. A lock wait on the database file never stalls
//! the async workers.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use rusqlite::Connection;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::domain::{DomainError, DomainResult};

const IN_MEMORY: &str = ":memory:";
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Unavailable(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Unavailable(format!("corrupt task list: {}", e))
    }
}

/// Bounded SQLite connection pool
pub struct DbPool {
    path: PathBuf,
    size: usize,
    idle: Arc<Mutex<Vec<Connection>>>,
    permits: Arc<Semaphore>,
}

impl DbPool {
    /// Open `size` connections to the database at `path` and run migrations.
    ///
    /// `:memory:` always gets a single connection, since every in-memory
    /// connection is a separate database. Blocking; call it before serving or
    /// from `spawn_blocking`.
    pub fn open(path: impl AsRef<Path>, size: usize) -> DomainResult<Self> {
        let path = path.as_ref().to_path_buf();
        let size = if path.as_os_str() == IN_MEMORY { 1 } else { size.max(1) };

        let first = open_connection(&path)?;
        run_migrations(&first)?;

        let mut idle = Vec::with_capacity(size);
        idle.push(first);
        for _ in 1..size {
            idle.push(open_connection(&path)?);
        }

        log::info!("Opened {} with {} pooled connection(s)", path.display(), size);

        Ok(Self {
            path,
            size,
            idle: Arc::new(Mutex::new(idle)),
            permits: Arc::new(Semaphore::new(size)),
        })
    }

    /// Run `work` with a pooled connection on the blocking thread pool.
    ///
    /// Waits asynchronously for a free connection. The connection goes back to
    /// the pool when `work` returns, whether it succeeded or not.
    pub async fn run<T, F>(&self, work: F) -> DomainResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> DomainResult<T> + Send + 'static,
    {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| DomainError::Unavailable("connection pool is closed".to_string()))?;
        let lease = Lease {
            conn: lock(&self.idle).pop(),
            idle: self.idle.clone(),
            _permit: permit,
        };
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || {
            let mut lease = lease;
            // Only short when a connection was lost; open a replacement.
            if lease.conn.is_none() {
                lease.conn = Some(open_connection(&path)?);
            }
            match lease.conn.as_mut() {
                Some(conn) => work(conn),
                None => Err(DomainError::Unavailable("no database connection".to_string())),
            }
        })
        .await
        .map_err(|e| DomainError::Unavailable(format!("database task failed: {}", e)))?
    }

    /// Stop handing out connections. Pending and future `run` calls fail.
    pub fn close(&self) {
        self.permits.close();
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn idle_count(&self) -> usize {
        lock(&self.idle).len()
    }
}

/// A connection checked out of [`DbPool`] together with its permit
struct Lease {
    conn: Option<Connection>,
    idle: Arc<Mutex<Vec<Connection>>>,
    // Released after `drop` has put the connection back.
    _permit: OwnedSemaphorePermit,
}

impl Drop for Lease {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            lock(&self.idle).push(conn);
        }
    }
}

fn lock(idle: &Mutex<Vec<Connection>>) -> std::sync::MutexGuard<'_, Vec<Connection>> {
    idle.lock().unwrap_or_else(PoisonError::into_inner)
}

fn open_connection(path: &Path) -> Result<Connection, DomainError> {
    let conn = Connection::open(path)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    if path.as_os_str() != IN_MEMORY {
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))?;
    }
    Ok(conn)
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in names {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    // One row per employee; lists are JSON arrays of {id, text}
    conn.execute(
        "CREATE TABLE IF NOT EXISTS employees (
            emp_id INTEGER PRIMARY KEY,
            todo TEXT NOT NULL DEFAULT '[]',
            done TEXT NOT NULL DEFAULT '[]'
        )",
        [],
    )?;

    // Display name, needed by sign-in
    if !column_exists(conn, "employees", "first_name")? {
        conn.execute("ALTER TABLE employees ADD COLUMN first_name TEXT NOT NULL DEFAULT ''", [])?;
    }
    if !column_exists(conn, "employees", "last_name")? {
        conn.execute("ALTER TABLE employees ADD COLUMN last_name TEXT NOT NULL DEFAULT ''", [])?;
    }

    Ok(())
}
