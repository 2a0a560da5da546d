//! Database connect gate.
//!
//! The server refuses to bind until a database connection is established,
//! mirroring the connect-before-listen startup order of the deployment this
//! replaces.

use std::path::Path;

use rusqlite::Connection;
use tracing::info;

/// Opens (creating if needed) the SQLite database and verifies it answers.
pub fn connect(path: &Path) -> Result<Connection, rusqlite::Error> {
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "foreign_keys", "ON")?;

    // Ping before declaring the gate passed.
    let one: i64 = conn.query_row("SELECT 1", [], |row| row.get(0))?;
    debug_assert_eq!(one, 1);
    info!(path = %path.display(), "connected to database");

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_connect_creates_and_answers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("taskdeck.db");

        let conn = connect(&path).unwrap();
        assert!(path.exists());

        let answer: i64 = conn.query_row("SELECT 2 + 2", [], |row| row.get(0)).unwrap();
        assert_eq!(answer, 4);
    }

    #[test]
    fn test_connect_reopens_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("taskdeck.db");

        drop(connect(&path).unwrap());
        let again = connect(&path);
        assert!(again.is_ok());
    }

    #[test]
    fn test_connect_fails_on_unreachable_path() {
        let result = connect(Path::new("/nonexistent-dir/taskdeck.db"));
        assert!(result.is_err());
    }
}
