use rusqlite::{Connection, OptionalExtension, Result, params};

/// Key the dark mode flag is stored under; the value is the literal text
/// `"true"` or `"false"`.
pub const THEME_KEY: &str = "dark_mode";

/// Key-value settings persistence. The editor only ever talks to this
/// trait, so tests swap in an in-memory substitute.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub struct Database {
    connection: Connection,
}

impl Database {
    pub fn new(db_path: &str) -> Result<Database> {
        Self::with_connection(Connection::open(db_path)?)
    }

    pub fn open_in_memory() -> Result<Database> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Database> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Database { connection: conn })
    }
}

impl SettingsStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.connection.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_back_none() {
        let db = Database::open_in_memory().unwrap();

        assert_eq!(db.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn set_then_get_roundtrip() {
        let db = Database::open_in_memory().unwrap();

        db.set(THEME_KEY, "true").unwrap();

        assert_eq!(db.get(THEME_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn second_set_overwrites() {
        let db = Database::open_in_memory().unwrap();

        db.set(THEME_KEY, "true").unwrap();
        db.set(THEME_KEY, "false").unwrap();

        assert_eq!(db.get(THEME_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn keys_are_independent() {
        let db = Database::open_in_memory().unwrap();

        db.set(THEME_KEY, "true").unwrap();
        db.set("font_size", "14").unwrap();

        assert_eq!(db.get(THEME_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(db.get("font_size").unwrap().as_deref(), Some("14"));
    }
}
