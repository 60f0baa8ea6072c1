//! SQLite-backed word store

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::types::{ToSql, ToSqlOutput, Value};
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use tracing::debug;

use super::WordStore;
use crate::admin::WordQuery;
use crate::errors::{StoreError, VocabResult};
use crate::models::{Level, NewWord, Word, WordDefaults, WordEdit, WordId};

const SCHEMA: &str = r#"
  CREATE TABLE IF NOT EXISTS words (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word TEXT NOT NULL,
    definition TEXT NOT NULL,
    example TEXT NOT NULL DEFAULT '',
    level TEXT NOT NULL CHECK (level IN ('Beginner', 'Intermediate', 'Advanced')),
    created_at TEXT NOT NULL
  );

  CREATE INDEX IF NOT EXISTS idx_words_word ON words(word);
"#;

const SELECT_COLUMNS: &str = "SELECT id, word, definition, example, level, created_at FROM words";

impl ToSql for Level {
  fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
    Ok(ToSqlOutput::from(self.as_str()))
  }
}

/// Word store over a single SQLite connection.
///
/// The connection sits behind a mutex, so every operation (including the
/// lookup + insert pair of `get_or_create`) runs without interleaving.
pub struct SqliteWordStore {
  conn: Mutex<Connection>,
  /// `None` for in-memory databases
  path: Option<PathBuf>,
}

impl SqliteWordStore {
  /// Opens (or creates) a database file, creating parent directories and the schema
  ///
  /// # Errors
  /// - Parent directory cannot be created
  /// - SQLite open or schema creation fails
  pub fn open<P: AsRef<Path>>(path: P) -> VocabResult<Self> {
    let path = path.as_ref().to_path_buf();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
        path: path.clone(),
        source: Arc::new(e),
      })?;
    }

    let conn = Connection::open(&path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
    conn.execute_batch(SCHEMA)?;

    debug!(path = %path.display(), "Opened word store");

    Ok(Self {
      conn: Mutex::new(conn),
      path: Some(path),
    })
  }

  /// Opens a private in-memory database (used by tests and throwaway runs)
  pub fn open_in_memory() -> VocabResult<Self> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(SCHEMA)?;

    Ok(Self {
      conn: Mutex::new(conn),
      path: None,
    })
  }

  /// Database file path, `None` for in-memory stores
  pub fn path(&self) -> Option<&Path> {
    self.path.as_deref()
  }

  fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
    self.conn.lock().map_err(|_| StoreError::LockPoisoned)
  }

  fn find_by_id(conn: &Connection, id: WordId) -> VocabResult<Option<Word>> {
    let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
    let raw = conn.query_row(&sql, params![id], RawWord::from_row).optional()?;
    raw.map(RawWord::into_word).transpose()
  }

  fn insert(conn: &Connection, new_word: NewWord) -> VocabResult<Word> {
    // Stored with microsecond precision; truncate so the returned value matches later reads.
    let created_at = Utc::now().trunc_subsecs(6);

    conn.execute(
      "INSERT INTO words (word, definition, example, level, created_at)
       VALUES (?1, ?2, ?3, ?4, ?5)",
      params![
        new_word.word,
        new_word.definition,
        new_word.example,
        new_word.level,
        format_timestamp(&created_at),
      ],
    )?;

    Ok(Word {
      id: conn.last_insert_rowid(),
      word: new_word.word,
      definition: new_word.definition,
      example: new_word.example,
      level: new_word.level,
      created_at,
    })
  }

  fn collect(conn: &Connection, sql: &str, values: Vec<Value>) -> VocabResult<Vec<Word>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params_from_iter(values), RawWord::from_row)?;

    let mut words = Vec::new();
    for raw in rows {
      words.push(raw?.into_word()?);
    }
    Ok(words)
  }
}

impl WordStore for SqliteWordStore {
  fn create(&self, new_word: NewWord) -> VocabResult<Word> {
    new_word.validate()?;
    let conn = self.lock()?;
    Self::insert(&conn, new_word)
  }

  fn get(&self, id: WordId) -> VocabResult<Option<Word>> {
    let conn = self.lock()?;
    Self::find_by_id(&conn, id)
  }

  fn get_or_create(&self, text: &str, defaults: WordDefaults) -> VocabResult<(Word, bool)> {
    let conn = self.lock()?;

    let sql = format!("{SELECT_COLUMNS} WHERE word = ?1 ORDER BY id LIMIT 1");
    let existing = conn.query_row(&sql, params![text], RawWord::from_row).optional()?;
    if let Some(raw) = existing {
      return Ok((raw.into_word()?, false));
    }

    let new_word = defaults.into_new_word(text);
    new_word.validate()?;
    let word = Self::insert(&conn, new_word)?;
    Ok((word, true))
  }

  fn list_all(&self) -> VocabResult<Vec<Word>> {
    let conn = self.lock()?;
    Self::collect(&conn, &format!("{SELECT_COLUMNS} ORDER BY id"), Vec::new())
  }

  fn query(&self, query: &WordQuery) -> VocabResult<Vec<Word>> {
    let mut clauses = Vec::new();
    let mut values = Vec::new();

    if let Some(level) = query.level {
      values.push(Value::Text(level.as_str().to_string()));
      clauses.push(format!("level = ?{}", values.len()));
    }
    if let Some(since) = query.created_since {
      values.push(Value::Text(format_timestamp(&since)));
      clauses.push(format!("created_at >= ?{}", values.len()));
    }
    // Every whitespace-separated term must appear in word or definition.
    if let Some(search) = &query.search {
      for term in search.split_whitespace() {
        values.push(Value::Text(format!("%{}%", escape_like(term))));
        let n = values.len();
        clauses.push(format!(
          "(word LIKE ?{n} ESCAPE '\\' OR definition LIKE ?{n} ESCAPE '\\')"
        ));
      }
    }

    let mut sql = SELECT_COLUMNS.to_string();
    if !clauses.is_empty() {
      sql.push_str(" WHERE ");
      sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY ");
    sql.push_str(query.order.sql());

    let conn = self.lock()?;
    Self::collect(&conn, &sql, values)
  }

  fn count(&self) -> VocabResult<usize> {
    let conn = self.lock()?;
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;
    Ok(usize::try_from(count).unwrap_or(0))
  }

  fn nth(&self, index: usize) -> VocabResult<Option<Word>> {
    let Ok(offset) = i64::try_from(index) else {
      return Ok(None);
    };
    let conn = self.lock()?;
    let sql = format!("{SELECT_COLUMNS} ORDER BY id LIMIT 1 OFFSET ?1");
    let raw = conn.query_row(&sql, params![offset], RawWord::from_row).optional()?;
    raw.map(RawWord::into_word).transpose()
  }

  fn update(&self, id: WordId, edit: &WordEdit) -> VocabResult<Word> {
    edit.validate()?;
    let conn = self.lock()?;

    let mut word = Self::find_by_id(&conn, id)?.ok_or(StoreError::WordNotFound { id })?;
    edit.apply_to(&mut word);

    conn.execute(
      "UPDATE words SET word = ?1, definition = ?2, example = ?3, level = ?4 WHERE id = ?5",
      params![word.word, word.definition, word.example, word.level, id],
    )?;

    Ok(word)
  }

  fn delete(&self, id: WordId) -> VocabResult<bool> {
    let conn = self.lock()?;
    let removed = conn.execute("DELETE FROM words WHERE id = ?1", params![id])?;
    Ok(removed > 0)
  }

  fn delete_all(&self) -> VocabResult<usize> {
    let conn = self.lock()?;
    Ok(conn.execute("DELETE FROM words", [])?)
  }
}

/// Column values as read from SQLite, before timestamp/level decoding
struct RawWord {
  id: WordId,
  word: String,
  definition: String,
  example: String,
  level: String,
  created_at: String,
}

impl RawWord {
  fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id: row.get(0)?,
      word: row.get(1)?,
      definition: row.get(2)?,
      example: row.get(3)?,
      level: row.get(4)?,
      created_at: row.get(5)?,
    })
  }

  fn into_word(self) -> VocabResult<Word> {
    let level = self.level.parse::<Level>().map_err(|e| StoreError::CorruptRow {
      id: self.id,
      reason: e.to_string(),
    })?;
    let created_at = DateTime::parse_from_rfc3339(&self.created_at)
      .map_err(|e| StoreError::CorruptRow {
        id: self.id,
        reason: format!("created_at {:?}: {e}", self.created_at),
      })?
      .with_timezone(&Utc);

    Ok(Word {
      id: self.id,
      word: self.word,
      definition: self.definition,
      example: self.example,
      level,
      created_at,
    })
  }
}

/// Fixed-width RFC 3339 (`2026-01-01T00:00:00.000000Z`), so text order equals time order
fn format_timestamp(at: &DateTime<Utc>) -> String {
  at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn escape_like(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for c in text.chars() {
    if matches!(c, '%' | '_' | '\\') {
      escaped.push('\\');
    }
    escaped.push(c);
  }
  escaped
}
