use questions_core::db::migrations::latest_version;
use questions_core::{
    DbError, Question, QuestionRepository, QuestionsDatabase, RepoError, SqliteQuestionRepository,
};
use rusqlite::types::Value;
use rusqlite::Connection;

#[test]
fn open_in_memory_creates_every_table() {
    let db = QuestionsDatabase::open_in_memory().unwrap();

    assert_eq!(schema_version(db.connection()), latest_version());
    assert!(db.path().is_none());
    for table in [
        "users",
        "questions",
        "question_follows",
        "replies",
        "question_likes",
    ] {
        assert_table_exists(db.connection(), table);
    }
}

#[test]
fn reopening_same_file_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.db");

    let db = QuestionsDatabase::open(&path).unwrap();
    db.execute(
        "INSERT INTO users (fname, lname) VALUES (?1, ?2);",
        ["Ada", "Lovelace"],
    )
    .unwrap();
    assert_eq!(db.path(), Some(path.as_path()));
    drop(db);

    let db = QuestionsDatabase::open(&path).unwrap();
    assert_eq!(schema_version(db.connection()), latest_version());
    let rows = db.execute("SELECT fname FROM users;", []).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text("fname").unwrap(), "Ada");
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = QuestionsDatabase::open(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn execute_returns_named_native_values() {
    let db = QuestionsDatabase::open_in_memory().unwrap();

    let inserted = db
        .execute(
            "INSERT INTO users (fname, lname) VALUES (?1, ?2);",
            ["Grace", "Hopper"],
        )
        .unwrap();
    assert!(inserted.is_empty());
    let id = db.last_insert_row_id();

    let rows = db
        .execute("SELECT * FROM users WHERE id = ?1;", [id])
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].columns().collect::<Vec<_>>(),
        vec!["id", "fname", "lname"]
    );
    assert_eq!(rows[0].value("id").unwrap(), &Value::Integer(id));
    assert_eq!(rows[0].text("lname").unwrap(), "Hopper");

    let none = db
        .execute("SELECT * FROM users WHERE id = ?1;", [id + 1])
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn execute_write_reports_changed_rows() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    db.execute_write(
        "INSERT INTO users (fname, lname) VALUES (?1, ?2);",
        ["Alan", "Turing"],
    )
    .unwrap();

    let changed = db
        .execute_write("UPDATE users SET lname = ?1;", ["T."])
        .unwrap();
    assert_eq!(changed, 1);
}

#[test]
fn malformed_sql_propagates_store_error() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    let err = db.execute("SELEC * FROM users;", []).unwrap_err();
    assert!(matches!(err, DbError::Sqlite(_)));
}

#[test]
fn foreign_keys_are_enforced_by_the_store() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    let questions = SqliteQuestionRepository::new(&db);

    let mut orphan = Question::new("Who wrote me?", "nobody", 42);
    let err = questions.create(&mut orphan).unwrap_err();
    assert!(matches!(err, RepoError::Db(DbError::Sqlite(_))));
    assert_eq!(orphan.id, None);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
