#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use taskboard::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};

    #[test]
    fn test_fresh_database_needs_migration() {
        let conn = Connection::open_in_memory().unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test]
    fn test_migrations_apply_in_order() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 3);
        assert!(!needs_migration(&conn).unwrap());

        let history = MigrationManager::new().get_migration_history(&conn).unwrap();
        let names: Vec<(u32, String)> = history.into_iter().map(|(version, name, _)| (version, name)).collect();
        assert_eq!(
            names,
            vec![
                (1, "create_todos".to_string()),
                (2, "add_missing_todo_columns".to_string()),
                (3, "todos_autoincrement_ids".to_string()),
            ]
        );
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();
        conn.execute("INSERT INTO todos (task) VALUES ('Keep me')", []).unwrap();

        init_with_migrations(&mut conn).unwrap();

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 1);
        let applied: i64 = conn.query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0)).unwrap();
        assert_eq!(applied, 3);
    }

    #[test]
    fn test_missing_columns_are_added_without_losing_rows() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE todos (id INTEGER PRIMARY KEY, task TEXT NOT NULL)", []).unwrap();
        conn.execute("INSERT INTO todos (task) VALUES ('Legacy')", []).unwrap();

        init_with_migrations(&mut conn).unwrap();

        let (task, completed, has_created_at): (String, bool, bool) = conn
            .query_row("SELECT task, completed, created_at IS NOT NULL FROM todos", [], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })
            .unwrap();
        assert_eq!(task, "Legacy");
        assert!(!completed);
        assert!(has_created_at);
    }

    #[test]
    fn test_legacy_table_is_rebuilt_with_autoincrement() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE todos (id INTEGER PRIMARY KEY, task TEXT NOT NULL)", []).unwrap();
        conn.execute("INSERT INTO todos (id, task) VALUES (3, 'Third'), (7, 'Seventh')", []).unwrap();

        init_with_migrations(&mut conn).unwrap();

        let sql: String = conn
            .query_row("SELECT sql FROM sqlite_master WHERE type = 'table' AND name = 'todos'", [], |row| row.get(0))
            .unwrap();
        assert!(sql.contains("AUTOINCREMENT"));

        let mut stmt = conn.prepare("SELECT id, task FROM todos ORDER BY id").unwrap();
        let rows: Vec<(i64, String)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(rows, vec![(3, "Third".to_string()), (7, "Seventh".to_string())]);

        conn.execute("DELETE FROM todos WHERE id = 7", []).unwrap();
        conn.execute("INSERT INTO todos (task, created_at) VALUES ('Next', CURRENT_TIMESTAMP)", []).unwrap();
        assert_eq!(conn.last_insert_rowid(), 8);
    }
}
