/// Every user-facing message the application can print.
///
/// Text lives in the `Display` impl in `display.rs`; call sites only pick a
/// variant and its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskDeleted(i64),
    TaskCompleted(String),
    TaskReopened(String),

    // === BOARD MESSAGES ===
    BoardHeader,
    BoardEmpty,
    BoardStats {
        completed: usize,
        pending: usize,
        total: usize,
    },
    BoardLoadFailed(String),

    // === SERVER MESSAGES ===
    ServerListening(String),
    ServerStopped,
    ShutdownRequested(&'static str),

    // === ERROR MESSAGES ===
    CommandFailed(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    ColumnAdded(String),
    TableRebuilt(String, usize),
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
}
