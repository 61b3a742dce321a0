//! Client-side view of the task collection.
//!
//! A [`TaskBoard`] mirrors the last known server state as an immutable
//! snapshot. Every successful operation builds a new snapshot and swaps it
//! in whole. A failed operation leaves the snapshot exactly as it was. The
//! server's answers are authoritative: toggling stores the record the server
//! returns instead of flipping the flag locally.
//!
//! The pending/completed split is a [`BoardView`] computed from the current
//! snapshot on demand, so it can never drift from it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::api::HttpTaskApi;
//! use taskboard::libs::board::TaskBoard;
//!
//! # async fn run() -> Result<(), taskboard::api::ClientError> {
//! let api = HttpTaskApi::new("http://127.0.0.1:3000");
//! let mut board = TaskBoard::new();
//! board.load(&api).await?;
//! board.set_draft("Buy milk");
//! let task = board.submit(&api).await?;
//! board.toggle(&api, task.id).await?;
//! println!("{} of {} done", board.view().completed_count(), board.view().total());
//! # Ok(())
//! # }
//! ```

use super::task::{is_valid_text, Task};
use crate::api::{ClientError, TaskApi};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TaskBoard {
    tasks: Arc<[Task]>,
    draft: String,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self {
            tasks: Arc::from(Vec::<Task>::new()),
            draft: String::new(),
        }
    }

    /// Current snapshot, in server order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Shared handle to the current snapshot. It stays valid after later updates.
    pub fn snapshot(&self) -> Arc<[Task]> {
        Arc::clone(&self.tasks)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn find(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Replaces the snapshot with the server's list.
    ///
    /// On failure the board is left empty and the error is returned for the
    /// caller to report.
    pub async fn load<A: TaskApi>(&mut self, api: &A) -> Result<(), ClientError> {
        match api.list().await {
            Ok(tasks) => {
                self.tasks = tasks.into();
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "could not load tasks");
                self.tasks = Arc::from(Vec::<Task>::new());
                Err(error)
            }
        }
    }

    /// Sends the draft to the server and appends the created task.
    ///
    /// A blank draft never reaches the network. The draft is cleared only on success.
    pub async fn submit<A: TaskApi>(&mut self, api: &A) -> Result<Task, ClientError> {
        if !is_valid_text(&self.draft) {
            return Err(ClientError::BlankDraft);
        }

        let created = api.create(&self.draft).await?;

        let tasks = self.tasks.iter().cloned().chain(std::iter::once(created.clone())).collect();
        self.replace(tasks);
        self.draft.clear();

        Ok(created)
    }

    pub async fn delete<A: TaskApi>(&mut self, api: &A, id: i64) -> Result<(), ClientError> {
        api.delete(id).await?;

        let tasks = self.tasks.iter().filter(|task| task.id != id).cloned().collect();
        self.replace(tasks);

        Ok(())
    }

    /// Asks the server to flip the task's completion and adopts the returned record.
    pub async fn toggle<A: TaskApi>(&mut self, api: &A, id: i64) -> Result<Task, ClientError> {
        let current = self.find(id).ok_or(ClientError::UnknownTask(id))?.completed;

        let updated = api.set_completion(id, !current).await?;

        let tasks = self
            .tasks
            .iter()
            .map(|task| if task.id == id { updated.clone() } else { task.clone() })
            .collect();
        self.replace(tasks);

        Ok(updated)
    }

    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(&self.tasks)
    }

    fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks.into();
    }
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Pending and completed tasks of one snapshot, each in snapshot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    pub pending: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
}

impl<'a> BoardView<'a> {
    pub fn new(tasks: &'a [Task]) -> Self {
        let (pending, completed): (Vec<&Task>, Vec<&Task>) = tasks.iter().partition(|task| task.is_pending());

        Self { pending, completed }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn total(&self) -> usize {
        self.pending.len() + self.completed.len()
    }
}
