use super::board::{BoardView, TaskBoard};
use super::messages::Message;
use crate::msg_print;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints the board: a numbered task table followed by the counters.
    pub fn board(board: &TaskBoard) {
        msg_print!(Message::BoardHeader, true);

        if board.tasks().is_empty() {
            msg_print!(Message::BoardEmpty);
        } else {
            Self::tasks_table(board).printstd();
        }

        msg_print!(Self::stats(&board.view()));
    }

    pub fn tasks_table(board: &TaskBoard) -> Table {
        let mut table = Table::new();

        table.add_row(row!["#", "ID", "DONE", "TASK"]);
        for (index, task) in board.tasks().iter().enumerate() {
            let mark = if task.completed { "✓" } else { " " };
            table.add_row(row![index + 1, task.id, mark, task.task]);
        }

        table
    }

    pub fn stats(view: &BoardView<'_>) -> Message {
        Message::BoardStats {
            completed: view.completed_count(),
            pending: view.pending_count(),
            total: view.total(),
        }
    }
}
