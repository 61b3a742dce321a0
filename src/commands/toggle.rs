use super::load_board;
use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task ID
    id: i64,
}

pub async fn cmd(args: ToggleArgs, config: &Config) -> Result<()> {
    let (api, mut board) = load_board(config).await?;

    let task = board.toggle(&api, args.id).await?;

    if task.completed {
        msg_success!(Message::TaskCompleted(task.task));
    } else {
        msg_success!(Message::TaskReopened(task.task));
    }
    View::board(&board);

    Ok(())
}
