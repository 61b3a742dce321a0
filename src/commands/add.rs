use super::load_board;
use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task text; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,
}

pub async fn cmd(args: AddArgs, config: &Config) -> Result<()> {
    let (api, mut board) = load_board(config).await?;

    board.set_draft(args.text.join(" "));
    let task = board.submit(&api).await?;

    msg_success!(Message::TaskCreated(task.task));
    View::board(&board);

    Ok(())
}
