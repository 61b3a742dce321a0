use super::load_board;
use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: i64,
}

pub async fn cmd(args: DeleteArgs, config: &Config) -> Result<()> {
    let (api, mut board) = load_board(config).await?;

    board.delete(&api, args.id).await?;

    msg_success!(Message::TaskDeleted(args.id));
    View::board(&board);

    Ok(())
}
