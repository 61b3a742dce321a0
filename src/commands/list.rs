use crate::{
    api::HttpTaskApi,
    libs::{board::TaskBoard, config::Config, messages::Message, view::View},
};
use anyhow::{anyhow, Result};

/// Shows the board. When the server cannot be reached the empty board is
/// still rendered before the failure is reported.
pub async fn cmd(config: &Config) -> Result<()> {
    let api = HttpTaskApi::new(&config.api_url);
    let mut board = TaskBoard::new();

    let loaded = board.load(&api).await;
    View::board(&board);

    loaded.map_err(|error| anyhow!("{}", Message::BoardLoadFailed(error.to_string())))
}
