use taskboard::commands::Cli;
use taskboard::libs::logging;
use taskboard::libs::messages::Message;
use taskboard::msg_error;

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(error) = Cli::menu().await {
        msg_error!(Message::CommandFailed(format!("{:#}", error)));
        std::process::exit(1);
    }
}
