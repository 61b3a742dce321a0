use crate::db::tasks::TaskStore;
use crate::libs::config::Config;
use crate::server;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite path, sqlite:// URL or :memory: (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Directory with the built client (overrides STATIC_DIR)
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Serve the API only
    #[arg(long)]
    no_static: bool,
}

pub async fn cmd(args: ServeArgs, mut config: Config) -> Result<()> {
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = Some(database_url);
    }
    if let Some(static_dir) = args.static_dir {
        config.static_dir = static_dir;
    }

    let address = config.bind_address()?;
    let database_url = config.database_url()?;
    tracing::info!(%database_url, %address, "starting taskboard server");

    let store = TaskStore::open(&database_url)?;
    tracing::info!("task store ready");

    let static_dir = if args.no_static { None } else { Some(config.static_dir.as_path()) };
    server::run(store, address, static_dir).await
}
