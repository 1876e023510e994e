//! Portal Backend Binary
//!
//! Serves authentication, marketplace, and dashboard routes.
//! Binds to --bind or BIND_ADDR (e.g. 0.0.0.0:8888) and persists
//! sessions to --storage or KF_STORAGE.
use clap::Parser;
use kf_auth::FileStore;
use kf_auth::Settings;
use kf_auth::Vault;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "portal", about = "Khalifa Fund portal backend")]
struct Args {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8888")]
    bind: String,
    /// Session store file
    #[arg(long, env = "KF_STORAGE", default_value = "data/sessions.json")]
    storage: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    kf_core::log();
    kf_core::kys();
    let args = Args::parse();
    let settings = Settings::from_env();
    let store = Arc::new(FileStore::open(args.storage)?);
    let vault = Vault::new(settings, store)?;
    kf_server::run(vault, &args.bind).await
}
