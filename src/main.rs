use std::sync::Arc;

use anyhow::Context;
use jsonstub::config::Config;
use jsonstub::properties::Properties;
use jsonstub::resource::ResourceResolver;
use jsonstub::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();

    let properties = Properties::load(&cfg.properties_path)
        .context("server cannot start without its properties")?;
    let resolver = ResourceResolver::new(Arc::new(properties), &cfg.resource_dir);
    let server = Server::bind(&cfg.listen_addr, resolver).await?;

    tokio::select! {
        _ = server.run() => {}

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
