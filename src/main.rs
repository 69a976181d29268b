use std::sync::Arc;

use djerbago::catalog::Catalog;
use djerbago::config::Config;
use djerbago::engine::Engine;
use djerbago::error::Error;
use djerbago::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let catalog = Arc::new(Catalog::load(&config.catalog_path)?);
    let bind_addr = config.bind_addr;
    let engine = Engine::new(catalog, config);

    serve(engine, bind_addr).await
}
