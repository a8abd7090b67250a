//! Serves `/api/interested` through the single function style handler
//! instead of the method routed server.

use leadcap::{config::AppConfig, App, Result, Transport};

#[tokio::main]
async fn main() -> Result<()> {
    #[cfg(not(debug_assertions))]
    {
        leadcap::init_production_tracing()
    }
    #[cfg(debug_assertions)]
    {
        leadcap::init_dbg_tracing();
    }

    let config = AppConfig::load()?;
    let app = App::build_from_config(config).await?;

    leadcap::serve(app, Transport::Function).await?;

    Ok(())
}
