use leadcap::{config::AppConfig, App, Result, Transport};

#[tokio::main]
async fn main() -> Result<()> {
    // We have a different logging mechanism for production
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

    leadcap::serve(app, Transport::Server).await?;

    Ok(())
}
