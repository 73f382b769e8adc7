use anyhow::Result;
use hive_server::{Settings, init_logging, serve};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    serve(settings).await
}
