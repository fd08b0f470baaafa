use nodebucket_server::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    rolling_logger::init_logger(&config.log_dir, "nodebucket")?;
    let _ = rolling_logger::info(&format!("Starting with config {:?}", config));

    if let Err(e) = nodebucket_server::run(config).await {
        let _ = rolling_logger::error(&format!("Server failed: {:#}", e));
        return Err(e);
    }
    Ok(())
}
