use arcwatch_core::{TracingConfig, init_tracing};
use arcwatch_server::{ServerConfig, ServerResult, run};

#[tokio::main]
async fn main() -> ServerResult<()> {
    init_tracing(TracingConfig::server())?;

    let config = ServerConfig::from_env()?;
    run(config).await
}
