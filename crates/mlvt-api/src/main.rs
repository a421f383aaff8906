use mlvt_core::Config;

// mimalloc as the global allocator; lower fragmentation on musl-based container images.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::from_env()?;

    let (_state, router) = mlvt_api::setup::initialize_app(config.clone()).await?;

    mlvt_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
