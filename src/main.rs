use clap::Parser as _;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = folio_render::CliArgs::parse();
    let report = folio_render::run(args).await?;
    if report.posts_failed {
        tracing::warn!("blog index was rendered with its error state");
    }
    Ok(())
}
