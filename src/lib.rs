pub mod api;
mod assets;
mod builtin;
pub mod catalog;
mod cli;
mod components;
pub mod content;
pub mod detail_view;
pub mod error;
pub mod fetcher;
mod links;
pub mod list_view;
pub mod model;
mod pages;
pub mod progress;
pub mod routes;
pub mod session;
mod site;

use api::ApiClient;
use cli::Args;
use fetcher::Fetcher;

pub use cli::ProgressMode;
pub use cli::Args as CliArgs;
pub use site::SiteReport;

pub async fn run(args: Args) -> anyhow::Result<SiteReport> {
    use std::io::IsTerminal as _;

    let progress_enabled = match args.progress {
        ProgressMode::Always => true,
        ProgressMode::Never => false,
        ProgressMode::Auto => std::io::stderr().is_terminal(),
    };
    let progress = progress::Progress::new(progress_enabled, args.max_concurrency);
    progress.set_stage("connecting");

    let fetcher = Fetcher::new(
        &args.user_agent,
        args.max_concurrency,
        Some(progress.clone()),
    )?;
    let client = ApiClient::new(fetcher, args.api_base_url.clone());
    tracing::info!(base_url = %client.base_url(), out = %args.out.display(), "rendering site");

    let res = site::build(&args, &client, progress.clone()).await;
    progress.finish();
    res
}
