use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::api::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressMode {
    /// Enable progress UI when stderr is a TTY.
    Auto,
    /// Always enable progress UI (even when piped).
    Always,
    /// Never show progress UI.
    Never,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Output directory; every route is written as `<route>/index.html`.
    #[arg(long, default_value = "site")]
    pub out: PathBuf,

    /// Base URL of the posts/users REST resource.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub api_base_url: Url,

    /// Search text applied when rendering the blog index.
    ///
    /// The page still filters live in the browser as the reader types.
    #[arg(long, default_value = "")]
    pub query: String,

    /// How many fetched posts get their own detail page (in fetch order).
    #[arg(long, default_value_t = 10)]
    pub post_pages: usize,

    /// Assets directory name inside the output directory.
    #[arg(long, default_value = "assets")]
    pub assets_dir_name: String,

    /// Max concurrent HTTP requests.
    #[arg(long, default_value_t = 8)]
    pub max_concurrency: usize,

    /// HTTP User-Agent sent to the REST resource.
    #[arg(long, default_value = "folio-render/0.1")]
    pub user_agent: String,

    /// Progress display: `auto`, `always`, or `never`.
    #[arg(long, value_enum, default_value = "auto")]
    pub progress: ProgressMode,

    /// Brand shown in the navbar, footer and page titles.
    #[arg(long, default_value = "Portfolio")]
    pub site_title: String,
}
