mod dashboard;
mod render;
mod window;

use bamti_client::Acquirer;
use bamti_core::{AppConfig, Catalog};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bamti")]
#[command(about = "Sentiment dashboard for social-media comments about a product")]
struct Cli {
    /// Product keyword. Falls back to `BAMTI_DEFAULT_KEYWORD`.
    #[arg(long, short, global = true)]
    keyword: Option<String>,

    /// Period preset: `최근 7일`, `최근 14일`, `최근 30일` (or `7d`, `14d`, `30d`).
    #[arg(long, global = true)]
    period: Option<String>,

    /// Start of a custom range (YYYY-MM-DD, inclusive).
    #[arg(long, global = true)]
    from: Option<NaiveDate>,

    /// End of a custom range (YYYY-MM-DD, inclusive). Open when omitted.
    #[arg(long, global = true, requires = "from")]
    to: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Comment table with channel/sentiment/attribute filters.
    Comments {
        #[arg(long, default_value = "all")]
        channel: String,
        #[arg(long, default_value = "all")]
        sentiment: String,
        #[arg(long, default_value = "all")]
        attribute: String,
        /// `latest`, `oldest`, `likesHigh` or `likesLow`.
        #[arg(long, default_value = "latest")]
        sort: String,
        /// Show one comment in full instead of the table.
        #[arg(long)]
        id: Option<String>,
    },
    /// Long-form and shorts grids.
    Videos {
        /// `views`, `likes`, `comments`, `positiveRate` or `negativeRate`.
        #[arg(long, default_value = "views")]
        sort: String,
        /// Sort for the shorts grid; defaults to `--sort`.
        #[arg(long)]
        shorts_sort: Option<String>,
        #[arg(long)]
        platform: Option<String>,
    },
    /// Sentiment overview and top comments by likes.
    Sentiment {
        #[arg(long, default_value = "좋아요 상위 10%")]
        positive_filter: String,
        #[arg(long, default_value = "좋아요 상위 10%")]
        negative_filter: String,
    },
    /// Distributions per channel and attribute plus video totals.
    Summary {
        #[arg(long, default_value = "all")]
        channel: String,
    },
    /// Print a seeded mock dataset as JSON.
    Generate {
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 30)]
        comments: usize,
        #[arg(long, default_value_t = 6)]
        videos: usize,
        #[arg(long, default_value_t = 4)]
        shorts: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = bamti_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = load_catalog(&config)?;

    let Some(command) = cli.command else {
        println!("bamti: pick a view (comments, videos, sentiment, summary, generate); see --help");
        return Ok(());
    };

    // Only the view commands talk to the API.
    let session = || -> anyhow::Result<(Acquirer, window::Window)> {
        let now = chrono::Utc::now();
        let mut window = window::resolve_window(
            cli.keyword.clone(),
            cli.period.as_deref(),
            cli.from,
            cli.to,
            &config,
            now,
        )?;
        window.canonicalize(&catalog);
        println!("{}", window.describe(now));
        tracing::info!(
            keyword = window.keyword.as_deref().unwrap_or("-"),
            from = %window.range.from,
            env = %config.env,
            "acquiring"
        );
        Ok((dashboard::build_acquirer(&config)?, window))
    };

    match command {
        Commands::Comments {
            channel,
            sentiment,
            attribute,
            sort,
            id,
        } => {
            let (acquirer, window) = session()?;
            let selection = dashboard::CommentSelection {
                channel,
                sentiment,
                attribute,
                sort,
                id,
            };
            dashboard::run_comments(&acquirer, &window, &selection).await;
        }
        Commands::Videos {
            sort,
            shorts_sort,
            platform,
        } => {
            let (acquirer, window) = session()?;
            let shorts_sort = shorts_sort.unwrap_or_else(|| sort.clone());
            dashboard::run_videos(&acquirer, &window, &sort, &shorts_sort, platform.as_deref())
                .await;
        }
        Commands::Sentiment {
            positive_filter,
            negative_filter,
        } => {
            let (acquirer, window) = session()?;
            dashboard::run_sentiment(&acquirer, &window, &positive_filter, &negative_filter).await;
        }
        Commands::Summary { channel } => {
            let (acquirer, window) = session()?;
            dashboard::run_summary(&acquirer, &window, &catalog, &channel).await;
        }
        Commands::Generate {
            seed,
            comments,
            videos,
            shorts,
        } => dashboard::run_generate(&catalog, seed, comments, videos, shorts)?,
    }

    Ok(())
}

/// Loads the catalog file, or the embedded default when the file is absent.
fn load_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    if config.catalog_path.exists() {
        return Ok(bamti_core::load_catalog(&config.catalog_path)?);
    }
    tracing::debug!(
        path = %config.catalog_path.display(),
        "catalog file not found; using embedded catalog"
    );
    Ok(Catalog::embedded()?)
}
