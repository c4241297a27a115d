use anyhow::{Context, Result};
use clap::Parser;
use kdtree_search::core::vector::loader;
use kdtree_search::{api, Config, KdTreeService};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// --- CLI Configuration ---
#[derive(Parser, Debug)]
#[clap(author, version, about = "Exact nearest-neighbor search over a kd-tree", long_about = None)]
struct Cli {
    /// TOML configuration file. Missing files fall back to defaults.
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides `log_level` from the configuration.
    #[clap(long, global = true)]
    log_level: Option<String>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Prints the vector in the data file nearest to a query.
    Nearest {
        /// Vector file, one vector per line.
        #[clap(long)]
        data: Option<PathBuf>,
        /// Query vector in the same format as a data line, e.g. "1.0|0.9|1.1".
        #[clap(long)]
        query: String,
    },
    /// Builds the tree from a data file and prints its shape.
    Print {
        #[clap(long)]
        data: Option<PathBuf>,
    },
    /// Runs the HTTP server.
    Serve {
        /// Vectors to preload. Without them only requests carrying their own vectors are answered.
        #[clap(long)]
        data: Option<PathBuf>,
        #[clap(long)]
        listen: Option<String>,
        #[clap(long)]
        assets: Option<PathBuf>,
    },
}

fn data_path<'a>(flag: Option<&'a Path>, config: &'a Config) -> Result<&'a Path> {
    flag.or(config.data_path.as_deref())
        .context("no data file given: pass --data or set data_path in the configuration")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level()?)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Nearest { data, query } => {
            let path = data_path(data.as_deref(), &config)?;
            let service = KdTreeService::from_path(path, config.field_separator)
                .with_context(|| format!("failed to build kd-tree from '{}'", path.display()))?;
            let query = loader::parse_line(&query, config.field_separator, 1).context("invalid --query")?;

            match service.nearest(&query)? {
                Some(nearest) => println!("{}", loader::format_line(&nearest, config.field_separator)),
                None => println!("no result"),
            }
        }
        Commands::Print { data } => {
            let path = data_path(data.as_deref(), &config)?;
            let service = KdTreeService::from_path(path, config.field_separator)
                .with_context(|| format!("failed to build kd-tree from '{}'", path.display()))?;
            if let Some(tree) = service.tree() {
                print!("{}", tree);
            }
        }
        Commands::Serve { data, listen, assets } => {
            if let Some(listen) = listen {
                config.listen_addr = listen;
            }
            if let Some(assets) = assets {
                config.assets_dir = assets;
            }
            if data.is_some() {
                config.data_path = data;
            }
            config.validate()?;

            let service = match config.data_path.as_deref() {
                Some(path) => KdTreeService::from_path(path, config.field_separator)
                    .with_context(|| format!("failed to build kd-tree from '{}'", path.display()))?,
                None => KdTreeService::empty(),
            };

            api::serve(&config, Arc::new(service)).await?;
        }
    }

    Ok(())
}
