use anyhow::Result;
use clap::Parser;
use gh_assets::{AssetLister, ListOptions, OutputMode};
use log::{debug, info};
use std::io;

/// gh-assets - list the assets of a release
///
/// Reads a release document (as returned by the GitHub releases API) from
/// standard input and prints one `id:name` line per asset.
///
/// Examples:
///   curl -s https://api.github.com/repos/owner/repo/releases/latest | gh-assets
///   gh-assets --ids-only < release.json
#[derive(Parser, Debug)]
#[command(author, version = env!("GH_ASSETS_VERSION"), about)]
struct Cli {
    /// Print only the asset ids
    #[arg(short = 'i', long = "ids-only")]
    ids_only: bool,

    /// Print nothing, successfully, when the input does not look like a JSON object
    #[arg(short = 'l', long = "lenient")]
    lenient: bool,

    /// Extra arguments, accepted and ignored
    #[arg(value_name = "ARGS", hide = true)]
    args: Vec<String>,
}

impl Cli {
    fn options(&self) -> ListOptions {
        ListOptions {
            mode: if self.ids_only {
                OutputMode::IdsOnly
            } else {
                OutputMode::Names
            },
            lenient: self.lenient,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if !cli.args.is_empty() {
        debug!("Ignoring positional arguments: {:?}", cli.args);
    }

    let lister = AssetLister::new(cli.options());
    let listing = lister.run(io::stdin().lock(), io::stdout().lock())?;

    if listing.rejected {
        info!("Input did not look like a JSON object; nothing printed");
    } else {
        info!("Printed {} asset(s)", listing.lines);
    }
    Ok(())
}
