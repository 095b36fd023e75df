use clap::{Parser, Subcommand};
use media_deck::compose::FsReader;
use media_deck::config::CanvasSpec;
use media_deck::encode::{DocumentEncoder, JsonEncoder};
use media_deck::{compose, config, output, scan};
use std::path::PathBuf;

/// Shared flags for commands that scan the media directory.
#[derive(clap::Args, Clone)]
struct ScanArgs {
    /// Descend into subdirectories instead of scanning only the top level
    #[arg(long)]
    recursive: bool,
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "media-deck")]
#[command(about = "Build paginated media-grid decks from a folder of images and videos")]
#[command(long_about = "\
Build paginated media-grid decks from a folder of images and videos

Your filesystem is the data source. Media files become deck entries in
deterministic order, six to a page, laid out in fixed grids with
aspect-ratio-preserving, centered boxes on a 10 x 7.5 inch canvas.

Recognized formats:

  Images: jpg, jpeg, png, gif, bmp, webp   (PNG gets true header dimensions;
                                            everything else is assumed 16:9)
  Videos: mp4, avi, mov, wmv, flv, webm

The deck is written as a JSON document describing every page: titles,
source paths, and bounding boxes in canvas inches. Downstream tools render
it to slides or PDF.

Run 'media-deck gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Media source directory
    #[arg(long, default_value = "media", global = true)]
    source: PathBuf,

    /// Output deck file
    #[arg(long, default_value = "deck.json", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (scan manifest)
    #[arg(long, default_value = ".media-deck-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the media directory into a manifest
    Scan(ScanArgs),
    /// Run the full pipeline: scan → compose → encode
    Build(ScanArgs),
    /// Validate the media directory without building
    Check(ScanArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan(scan_args) => {
            let deck_config = config::load_config(&cli.source)?;
            let manifest = scan::scan(&cli.source, &deck_config, scan_args.recursive)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest);
        }
        Command::Build(scan_args) => {
            let deck_config = config::load_config(&cli.source)?;
            init_thread_pool(&deck_config.processing);
            let canvas = CanvasSpec::default();

            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source, &deck_config, scan_args.recursive)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest);

            println!("==> Stage 2: Composing pages");
            let reader = FsReader::new(&cli.source);
            let pages = compose::compose(&manifest.items, &canvas, &reader)?;
            output::print_compose_output(&pages);

            println!("==> Stage 3: Encoding deck → {}", cli.output.display());
            JsonEncoder.encode(&pages, &canvas, &cli.output)?;

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check(scan_args) => {
            println!("==> Checking {}", cli.source.display());
            let deck_config = config::load_config(&cli.source)?;
            let manifest = scan::scan(&cli.source, &deck_config, scan_args.recursive)?;
            output::print_scan_output(&manifest);
            println!("==> Media directory is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
