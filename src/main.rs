use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
mod crop;
mod destinations;
mod fetch;
mod utils;

const DEFAULT_IMAGE_DIR: &str = "ios/ParkAtBalboaPark/Resources/DestinationImages";

/// Prepare destination photographs for the app bundle
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download one Wikipedia photograph per catalog destination
    Fetch {
        /// Destination catalog (JSON array with slug and name)
        #[arg(short, long, default_value = "data/raw/destinations.json")]
        catalog: PathBuf,

        /// Directory where {slug}.jpg files are written
        #[arg(short, long, default_value = DEFAULT_IMAGE_DIR)]
        output: PathBuf,

        /// Amount of destinations to fetch
        #[arg(short, long, default_value = "all")]
        amount: Option<String>,

        /// Width requested from the Wikimedia thumbnail service
        #[arg(long, default_value_t = 800)]
        width: u32,

        /// Pause between destinations that hit the network, in milliseconds
        #[arg(long, default_value_t = 300)]
        delay_ms: u64,
    },
    /// Resize and crop downloaded photographs into banners
    Crop {
        /// Directory holding the downloaded {slug}.jpg files
        #[arg(short, long, default_value = DEFAULT_IMAGE_DIR)]
        dir: PathBuf,

        /// Width of the output banners
        #[arg(long, default_value_t = 800)]
        width: u32,

        /// Banner width divided by height
        #[arg(long, default_value_t = 3.0)]
        aspect_ratio: f64,

        /// JPEG quality for rewritten files
        #[arg(short, long, default_value_t = 85)]
        quality: u8,
    },
}

async fn run_fetch(
    catalog: PathBuf,
    output: PathBuf,
    amount: Option<String>,
    width: u32,
    delay_ms: u64,
) -> io::Result<()> {
    let destinations = destinations::load_catalog(&catalog)?;
    let destinations = destinations::limit_destinations(destinations, amount.as_deref())?;

    utils::files::ensure_directories(&output)?;

    println!("Catalog: {}", catalog.display());
    println!("Output: {}", output.display());
    println!("Fetching images for {} destinations", destinations.len());

    let titles = destinations::titles::title_map();
    let source = utils::http::WikipediaClient::new(width)?;
    let options = fetch::FetchOptions {
        output_dir: &output,
        titles: &titles,
        delay: Duration::from_millis(delay_ms),
    };

    let pb = utils::new_progress_bar(destinations.len() as u64);
    let summary = fetch::fetch_destination_images(
        &source,
        &destinations,
        &options,
        &pb,
        &mut io::stdout(),
    )
    .await?;
    summary.print();

    Ok(())
}

fn run_crop(dir: PathBuf, width: u32, aspect_ratio: f64, quality: u8) -> io::Result<()> {
    if !dir.is_dir() {
        println!("Image directory not found: {}", dir.display());
        return Ok(());
    }

    let settings = crop::CropSettings::from_aspect_ratio(width, aspect_ratio, quality)?;
    println!(
        "Processing images in {} → {}x{}px ({}:1)",
        dir.display(),
        settings.width,
        settings.height,
        aspect_ratio
    );

    let positions = destinations::crop_positions::crop_positions();
    let pb = utils::new_progress_bar(0);
    let summary = crop::crop_directory(&dir, &positions, &settings, &pb, &mut io::stdout())?;
    summary.print(&settings);

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let result = match args.command {
        Commands::Fetch {
            catalog,
            output,
            amount,
            width,
            delay_ms,
        } => run_fetch(catalog, output, amount, width, delay_ms).await,
        Commands::Crop {
            dir,
            width,
            aspect_ratio,
            quality,
        } => run_crop(dir, width, aspect_ratio, quality),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn crop_defaults() {
        let args = Args::parse_from(["dest-images", "crop"]);
        match args.command {
            Commands::Crop {
                dir,
                width,
                aspect_ratio,
                quality,
            } => {
                assert_eq!(dir, PathBuf::from(DEFAULT_IMAGE_DIR));
                assert_eq!(width, 800);
                assert_eq!(aspect_ratio, 3.0);
                assert_eq!(quality, 85);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn fetch_flags() {
        let args = Args::parse_from([
            "dest-images",
            "fetch",
            "--catalog",
            "catalog.json",
            "--amount",
            "5",
            "--delay-ms",
            "0",
        ]);
        match args.command {
            Commands::Fetch {
                catalog,
                amount,
                delay_ms,
                width,
                ..
            } => {
                assert_eq!(catalog, PathBuf::from("catalog.json"));
                assert_eq!(amount.as_deref(), Some("5"));
                assert_eq!(delay_ms, 0);
                assert_eq!(width, 800);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
