use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pdf_compress::{Compressor, GhostscriptCompressor, NativeCompressor, QualityTier};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "pdft", about = "PDF tools CLI", version)]
struct Cli {
    /// Log progress and skipped inputs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a PDF with one image per page
    Images {
        /// Input images, in page order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Scale small images up to fill the usable area
        #[arg(long)]
        fit: bool,

        /// Anchor inside the usable area (e.g. center, top-left, bottom)
        #[arg(long, default_value = "center")]
        position: String,

        /// Page orientation
        #[arg(long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// Paper size
        #[arg(long, default_value = "a4", value_enum)]
        paper: PaperArg,

        /// Margin in mm (uniform on all sides)
        #[arg(long, default_value_t = pdf_images::DEFAULT_MARGIN_MM)]
        margin: f32,

        /// Resolution used to size images on the page
        #[arg(long, default_value_t = pdf_images::DEFAULT_DPI)]
        dpi: f32,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Read layout options from a JSON file instead of the flags above
        #[arg(long, conflicts_with_all = ["fit", "position", "orientation", "paper", "margin", "dpi", "title"])]
        options: Option<PathBuf>,

        /// Write the layout options used to a JSON file
        #[arg(long)]
        save_options: Option<PathBuf>,
    },

    /// Shrink a PDF
    Compress {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Quality from 1 to 100; lower is smaller
        #[arg(long, default_value_t = pdf_compress::DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
        quality: u8,

        /// Recompress streams in-process instead of running Ghostscript
        #[arg(long)]
        native: bool,

        /// Ghostscript executable
        #[arg(long, default_value = "gs")]
        gs: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for pdf_images::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl From<OrientationArg> for pdf_images::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Images {
            input,
            output,
            fit,
            position,
            orientation,
            paper,
            margin,
            dpi,
            title,
            options,
            save_options,
        } => {
            let options = match options {
                Some(path) => pdf_images::LayoutOptions::load(&path)
                    .await
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => {
                    let mut options = pdf_images::LayoutOptions {
                        paper: paper.into(),
                        margins: pdf_images::PageMargins::uniform(margin),
                        dpi,
                        policy: pdf_images::PlacementPolicy {
                            fit,
                            position: pdf_images::Anchor::parse(&position),
                            orientation: orientation.into(),
                        },
                        ..Default::default()
                    };
                    if let Some(title) = title {
                        options.title = title;
                    }
                    options
                }
            };

            if let Some(path) = save_options {
                options.save(&path).await?;
                println!("Saved options → {}", path.display());
            }

            log::debug!("Layout options: {:?}", options);
            let sources = input
                .into_iter()
                .map(pdf_images::ImageSource::from_path)
                .collect();
            let document = pdf_images::convert_images(sources, options).await?;
            let report = document.save(&output).await?;

            for skipped in &report.skipped {
                eprintln!("Skipped {}: {}", skipped.source_name, skipped.reason);
            }
            println!(
                "Generated {} page(s) → {}",
                report.pages.len(),
                output.display()
            );
        }

        Commands::Compress {
            input,
            output,
            quality,
            native,
            gs,
        } => {
            let compressor: Arc<dyn Compressor> = if native {
                Arc::new(NativeCompressor)
            } else {
                Arc::new(GhostscriptCompressor::new(gs))
            };
            let tier = QualityTier::from_quality(quality);

            let data = tokio::fs::read(&input)
                .await
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let before = data.len();
            let compressed = pdf_compress::compress_async(compressor, data, tier).await?;
            tokio::fs::write(&output, &compressed).await?;

            println!(
                "Compressed {} → {} ({} → {} bytes, {:?})",
                input.display(),
                output.display(),
                before,
                compressed.len(),
                tier
            );
        }
    }

    Ok(())
}
