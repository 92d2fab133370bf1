mod commands;
mod output;

use almanac_core::model::PageRange;
use almanac_core::parsing::record::YearBinding;
use almanac_core::parsing::ParseOptions;
use clap::{Args, Parser, Subcommand};
use commands::export::ExportFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Turn scanned history-of-invention pages into records and a card site"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Page range and end-of-input handling shared by `parse` and `export`.
#[derive(Args)]
struct BookArgs {
    /// Directory of OCR output (page0001.txt, page0002.txt, ...)
    #[arg(long, value_name = "DIR")]
    text_dir: PathBuf,

    /// Pages to read, e.g. "2-755" or "7"
    #[arg(long)]
    pages: PageRange,

    /// Keep the record still open at end of input
    #[arg(long)]
    keep_trailing: bool,

    /// Drop text after the last blank line instead of treating it as a paragraph
    #[arg(long)]
    drop_tail: bool,

    /// Stamp each record with the year seen before its own title
    #[arg(long)]
    year_at_title: bool,
}

impl BookArgs {
    fn options(&self) -> ParseOptions {
        ParseOptions {
            flush_trailing_paragraph: !self.drop_tail,
            flush_trailing_record: self.keep_trailing,
            year_binding: if self.year_at_title {
                YearBinding::AtTitle
            } else {
                YearBinding::AtFlush
            },
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Chop the running header off scanned page images
    Crop {
        /// Directory with thumb0001.png (or .jpg) scans
        #[arg(long, value_name = "DIR")]
        in_dir: PathBuf,

        /// Directory for cropped page0001.jpg images
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,

        /// Pages to crop, e.g. "2-755"
        #[arg(long)]
        pages: PageRange,
    },
    /// OCR page images into text files with tesseract
    Ocr {
        /// Directory with page0001.png (or .jpg) images
        #[arg(long, value_name = "DIR")]
        images: PathBuf,

        /// Directory for page0001.txt output
        #[arg(long, value_name = "DIR")]
        text: PathBuf,

        /// Pages to OCR, e.g. "2-755"
        #[arg(long)]
        pages: PageRange,
    },
    /// Parse OCR text into invention records
    Parse {
        #[command(flatten)]
        book: BookArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write parsed output to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Parse OCR text and publish the records
    Export {
        #[command(flatten)]
        book: BookArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file (csv, index) or directory (markdown)
        #[arg(long, value_name = "PATH")]
        out: PathBuf,

        /// Estimate inventors and locations with an entity tagger
        #[arg(long, requires = "tagger")]
        estimate: bool,

        /// Tagger command; the text file path is appended as the last argument
        #[arg(long, value_name = "CMD", num_args = 1.., allow_hyphen_values = true)]
        tagger: Vec<String>,
    },
    /// Convert illustrations into fixed-size card thumbnails
    Thumbnails {
        /// Directory of "<index> <name>.<ext>" illustrations
        #[arg(long, value_name = "DIR")]
        in_dir: PathBuf,

        /// Directory for <name>.jpg thumbnails
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,
    },
    /// Print an image-downloader config for every ID in a CSV
    DownloadConf {
        /// CSV file with an ID column
        csv_file: PathBuf,
    },
    /// Generate the static card site
    Site {
        /// Predefined site: cards or asimov
        #[arg(short, long, value_name = "NAME", conflicts_with = "config")]
        preset: Option<String>,

        /// Custom JSON site config
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output directory
        #[arg(short, long = "out-dir", value_name = "DIR")]
        out_dir: PathBuf,

        /// Retake every card screenshot
        #[arg(short, long = "force-screenshots", conflicts_with = "no_screenshots")]
        force_screenshots: bool,

        /// Skip card screenshots
        #[arg(short, long = "no-screenshots")]
        no_screenshots: bool,

        /// Catalog TSV (overrides the config's catalog)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// Validate a catalog TSV
    SiteCheck {
        /// Path to the catalog TSV
        tsv_file: PathBuf,
    },
    /// Inspect predefined site configurations
    Sites {
        #[command(subcommand)]
        action: SitesAction,
    },
}

#[derive(Subcommand)]
enum SitesAction {
    /// List predefined sites
    List,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Crop {
            in_dir,
            out_dir,
            pages,
        } => commands::images::crop(&in_dir, &out_dir, pages),
        Commands::Ocr {
            images,
            text,
            pages,
        } => commands::images::ocr(&images, &text, pages),
        Commands::Parse { book, output, out } => {
            commands::parse::run(&book.text_dir, book.pages, &book.options(), &output, out)
        }
        Commands::Export {
            book,
            format,
            out,
            estimate,
            tagger,
        } => commands::export::run(
            &book.text_dir,
            book.pages,
            &book.options(),
            format,
            &out,
            estimate.then_some(tagger.as_slice()),
        ),
        Commands::Thumbnails { in_dir, out_dir } => commands::images::thumbnails(&in_dir, &out_dir),
        Commands::DownloadConf { csv_file } => commands::download_conf::run(&csv_file),
        Commands::Site {
            preset,
            config,
            out_dir,
            force_screenshots,
            no_screenshots,
            catalog,
        } => commands::site::run(
            preset,
            config,
            &out_dir,
            force_screenshots,
            no_screenshots,
            catalog,
        ),
        Commands::SiteCheck { tsv_file } => commands::site::check(&tsv_file),
        Commands::Sites { action } => match action {
            SitesAction::List => commands::site::list(),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
