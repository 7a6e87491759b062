use anyhow::{Context, Result, bail};
use clap::{Args, Parser, ValueEnum};
use slide_batch_runtime::{BatchCommand, BatchUpdate, DocumentOutcome, jobs_for_output_dir};
use slide_impose::source::{PdfiumSource, init_pdfium};
use slide_impose::{PageSource, ProcessingConfig};
use std::path::{Path, PathBuf};

mod logger;

#[derive(Parser)]
#[command(
    name = "slidep",
    about = "Pack slide decks onto printable handout sheets",
    version
)]
struct Cli {
    /// Input PDF file(s)
    #[arg(required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Directory for the output PDFs (same file names as the inputs)
    #[arg(short, long, required_unless_present = "stats_only")]
    output_dir: Option<PathBuf>,

    #[command(flatten)]
    layout: LayoutArgs,

    /// Write the effective configuration to this JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Print how each input would be laid out, without rendering
    #[arg(long)]
    stats_only: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Args)]
struct LayoutArgs {
    /// Load settings from a JSON file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source pages per output sheet
    #[arg(short = 'n', long)]
    pages_per_sheet: Option<usize>,

    /// Include the first (cover) page
    #[arg(long)]
    keep_first_page: bool,

    /// Do not print a title line
    #[arg(long)]
    no_title: bool,

    /// Print the title line on the first sheet only
    #[arg(long)]
    title_first_sheet_only: bool,

    /// Keep original colors instead of inverting them
    #[arg(long)]
    no_invert: bool,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Output orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Margin in mm
    #[arg(long)]
    margin: Option<f32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for slide_impose::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for slide_impose::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl LayoutArgs {
    /// Config file (or defaults) with command-line overrides applied
    async fn resolve(&self) -> Result<ProcessingConfig> {
        let mut config = match &self.config {
            Some(path) => ProcessingConfig::load(path)
                .await
                .with_context(|| format!("loading {}", path.display()))?,
            None => ProcessingConfig::default(),
        };

        if let Some(pages_per_sheet) = self.pages_per_sheet {
            config.pages_per_sheet = pages_per_sheet;
        }
        if self.keep_first_page {
            config.skip_first_page = false;
        }
        if self.no_title {
            config.add_title = false;
        }
        if self.title_first_sheet_only {
            config.title_on_first_sheet_only = true;
        }
        if self.no_invert {
            config.invert_colors = false;
        }
        if let Some(paper) = self.paper {
            config.paper_size = paper.into();
        }
        if let Some(orientation) = self.orientation {
            config.orientation = orientation.into();
        }
        if let Some(margin) = self.margin {
            config.margin_mm = margin;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::new(logger::level_for(cli.verbose)).init()?;

    let config = cli.layout.resolve().await?;
    if let Some(path) = &cli.save_config {
        config.save(path).await?;
        println!("Saved configuration → {}", path.display());
    }

    if cli.stats_only {
        for input in &cli.input {
            print_statistics(input, &config).await?;
        }
        return Ok(());
    }

    let Some(output_dir) = cli.output_dir else {
        bail!("--output-dir is required");
    };
    tokio::fs::create_dir_all(&output_dir)
        .await
        .with_context(|| format!("creating {}", output_dir.display()))?;

    run_batch(&cli.input, &output_dir, config).await
}

async fn print_statistics(input: &Path, config: &ProcessingConfig) -> Result<()> {
    let page_count = count_pages(input).await?;
    let stats = slide_impose::calculate_statistics(page_count, config)?;

    println!("{}:", input.display());
    println!("  Source pages: {}", stats.source_pages);
    println!("  Selected pages: {}", stats.selected_pages);
    println!("  Pages per sheet: {}", stats.pages_per_sheet);
    println!("  Output sheets: {}", stats.output_sheets);
    println!("  Pages on last sheet: {}", stats.pages_on_last_sheet);
    Ok(())
}

async fn run_batch(input: &[PathBuf], output_dir: &Path, config: ProcessingConfig) -> Result<()> {
    let jobs = jobs_for_output_dir(input, output_dir);
    let mut handle = slide_batch_runtime::spawn_worker();
    handle.submit(BatchCommand::Process { jobs, config })?;

    let mut result = None;
    while let Some(update) = handle.next_update().await {
        match update {
            BatchUpdate::DocumentStarted { index, total, name } => {
                println!("Processing file {}/{}: {}", index, total, name);
            }
            BatchUpdate::PageProgress { current, total, .. } => {
                println!("  page {}/{}", current, total);
            }
            BatchUpdate::DocumentFinished { name, outcome } => match outcome {
                DocumentOutcome::Success { sheets } => {
                    println!("  {} → {} sheets", name, sheets);
                }
                DocumentOutcome::Failed { reason } => {
                    println!("  {} failed: {}", name, reason);
                }
            },
            BatchUpdate::Error { message } => {
                log::error!("{}", message);
            }
            BatchUpdate::BatchComplete { result: batch } => {
                result = Some(batch);
                break;
            }
        }
    }
    handle.shutdown().await;

    let Some(result) = result else {
        bail!("Batch worker stopped before finishing");
    };

    if result.outcomes.len() < input.len() {
        bail!(
            "Processed {} of {} files",
            result.outcomes.len(),
            input.len()
        );
    }

    let failures = result.failures();
    if failures.is_empty() {
        println!("All files processed successfully");
        return Ok(());
    }

    println!("Errors in processing:");
    for (name, reason) in &failures {
        println!("  {}: {}", name, reason);
    }
    bail!("{} of {} files failed", failures.len(), input.len())
}

async fn count_pages(path: &Path) -> Result<usize> {
    let path = path.to_owned();
    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;

    let page_count = tokio::task::spawn_blocking(move || {
        let pdfium = init_pdfium()?;
        let source = PdfiumSource::open(&pdfium, bytes, &path)?;
        Ok::<_, slide_impose::ImposeError>(source.page_count())
    })
    .await??;

    Ok(page_count)
}
