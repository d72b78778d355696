//! Command-line interface for rendering, listening for capture events and inspecting seeds

use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_GRID_SIZE, DEFAULT_LOG_LEVEL, DEFAULT_SHUFFLE_BIAS,
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, LOGO_SUFFIX, LogoConfig, SILHOUETTE_SUFFIX,
    SOURCE_EXTENSIONS,
};
use crate::io::error::{LogoError, Result, invalid_parameter};
use crate::io::events::EventReader;
use crate::io::image::{export_logo, export_png};
use crate::io::progress::{ProgressManager, RenderStage};
use crate::mosaic::composer::{MosaicComposer, MosaicState};
use crate::mosaic::session::LogoSession;
use crate::render::palette::Palette;
use crate::seed::hash::{MAX_SEED, derive_seed, derive_seed_str};
use crate::seed::parameters::extract_parameters;
use clap::{Args, Parser, Subcommand};
use log::{LevelFilter, info, warn};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "image2logo")]
#[command(
    author,
    version,
    about = "Render four-fold generative logos seeded by captured photos"
)]
/// Command-line arguments for the logo generator
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Generator and display settings
    #[command(flatten)]
    pub style: StyleArgs,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: LevelFilter,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Render logos for a file, a directory of photos, a text token or a seed
    Render(RenderArgs),
    /// Re-render the display canvas for every detected event on a JSON-lines stream
    Listen(ListenArgs),
    /// Print the seed and parameters for a source
    Inspect(SeedSource),
}

/// Settings shared by every operation
#[derive(Args, Debug, Clone)]
pub struct StyleArgs {
    /// Comma-separated palette of exactly three hex colors
    #[arg(long, global = true)]
    pub palette: Option<Palette>,

    /// Tiles per side of the offscreen buffer
    #[arg(long, global = true, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid: usize,

    /// Canvas height driving the offscreen buffer size
    #[arg(long, global = true, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub canvas_height: u32,

    /// Display canvas width in pixels
    #[arg(long, global = true, default_value_t = DEFAULT_WINDOW_WIDTH)]
    pub window_width: u32,

    /// Display canvas height in pixels
    #[arg(long, global = true, default_value_t = DEFAULT_WINDOW_HEIGHT)]
    pub window_height: u32,

    /// Re-derive the palette order from every seed
    #[arg(long, global = true)]
    pub reshuffle_per_seed: bool,
}

impl StyleArgs {
    /// Build and validate the generator configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any setting is out of range.
    pub fn to_config(&self) -> Result<LogoConfig> {
        LogoConfig {
            palette: self
                .palette
                .unwrap_or_default()
                .shuffled(DEFAULT_SHUFFLE_BIAS),
            grid_size: self.grid,
            canvas_height: self.canvas_height,
            window: (self.window_width, self.window_height),
            reshuffle_per_seed: self.reshuffle_per_seed,
            ..LogoConfig::default()
        }
        .validated()
    }
}

/// Where a seed comes from; exactly one must be given
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SeedSource {
    /// Photo file, or directory of photos, hashed byte by byte
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Text token hashed as the capture backend's payload
    #[arg(short, long)]
    pub text: Option<String>,

    /// Literal seed, bypassing the hash
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Draw a random 53-bit seed
    #[arg(short, long)]
    pub random: bool,
}

/// Arguments for the `render` operation
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Seed source
    #[command(flatten)]
    pub source: SeedSource,

    /// Output directory (defaults to the photo's directory, or the current one)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the full display canvas
    #[arg(short, long)]
    pub display: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl RenderArgs {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Arguments for the `listen` operation
#[derive(Args, Debug, Clone)]
pub struct ListenArgs {
    /// JSON-lines event file (reads standard input when omitted)
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Display canvas written after every regeneration
    #[arg(short, long, default_value = "logo_display.png")]
    pub output: PathBuf,
}

/// Run the parsed command line
///
/// # Errors
///
/// Returns an error if configuration, rendering or export fails.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.style.to_config()?;
    let composer = MosaicComposer::new(config)?;

    match cli.command {
        Command::Render(args) => FileProcessor::new(args, composer).process(),
        Command::Listen(args) => listen(&args, composer),
        Command::Inspect(source) => inspect(&source),
    }
}

/// Resolve a non-file seed source
///
/// Returns `None` when the source is a path.
pub fn literal_seed(source: &SeedSource) -> Option<u64> {
    if let Some(seed) = source.seed {
        Some(seed)
    } else if let Some(text) = &source.text {
        Some(derive_seed_str(text))
    } else if source.random {
        Some(rand::random::<u64>() & MAX_SEED)
    } else {
        None
    }
}

// Allow print for the inspection report itself
#[allow(clippy::print_stdout)]
fn inspect(source: &SeedSource) -> Result<()> {
    let seed = match (literal_seed(source), &source.target) {
        (Some(seed), _) => seed,
        (None, Some(path)) => seed_from_file(path)?,
        (None, None) => return Err(invalid_parameter("source", &"", &"no seed source given")),
    };

    let params = extract_parameters(seed);
    println!("seed: {seed}");
    println!("tile selectors: {:?}", params.tile_selectors);
    println!("ellipse selector: {}", params.ellipse_selector);
    println!("triangle rotation: {}", params.triangle_rotation);
    println!("edge triangle rotation: {}", params.edge_triangle_rotation);
    println!("mirrored triangle rotation: {}", params.mirrored_triangle_rotation);
    println!("arc rotation: {}", params.arc_rotation);
    println!("shuffle bias: {}", params.shuffle_bias);
    Ok(())
}

fn listen(args: &ListenArgs, composer: MosaicComposer) -> Result<()> {
    let mut session = LogoSession::new(composer)?;
    export_png(&session.current().logo.canvas, &args.output)?;

    let output = args.output.clone();
    let on_render = move |state: &MosaicState| export_png(&state.logo.canvas, &output);

    let summary = if let Some(path) = &args.events {
        let file = std::fs::File::open(path).map_err(|e| LogoError::FileSystem {
            path: path.clone(),
            operation: "open events",
            source: e,
        })?;
        session.run(EventReader::new(BufReader::new(file)), on_render)?
    } else {
        session.run(EventReader::new(std::io::stdin().lock()), on_render)?
    };

    info!(
        "listen finished: {} regenerated, {} ignored, {} malformed, {} failed",
        summary.regenerated, summary.ignored, summary.malformed, summary.failed
    );
    Ok(())
}

/// Read a file and hash its bytes into a seed
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn seed_from_file(path: &Path) -> Result<u64> {
    let bytes = std::fs::read(path).map_err(|e| LogoError::FileSystem {
        path: path.to_path_buf(),
        operation: "read source",
        source: e,
    })?;
    Ok(derive_seed(&bytes))
}

/// Orchestrates batch rendering of photo files with progress tracking
pub struct FileProcessor {
    args: RenderArgs,
    composer: MosaicComposer,
    progress_manager: Option<ProgressManager>,
}

/// Path of one directory listing entry, naming the directory when the entry is unreadable
///
/// # Errors
///
/// Returns a file system error for `directory` if the entry could not be read.
pub fn entry_path(entry: std::io::Result<std::fs::DirEntry>, directory: &Path) -> Result<PathBuf> {
    entry
        .map(|entry| entry.path())
        .map_err(|source| LogoError::FileSystem {
            path: directory.to_path_buf(),
            operation: "read directory entry",
            source,
        })
}

impl FileProcessor {
    /// Create a new file processor
    pub fn new(args: RenderArgs, composer: MosaicComposer) -> Self {
        let progress_manager = args.should_show_progress().then(ProgressManager::new);

        Self {
            args,
            composer,
            progress_manager,
        }
    }

    /// Render according to the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, composition or export fails
    pub fn process(&mut self) -> Result<()> {
        if let Some(seed) = literal_seed(&self.args.source) {
            return self.process_seed(seed);
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn process_seed(&self, seed: u64) -> Result<()> {
        let state = self.composer.compose_seed(seed)?;
        let directory = self.args.output.clone().unwrap_or_else(|| PathBuf::from("."));
        let exported = export_logo(&state, &directory, &format!("seed_{seed}"), self.args.display)?;
        info!("seed {seed} -> {}", exported.logo.display());
        Ok(())
    }

    /// Files the batch will render, in sorted order
    ///
    /// # Errors
    ///
    /// Returns an error if the target is missing, has an unsupported extension,
    /// or the directory cannot be read
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let Some(target) = &self.args.source.target else {
            return Ok(vec![]);
        };

        if target.is_file() {
            if !is_source_image(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("expected one of {}", SOURCE_EXTENSIONS.join(", ")),
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(target).map_err(|e| LogoError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            for entry in entries {
                let path = entry_path(entry, target)?;
                if is_source_image(&path) && !is_generated(&path) && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.args.skip_existing() {
            return true;
        }

        let output_path = self.output_directory(input_path).join(format!(
            "{}{LOGO_SUFFIX}.png",
            Self::file_stem(input_path)
        ));
        if output_path.exists() {
            warn!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
            pm.enter_stage(index, RenderStage::Hashing);
        }
        let seed = seed_from_file(input_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.enter_stage(index, RenderStage::Composing);
        }
        let state = self.composer.compose_seed(seed)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.enter_stage(index, RenderStage::Exporting);
        }
        let exported = export_logo(
            &state,
            &self.output_directory(input_path),
            &Self::file_stem(input_path),
            self.args.display,
        )?;
        info!(
            "{} (seed {seed}) -> {}",
            input_path.display(),
            exported.logo.display()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    fn output_directory(&self, input_path: &Path) -> PathBuf {
        self.args.output.clone().unwrap_or_else(|| {
            input_path
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        })
    }

    fn file_stem(input_path: &Path) -> String {
        input_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

fn is_source_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

// Earlier outputs in the same directory must not be re-hashed as photos
fn is_generated(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| {
            stem.ends_with(LOGO_SUFFIX)
                || stem.ends_with(SILHOUETTE_SUFFIX)
                || stem.ends_with("_display")
        })
}
