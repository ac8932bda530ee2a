//! Command-line interface for generating sequences and rendering sheets

use crate::assignment::generator::generate;
use crate::assignment::sequence::write_sequence;
use crate::compositor::context::RenderContext;
use crate::io::configuration::{
    DEFAULT_LAYERS_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_PLAYERS, DEFAULT_SEED, FingerprintConfig,
    TITLE,
};
use crate::io::driver::SequenceDriver;
use crate::io::error::Result;
use crate::io::logging::log_level;
use crate::io::progress::ProgressManager;
use crate::layout::sheet::SheetBuilder;
use crate::model::mask::Mask;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Keyword selecting sequence generation
pub const GENERATE_COMMAND: &str = "generate";

#[derive(Parser, Debug)]
#[command(name = "fingerprints")]
#[command(
    author,
    version,
    about = "Generate unique fingerprint sheets for tabletop games",
    long_about = "Usage forms:\n  fingerprints generate        write a sequence file to stdout\n  fingerprints <FILE>          render one sheet per record\n  fingerprints <ID> <MASK>     render a single sheet"
)]
/// Command-line arguments for the fingerprint generator
// Output toggles are independent user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// `generate`, a sequence file, or a sheet id
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Mask to render when TARGET is a sheet id
    #[arg(value_name = "MASK")]
    pub mask: Option<String>,

    /// Random seed for assignments and decoys
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of players to assign fingerprints to
    #[arg(short, long, default_value_t = DEFAULT_PLAYERS)]
    pub players: usize,

    /// Directory holding one PNG per layer symbol
    #[arg(short, long, default_value = DEFAULT_LAYERS_DIR)]
    pub layers: PathBuf,

    /// Directory receiving rendered sheets
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Only log warnings and errors, and hide progress
    #[arg(short, long)]
    pub quiet: bool,

    /// Log per-sheet details
    #[arg(short, long)]
    pub verbose: bool,

    /// Flip player sheets horizontally for printing on transparent film
    #[arg(short, long)]
    pub mirror: bool,

    /// Skip label rasterization
    #[arg(long)]
    pub no_labels: bool,
}

/// What a command line asks for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Write a sequence file to stdout
    Generate,
    /// Render every record of a sequence file
    Batch(PathBuf),
    /// Render one sheet
    Single {
        /// Sheet identifier
        id: String,
        /// Mask text as given
        mask: String,
    },
}

impl Cli {
    /// Interpret the positional arguments
    pub fn command(&self) -> Command {
        match &self.mask {
            Some(mask) => Command::Single {
                id: self.target.clone(),
                mask: mask.clone(),
            },
            None if self.target == GENERATE_COMMAND => Command::Generate,
            None => Command::Batch(PathBuf::from(&self.target)),
        }
    }

    /// Runtime configuration with the reference values overridden by options
    pub fn config(&self) -> FingerprintConfig {
        FingerprintConfig {
            players: self.players,
            seed: self.seed,
            layers_dir: self.layers.clone(),
            output_dir: self.output.clone(),
            labels: !self.no_labels,
            mirror: self.mirror,
            ..FingerprintConfig::default()
        }
    }

    /// Log verbosity for the selected flags
    pub const fn log_level(&self) -> Level {
        log_level(self.quiet, self.verbose)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs the command selected on the command line
pub struct CommandProcessor {
    cli: Cli,
    config: FingerprintConfig,
}

impl CommandProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let config = cli.config();
        Self { cli, config }
    }

    /// Configuration derived from the arguments
    pub const fn config(&self) -> &FingerprintConfig {
        &self.config
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the sequence cannot
    /// be written, the layers cannot be loaded, or a single sheet fails
    pub fn process(&self) -> Result<()> {
        match self.cli.command() {
            Command::Generate => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                self.generate_sequence(&mut handle)
            }
            Command::Batch(path) => self.render_file(&path),
            Command::Single { id, mask } => self.render_single(&id, &mask).map(|_| ()),
        }
    }

    /// Generate the assignment and write it as a sequence file
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the writer fails
    pub fn generate_sequence<W: Write>(&self, writer: &mut W) -> Result<()> {
        let config = &self.config;
        let assignment = generate(
            &config.universe()?,
            config.subset_size,
            config.players,
            config.seed,
        )?;
        tracing::info!(
            title = TITLE,
            players = assignment.records.len(),
            combinations = assignment.parameters.combinations,
            seed = config.seed,
            "generated assignment"
        );
        write_sequence(&assignment, writer)
    }

    /// Render one sheet per record of the sequence file at `path`
    ///
    /// Failing records are logged and do not stop the batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the layers cannot be
    /// loaded, or the file cannot be read
    pub fn render_file(&self, path: &Path) -> Result<()> {
        self.config.validate()?;
        let context = RenderContext::load(&self.config)?;
        let mut driver = self.driver(&context)?;
        if self.cli.should_show_progress() {
            driver = driver.with_progress(ProgressManager::new());
        }

        let report = driver.run_file(path)?;
        if !report.is_clean() {
            tracing::warn!(
                skipped = report.skipped.len(),
                failed = report.failed.len(),
                "some records were not rendered"
            );
        }
        Ok(())
    }

    /// Render the sheet for a single id and mask
    ///
    /// # Errors
    ///
    /// Returns an error if the mask is malformed, the configuration is
    /// invalid, the layers cannot be loaded, or the sheet cannot be rendered
    pub fn render_single(&self, id: &str, mask: &str) -> Result<PathBuf> {
        let mask: Mask = mask.parse()?;
        self.config.validate()?;
        let context = RenderContext::load(&self.config)?;
        let path = self.driver(&context)?.render_one(id, &mask)?;
        tracing::info!(id, path = %path.display(), "rendered sheet");
        Ok(path)
    }

    fn driver<'a>(&self, context: &'a RenderContext) -> Result<SequenceDriver<'a>> {
        let builder = SheetBuilder::new(
            context.compositor(),
            self.config.geometry()?,
            self.config.sample_plan.clone(),
            self.config.seed,
        )
        .with_mirror(self.config.mirror);
        Ok(SequenceDriver::new(
            builder,
            self.config.output_dir.clone(),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/cli.rs"]
mod tests;
