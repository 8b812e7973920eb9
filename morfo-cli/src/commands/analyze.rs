//! Analyze command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use morfo_core::{
    load_dictionary, text, Analyzer, AnalyzedWord, MorphologyRules, RootDictionary,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{
    JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter, WordReport,
};
use crate::progress::ProgressReporter;
use crate::rules_source::RulesSource;
use crate::verify::Headwords;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Words to analyze
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Root dictionary (JSON, or plain text with one root per line)
    #[arg(short, long, value_name = "FILE", env = "MORFO_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Morphology rules file (default: built-in Esperanto rules)
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Headword list to check analyses against
    #[arg(long, value_name = "FILE")]
    pub headwords: Option<PathBuf>,

    /// Only report words whose analysis is not confirmed by a headword
    #[arg(long)]
    pub verify: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Analyze in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel analysis
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `word = breakdown` line per word
    Text,
    /// JSON array of analyses
    Json,
    /// Markdown table
    Markdown,
}

/// Settings after merging flags over the configuration file
#[derive(Debug)]
struct Settings {
    dictionary: PathBuf,
    rules: RulesSource,
    headwords: Option<PathBuf>,
    format: OutputFormat,
    pretty: bool,
    threads: Option<usize>,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting analysis");
        log::debug!("Arguments: {:?}", self);

        let settings = self.settings()?;
        if self.verify && settings.headwords.is_none() {
            return Err(CliError::ConfigError("--verify requires --headwords".to_string()).into());
        }
        if self.words.is_empty() && self.input.is_empty() {
            anyhow::bail!("No input given: pass words or --input FILE");
        }

        log::info!("Rules: {}", settings.rules.display_name());
        let rules = settings.rules.load()?;

        if !settings.dictionary.exists() {
            return Err(CliError::FileNotFound(settings.dictionary.display().to_string()).into());
        }
        let dictionary = load_dictionary(&settings.dictionary)
            .map_err(|e| CliError::DictionaryError(e.to_string()))?;
        log::info!(
            "Loaded {} roots from {}",
            dictionary.len(),
            settings.dictionary.display()
        );

        let headwords = settings
            .headwords
            .as_deref()
            .map(Headwords::load)
            .transpose()?;

        let analyzer = Analyzer::shared(rules, Arc::new(dictionary));
        let pool = if self.parallel {
            Some(build_pool(settings.threads)?)
        } else {
            None
        };

        let mut formatter = self.create_formatter(settings.format, settings.pretty)?;
        let mut session = Session {
            analyzer: &analyzer,
            pool: pool.as_ref(),
            headwords: headwords.as_ref(),
            verify_only: self.verify,
            formatter: formatter.as_mut(),
            analyzed: 0,
        };

        let arg_tokens: Vec<String> = self.words.iter().flat_map(|w| text::words(w)).collect();
        session.run(&arg_tokens)?;

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            log::info!("Found {} files to analyze", files.len());

            let mut progress = ProgressReporter::new(self.quiet);
            progress.init_files(files.len() as u64);

            for path in &files {
                let content = FileReader::read_text(path)?;
                let tokens = text::words(&content);
                session.run(&tokens)?;
                progress.file_completed(&file_name(path), tokens.len());
            }
            progress.finish();
        }

        let analyzed = session.analyzed;
        formatter.finish()?;
        log::info!("Analyzed {} words", analyzed);
        Ok(())
    }

    /// Merge command-line flags over the configuration file
    fn settings(&self) -> Result<Settings> {
        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let dictionary = self
            .dictionary
            .clone()
            .or(config.analysis.dictionary)
            .ok_or_else(|| {
                CliError::ConfigError(
                    "no root dictionary given (use --dictionary or [analysis] dictionary)"
                        .to_string(),
                )
            })?;

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.format, true).map_err(|_| {
                CliError::ConfigError(format!("unknown output format '{}'", config.output.format))
            })?,
        };

        let threads = self
            .threads
            .or((config.performance.threads > 0).then_some(config.performance.threads));

        Ok(Settings {
            dictionary,
            rules: RulesSource::from_path(self.rules.clone().or(config.analysis.rules)),
            headwords: self.headwords.clone().or(config.analysis.headwords),
            format,
            pretty: config.output.pretty,
            threads,
        })
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run from tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Analysis state shared by every batch of tokens
struct Session<'a> {
    analyzer: &'a Analyzer,
    pool: Option<&'a rayon::ThreadPool>,
    headwords: Option<&'a Headwords>,
    verify_only: bool,
    formatter: &'a mut dyn OutputFormatter,
    analyzed: usize,
}

impl Session<'_> {
    fn run(&mut self, tokens: &[String]) -> Result<()> {
        let analyses = self.analyze(tokens);
        self.analyzed += analyses.len();

        let rules: &dyn MorphologyRules = self.analyzer.rules();
        for analysis in analyses {
            let verification = self.headwords.and_then(|h| h.verify(&analysis));
            if self.verify_only && verification.as_ref().map_or(true, |v| v.found) {
                continue;
            }
            let report = WordReport::new(analysis, rules, verification);
            self.formatter.format_word(&report)?;
        }
        Ok(())
    }

    fn analyze(&self, tokens: &[String]) -> Vec<AnalyzedWord> {
        match self.pool {
            Some(pool) => pool.install(|| self.analyzer.analyze_batch(tokens)),
            None => tokens.iter().map(|t| self.analyzer.analyze(t)).collect(),
        }
    }
}

fn build_pool(threads: Option<usize>) -> Result<rayon::ThreadPool> {
    let threads = threads.unwrap_or_else(num_cpus::get).max(1);
    log::debug!("Using {} worker threads", threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build thread pool")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
