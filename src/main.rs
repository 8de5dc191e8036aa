// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use indicatif::ProgressBar;
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::Config;
use crate::assistant::{ArticleBrief, Assistant, ImageInput};
use crate::providers::gemini::Gemini;
use crate::providers::ModelClient;

mod app_config;
mod assistant;
mod errors;
mod language_utils;
mod prompts;
mod providers;
mod response;
mod segmenter;
mod streaming;
mod translation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Options shared by every assistant command
#[derive(Parser, Debug)]
struct CommonArgs {
    /// Model name to send requests to
    #[arg(short, long)]
    model: Option<String>,

    /// Source language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Text to translate (reads the file given with --input when omitted)
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read the text to translate from a file
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser, Debug)]
struct WriteArgs {
    /// Subject of the article
    #[arg(value_name = "TOPIC")]
    topic: String,

    /// Intended readership
    #[arg(short, long, default_value = "a general audience")]
    audience: String,

    /// Desired article length
    #[arg(long, default_value = "about 800 words")]
    length: String,

    /// Tone of voice
    #[arg(long, default_value = "professional")]
    tone: String,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Image file to plan edits for
    #[arg(value_name = "IMAGE")]
    image: PathBuf,

    /// What should be done to the image
    #[arg(value_name = "INSTRUCTIONS")]
    instructions: String,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text between languages
    Translate(TranslateArgs),

    /// Generate an article from a content brief
    Write(WriteArgs),

    /// Describe an editing plan for an image (nothing is applied)
    Plan(PlanArgs),

    /// Generate shell completions for aidesk
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// aidesk - AI Desk Assistant
///
/// Translate long texts, generate article content, and describe image-editing
/// plans through the Gemini API.
#[derive(Parser, Debug)]
#[command(name = "aidesk")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered desk assistant")]
#[command(long_about = "aidesk translates long texts with sentence-aware segmentation, \
generates article content from a brief, and describes image-editing plans.

EXAMPLES:
    aidesk translate \"Hello world.\"             # Translate with default config
    aidesk translate -i letter.txt -t fr        # Translate a file into French
    aidesk write \"Rust for beginners\" --tone friendly
    aidesk plan photo.png \"remove the background\"
    aidesk completions bash > aidesk.bash       # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically. The API key can also be supplied through
    the GEMINI_API_KEY environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "aidesk", &mut std::io::stdout());
            Ok(())
        }
        Commands::Translate(args) => run_translate(args).await,
        Commands::Write(args) => run_write(args).await,
        Commands::Plan(args) => run_plan(args).await,
    }
}

/// Load the configuration and apply CLI overrides on top of it
fn load_config(common: &CommonArgs) -> Result<Config> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &common.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    let mut config = Config::load_or_create(&common.config_path)
        .context(format!("Failed to load config from: {}", common.config_path))?;

    if let Some(model) = &common.model {
        config.provider.model = model.clone();
    }
    if let Some(source_lang) = &common.source_language {
        config.source_language = source_lang.clone();
    }
    if let Some(target_lang) = &common.target_language {
        config.target_language = target_lang.clone();
    }
    if let Some(log_level) = &common.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if common.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    Ok(config)
}

fn build_assistant(config: Config) -> Assistant {
    let client: Arc<dyn ModelClient> = Arc::new(Gemini::new_with_config(
        config.get_api_key(),
        config.provider.model.clone(),
        config.provider.endpoint.clone(),
        config.provider.timeout_secs,
    ));
    Assistant::new(client, config)
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

async fn run_translate(args: TranslateArgs) -> Result<()> {
    let config = load_config(&args.common)?;

    let text = match (args.text, args.input) {
        (Some(text), None) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .context(format!("Failed to read input file: {:?}", path))?,
        (Some(_), Some(_)) => {
            return Err(anyhow!("Provide either TEXT or --input, not both"));
        }
        (None, None) => {
            return Err(anyhow!("Provide the text to translate, or --input FILE"));
        }
    };

    let assistant = build_assistant(config);
    let pb = spinner("Translating...");
    let result = assistant.translate(&text).await;
    pb.finish_and_clear();

    let aggregate = result.map_err(|e| anyhow!("Translation failed: {}", e))?;
    println!("{}", aggregate.translated_text);

    if !aggregate.glossary.is_empty() {
        eprintln!();
        eprintln!("Glossary:");
        for item in &aggregate.glossary {
            eprintln!("  {}: {}", item.term, item.definition);
        }
    }

    Ok(())
}

async fn run_write(args: WriteArgs) -> Result<()> {
    let config = load_config(&args.common)?;
    let assistant = build_assistant(config);

    let brief = ArticleBrief {
        topic: args.topic,
        audience: args.audience,
        length: args.length,
        tone: args.tone,
    };

    let pb = spinner("Generating article...");
    let result = assistant.write_article(&brief).await;
    pb.finish_and_clear();

    let content = result.map_err(|e| anyhow!("Article generation failed: {}", e))?;
    println!(
        "{}",
        serde_json::to_string_pretty(&content).context("Failed to serialize article")?
    );

    Ok(())
}

async fn run_plan(args: PlanArgs) -> Result<()> {
    let config = load_config(&args.common)?;

    if !args.image.exists() {
        return Err(anyhow!("Image file does not exist: {:?}", args.image));
    }

    let mime_type = mime_type_for(&args.image)
        .ok_or_else(|| anyhow!("Unsupported image format: {:?}", args.image))?;
    let data = std::fs::read(&args.image)
        .context(format!("Failed to read image file: {:?}", args.image))?;
    info!("Planning edits for {:?} ({} bytes)", args.image, data.len());

    let assistant = build_assistant(config);
    let image = ImageInput {
        mime_type: mime_type.to_string(),
        data,
    };

    let pb = spinner("Planning edits...");
    let result = assistant.plan_image_edit(image, &args.instructions).await;
    pb.finish_and_clear();

    let plan = result.map_err(|e| anyhow!("Edit planning failed: {}", e))?;
    println!(
        "{}",
        serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?
    );

    Ok(())
}

/// Map a file extension to its image MIME type
fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}
