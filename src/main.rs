//! Command-line interface for the headmeta binary.
//!
//! The CLI loads page descriptions from YAML or JSON files and prints the
//! generated head tags, or the normalized description, as JSON on stdout.
//! Diagnostics go to stderr.

use std::{
    io,
    path::{Path, PathBuf},
    process,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use headmeta::{
    Error, GeneratedMetadata, MetadataGenerator, TitleTemplate, load_metadata, normalize,
};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line interface for compiling page metadata into head tags.
#[derive(Debug, Parser,)]
#[command(name = "headmeta", version, about = "Compile page metadata into head tags")]
struct Cli
{
    #[command(subcommand)]
    command: Command,

    /// Log filter directive; falls back to `RUST_LOG`, then `warn`.
    #[arg(long = "log-level", value_name = "FILTER", global = true)]
    log_level: Option<String,>,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Generate meta and link tags for one page description.
    Generate(GenerateArgs,),
    /// Generate tags for many page descriptions in parallel.
    Batch(BatchArgs,),
    /// Print the normalized form of a page description.
    Normalize(NormalizeArgs,),
}

/// Site-wide settings shared by `generate` and `batch`.
#[derive(Debug, Args, Default,)]
struct GeneratorArgs
{
    /// Base URL against which relative URLs are resolved.
    #[arg(long = "base-url", value_name = "URL", env = "HEADMETA_BASE_URL")]
    base_url: Option<String,>,

    /// Title template; every `%s` is replaced by the page title.
    #[arg(
        long = "title-template",
        value_name = "TEMPLATE",
        env = "HEADMETA_TITLE_TEMPLATE",
        requires = "title_default"
    )]
    title_template: Option<String,>,

    /// Title used for pages without one when a template is set.
    #[arg(
        long = "title-default",
        value_name = "TITLE",
        env = "HEADMETA_TITLE_DEFAULT",
        requires = "title_template"
    )]
    title_default: Option<String,>,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Debug, Args,)]
struct GenerateArgs
{
    /// Path to the YAML or JSON page description.
    #[arg(long = "input", value_name = "PATH")]
    input: PathBuf,

    #[command(flatten)]
    generator: GeneratorArgs,
}

#[derive(Debug, Args,)]
struct BatchArgs
{
    /// Paths to the page descriptions; results keep this order.
    #[arg(long = "input", value_name = "PATH", required = true, num_args = 1..)]
    inputs: Vec<PathBuf,>,

    #[command(flatten)]
    generator: GeneratorArgs,
}

#[derive(Debug, Args,)]
struct NormalizeArgs
{
    /// Path to the YAML or JSON page description.
    #[arg(long = "input", value_name = "PATH")]
    input: PathBuf,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors from document loading, generator configuration,
/// generation, and serialization.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref(),);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.command {
        Command::Generate(args,) => run_generate(&mut handle, &args,),
        Command::Batch(args,) => run_batch(&mut handle, &args,),
        Command::Normalize(args,) => run_normalize(&mut handle, &args,),
    }
}

fn init_tracing(directive: Option<&str,>,)
{
    tracing_subscriber::fmt().with_env_filter(log_filter(directive,),).with_writer(io::stderr,).init();
}

fn log_filter(directive: Option<&str,>,) -> EnvFilter
{
    directive
        .map(EnvFilter::new,)
        .unwrap_or_else(|| EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),),)
}

fn build_generator(args: &GeneratorArgs,) -> Result<MetadataGenerator, Error,>
{
    let mut builder = MetadataGenerator::builder();
    if let (Some(template,), Some(default,),) = (&args.title_template, &args.title_default,) {
        builder = builder.title_template(TitleTemplate::new(default.as_str(), template.as_str(),),);
    }
    if let Some(base_url,) = &args.base_url {
        builder = builder.base_url(base_url.as_str(),);
    }
    builder.build()
}

fn generate_page(generator: &MetadataGenerator, path: &Path,) -> Result<GeneratedMetadata, Error,>
{
    let metadata = load_metadata(path,)?;
    generator.generate(&metadata,)
}

fn run_generate<W: io::Write,>(writer: &mut W, args: &GenerateArgs,) -> Result<(), Error,>
{
    let generator = build_generator(&args.generator,)?;
    let generated = generate_page(&generator, &args.input,)?;
    info!(meta = generated.meta.len(), links = generated.links.len(), "generated {}", args.input.display());

    write_json(writer, &generated, args.generator.pretty,)
}

/// Compiles every input in parallel; the first failure aborts the batch.
fn run_batch<W: io::Write,>(writer: &mut W, args: &BatchArgs,) -> Result<(), Error,>
{
    let generator = build_generator(&args.generator,)?;
    let results = args
        .inputs
        .par_iter()
        .map(|path| generate_page(&generator, path,),)
        .collect::<Result<Vec<_,>, Error,>>()?;
    info!(pages = results.len(), "generated batch");

    write_json(writer, &results, args.generator.pretty,)
}

fn run_normalize<W: io::Write,>(writer: &mut W, args: &NormalizeArgs,) -> Result<(), Error,>
{
    let metadata = load_metadata(&args.input,)?;
    let normalized = normalize(&metadata,)?;

    write_json(writer, &normalized, args.pretty,)
}

fn write_json<W: io::Write, T: Serialize,>(writer: &mut W, value: &T, pretty: bool,) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(writer, value,)?;
    } else {
        serde_json::to_writer(writer, value,)?;
    }

    Ok((),)
}
