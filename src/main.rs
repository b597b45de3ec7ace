use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use is_terminal::IsTerminal;
use ndiff::areas::comparison::Comparison;
use ndiff::artifacts::anchors::threshold::ConfusionPolicy;
use ndiff::artifacts::core::OutputTarget;
use ndiff::artifacts::diff::ndiff::DiffOptions;
use ndiff::artifacts::diff::oracle::OracleKind;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Parser)]
#[command(
    name = "ndiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A token-granularity diff that synchronizes on anchors",
    long_about = "ndiff compares two text files token by token. It first finds long runs \
    common to both files (anchors) and only aligns the material between them, which \
    keeps moved-around or reformatted code from drowning the real changes.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The original file")]
    source: PathBuf,
    #[arg(index = 2, help = "The changed file")]
    target: PathBuf,
    #[arg(long, value_enum, default_value_t, help = "Policy for rejecting confusing anchors")]
    threshold: ConfusionPolicy,
    #[arg(long, value_enum, default_value_t, help = "Aligner used between anchors")]
    oracle: OracleKind,
    #[arg(long, default_value = "diff", help = "Program run by the external oracle")]
    diff_program: String,
    #[arg(long, help = "Skip the lossless optimizer")]
    no_optimize: bool,
    #[arg(long, help = "Rewrite edit-dense lines as whole-line changes")]
    bundle_lines: bool,
    #[arg(long, help = "Print the discovered anchors instead of the diff")]
    show_anchors: bool,
    #[arg(long, value_enum, default_value_t, help = "When to color the output")]
    color: ColorChoice,
    #[arg(long, help = "Show the output in a pager when stdout is a terminal")]
    paging: bool,
    #[arg(short, long, action = ArgAction::Count, help = "More log output (repeatable)")]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> DiffOptions {
        DiffOptions::new(
            self.threshold,
            self.oracle,
            self.diff_program.clone(),
            !self.no_optimize,
            self.bundle_lines,
        )
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout_is_terminal = std::io::stdout().is_terminal();
    let color = match cli.color {
        ColorChoice::Auto => stdout_is_terminal,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };
    colored::control::set_override(color);

    let output = if cli.paging && stdout_is_terminal {
        OutputTarget::paged()
    } else {
        OutputTarget::Stdout
    };

    let comparison =
        Comparison::new(&cli.source, &cli.target, cli.options(), output.writer()).with_color(color);

    if cli.show_anchors {
        comparison.show_anchors().await?;
    } else {
        comparison.diff().await?;
    }

    drop(comparison);
    output.finish()?;

    Ok(())
}
