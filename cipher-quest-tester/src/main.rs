mod autoplay;
mod reports;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use autoplay::{AutoPlayer, CampaignReport, parse_levels};
use cipher_quest_game::LEVELS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored summary for the terminal
    Console,
    /// Machine-readable results
    Json,
    /// Table for pull requests and wikis
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "cipher-quest-tester", version)]
#[command(about = "Automated play-through of the Cipher Quest levels")]
struct Args {
    /// Levels to solve (comma-separated numbers, or "all")
    #[arg(long, default_value = "all")]
    levels: String,

    /// Hints to take on each selected level before answering
    #[arg(long, default_value_t = 0)]
    hints: u32,

    /// List the levels and exit
    #[arg(long)]
    list_levels: bool,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_levels(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let levels = parse_levels(&args.levels)?;
    log::info!("solving levels {levels:?} with {} hint(s) each", args.hints);
    let report = AutoPlayer::new(args.hints, args.verbose).run(&levels);

    write_report(&args, &report, start_time)?;

    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_levels(args: &Args) -> Result<bool> {
    if !args.list_levels {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available levels:")?;
    for level in &LEVELS {
        writeln!(
            output_target.writer(),
            "  {:>2}  {:28} {:26} {:>4} pts",
            level.id,
            level.title,
            level.cipher.to_string(),
            level.max_score
        )?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    eprintln!("{}", "🔐 Cipher Quest Automated Tester".bright_cyan().bold());
    eprintln!("{}", "================================".cyan());
}

fn write_report(args: &Args, report: &CampaignReport, start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => reports::generate_json_report(&mut output_target, report)?,
        ReportFormat::Markdown => reports::generate_markdown_report(&mut output_target, report)?,
        ReportFormat::Console => {
            reports::generate_console_report(&mut output_target, report, start_time.elapsed())?;
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
