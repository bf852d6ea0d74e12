use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::Arc,
    sync::atomic::{AtomicBool, Ordering},
    time::Instant,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "keepsake", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive the intro schedule from a storyboard and print it as JSON.
    Schedule(ScheduleArgs),
    /// Evaluate what the surface shows at one instant, as JSON.
    Frame(FrameArgs),
    /// Run the intro in real time, printing elements as they appear.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct ScheduleArgs {
    /// Input storyboard JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input storyboard JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Seconds since activation.
    #[arg(long)]
    at: f64,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input storyboard JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Playback rate multiplier (2.0 runs twice as fast).
    #[arg(long, default_value_t = 1.0)]
    rate: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Schedule(args) => cmd_schedule(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn read_storyboard(path: &Path) -> anyhow::Result<keepsake::Storyboard> {
    let f = File::open(path).with_context(|| format!("open storyboard '{}'", path.display()))?;
    let r = BufReader::new(f);
    let storyboard: keepsake::Storyboard =
        serde_json::from_reader(r).with_context(|| "parse storyboard JSON")?;
    Ok(storyboard)
}

fn cmd_schedule(args: ScheduleArgs) -> anyhow::Result<()> {
    let storyboard = read_storyboard(&args.in_path)?;
    let presentation = keepsake::Presentation::from_storyboard(storyboard)?;
    let schedule = presentation.schedule();

    let text = if args.pretty {
        serde_json::to_string_pretty(schedule)?
    } else {
        serde_json::to_string(schedule)?
    };

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, text)
                .with_context(|| format!("write schedule '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let storyboard = read_storyboard(&args.in_path)?;
    let presentation = keepsake::Presentation::from_storyboard(storyboard)?;

    let at = keepsake::Seconds::new(args.at)?;
    let frame = presentation.frame_at(at)?;
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    if !args.rate.is_finite() || args.rate <= 0.0 {
        anyhow::bail!("--rate must be > 0");
    }

    let storyboard = read_storyboard(&args.in_path)?;
    let presentation = keepsake::Presentation::from_storyboard(storyboard)?;

    let mut entries = presentation.schedule().entries.clone();
    entries.sort_by(|a, b| {
        a.offset
            .partial_cmp(&b.offset)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let completed = Arc::new(AtomicBool::new(false));
    let scaled_total = presentation.total_duration() * (1.0 / args.rate);
    let observer = Arc::clone(&completed);
    let _timer = keepsake::CompletionTimer::after(scaled_total, move || {
        observer.store(true, Ordering::Release);
    })?;

    let start = Instant::now();
    for entry in &entries {
        let due = entry.offset.to_duration().div_f64(args.rate);
        let elapsed = start.elapsed();
        if due > elapsed {
            std::thread::sleep(due - elapsed);
        }
        println!("{:7.2}s  {}", entry.offset.as_f64(), entry.element);
    }

    while !completed.load(Ordering::Acquire) {
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    println!(
        "{:7.2}s  intro complete",
        presentation.total_duration().as_f64()
    );
    Ok(())
}
