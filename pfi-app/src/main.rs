//! PFI (Protocol Field Inference) Application
//!
//! Command-line entry point: loads captured frames, runs the field detectors
//! and prints the resulting labels as JSON.

use clap::{Parser, ValueEnum};
use pfi_core::{BitFrame, FieldLabel, InferenceConfig, InferenceError};
use pfi_infer::LabelAssigner;
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Detect {
    All,
    Preamble,
    Constants,
    Sync,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Frames file, one frame per line ('0'/'1' text, or hex with --hex)
    #[arg(short, long)]
    frames: PathBuf,

    /// Frames are hex-encoded bytes
    #[arg(long)]
    hex: bool,

    /// JSON inference config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the minimum constant length (exclusive)
    #[arg(short, long)]
    min_constant_len: Option<usize>,

    /// Use this preamble length for every frame instead of estimating it
    #[arg(short, long)]
    preamble: Option<usize>,

    /// Scan frame pairs in parallel
    #[arg(long)]
    parallel: bool,

    /// Which detector to run
    #[arg(short, long, value_enum, default_value_t = Detect::All)]
    detect: Detect,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// 解析帧文件内容，跳过空行和 `#` 注释行
fn parse_frames(
    text: &str,
    hex: bool,
    preamble: Option<usize>,
) -> Result<Vec<BitFrame>, InferenceError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| -> Result<BitFrame, InferenceError> {
            let frame = if hex {
                BitFrame::from_hex_str(line)?
            } else {
                BitFrame::from_bit_str(line)?
            };
            Ok(match preamble {
                Some(end) => frame.with_preamble_end(Some(end)),
                None => frame,
            })
        })
        .collect()
}

fn load_config(args: &Args) -> Result<InferenceConfig, InferenceError> {
    let mut config = match &args.config {
        Some(path) => InferenceConfig::from_json_file(path)?,
        None => InferenceConfig::default(),
    };
    if let Some(min_constant_len) = args.min_constant_len {
        config.min_constant_len = min_constant_len;
    }
    if args.parallel {
        config.parallel = true;
    }
    Ok(config)
}

fn run(
    frames: Vec<BitFrame>,
    config: InferenceConfig,
    detect: Detect,
) -> Result<Vec<FieldLabel>, InferenceError> {
    let mut assigner = LabelAssigner::with_config(frames, config);
    match detect {
        Detect::All => assigner.find_all(),
        Detect::Preamble => Ok(assigner.find_preamble().into_iter().collect()),
        Detect::Constants => {
            assigner.find_preamble();
            assigner.find_constants()
        }
        Detect::Sync => Ok(assigner.find_sync()?.into_iter().collect()),
    }
}

async fn execute(args: Args) -> Result<Vec<FieldLabel>, InferenceError> {
    let config = load_config(&args)?;
    let text = tokio::fs::read_to_string(&args.frames).await?;
    let frames = parse_frames(&text, args.hex, args.preamble)?;
    info!(
        frames = frames.len(),
        min_constant_len = config.min_constant_len,
        parallel = config.parallel,
        "frames loaded"
    );

    let detect = args.detect;
    tokio::task::spawn_blocking(move || run(frames, config, detect))
        .await
        .map_err(|e| InferenceError::Io(format!("inference task failed: {e}")))?
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match execute(args).await {
        Ok(labels) => match serde_json::to_string_pretty(&labels) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
