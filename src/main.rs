//! Spinning ASCII torus (default binary).
//!
//! Usage:
//!   tui-donut                    - animate in the alternate screen until q / Esc / Ctrl-C
//!   tui-donut --config FILE      - load scene parameters from a JSON file
//!   tui-donut --frames N         - stop after N frames
//!   tui-donut --plain            - clear-and-print to stdout instead (no raw mode)
//!
//! Set `RUST_LOG=debug` to see scene derivation and dropped-sample reports on
//! stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tui_donut::core::DonutConfig;
use tui_donut::engine::{AnimationDriver, CancelToken, DisplaySink};
use tui_donut::term::{TerminalSink, TextSink};

#[derive(Debug, Default, PartialEq, Parser)]
#[command(name = "tui-donut", version)]
#[command(about = "Spinning ASCII torus with a depth buffer")]
struct Args {
    /// JSON file with scene parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many frames
    #[arg(short = 'n', long)]
    frames: Option<u64>,

    /// Clear and print to stdout instead of the alternate screen
    #[arg(long)]
    plain: bool,
}

fn load_config(args: &Args) -> Result<DonutConfig> {
    let Some(path) = &args.config else {
        return Ok(DonutConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg = DonutConfig::from_json(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    log::info!("loaded config from {}", path.display());
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let scene = load_config(&args)?.validate()?;

    let mut driver = AnimationDriver::new(scene);
    if let Some(frames) = args.frames {
        driver = driver.with_frame_limit(frames);
    }
    let cancel = CancelToken::new();

    if args.plain {
        let mut sink = TextSink::new(std::io::stdout().lock());
        return run(&mut driver, &mut sink, &cancel);
    }

    let mut sink = TerminalSink::new(cancel.clone());
    sink.enter()?;

    let result = run(&mut driver, &mut sink, &cancel);

    // Always try to restore terminal state.
    finish(result, sink.exit())
}

/// The run's own outcome wins; a failed terminal restore is only logged.
fn finish(result: Result<()>, restore: Result<()>) -> Result<()> {
    if let Err(e) = restore {
        log::warn!("failed to restore terminal: {e:#}");
    }
    result
}

fn run(driver: &mut AnimationDriver, sink: &mut dyn DisplaySink, cancel: &CancelToken) -> Result<()> {
    let summary = driver.run(sink, cancel)?;
    log::info!(
        "rendered {} frames, final angles ({:.3}, {:.3})",
        summary.frames,
        summary.final_angles.a,
        summary.final_angles.b
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("tui-donut").chain(list.iter().copied()))
    }

    #[test]
    fn no_arguments_means_defaults() {
        assert_eq!(args(&[]).unwrap(), Args::default());
    }

    #[test]
    fn parses_every_flag() {
        let parsed = args(&["--config", "donut.json", "--frames", "12", "--plain"]).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("donut.json")));
        assert_eq!(parsed.frames, Some(12));
        assert!(parsed.plain);
    }

    #[test]
    fn short_flags_work() {
        let parsed = args(&["-c", "donut.json", "-n", "3"]).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("donut.json")));
        assert_eq!(parsed.frames, Some(3));
        assert!(!parsed.plain);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(args(&["--frames"]).is_err());
        assert!(args(&["--frames", "many"]).is_err());
        assert!(args(&["--config"]).is_err());
        assert!(args(&["--spin"]).is_err());
    }

    #[test]
    fn restore_failure_does_not_replace_run_outcome() {
        assert!(finish(Ok(()), Err(anyhow::anyhow!("tty gone"))).is_ok());

        let err = finish(Err(anyhow::anyhow!("sink broke")), Err(anyhow::anyhow!("tty gone")))
            .unwrap_err();
        assert_eq!(err.to_string(), "sink broke");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let parsed = args(&["--config", "/definitely/not/here.json"]).unwrap();
        let err = load_config(&parsed).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn no_config_file_uses_defaults() {
        assert_eq!(load_config(&Args::default()).unwrap(), DonutConfig::default());
    }
}
