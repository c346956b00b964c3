use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use terminal_core::{
    config::{load_settings, parse_pace_scale, Settings},
    content, CommandRegistry, ExternalActions, LoggingLauncher, Sequencer, SessionDispatcher,
    SessionState, SystemLauncher, TokioPacer,
};
use tokio::{
    io::BufReader,
    sync::{mpsc, watch},
};
use tracing_subscriber::EnvFilter;

mod render;
mod repl;

use render::{ConsoleSink, OutputMode};

#[derive(Parser, Debug)]
#[command(about = "Terminal-style portfolio with a typed boot sequence")]
struct Args {
    /// Skip the typing animation.
    #[arg(long)]
    instant: bool,
    #[arg(long, value_parser = parse_pace_scale)]
    pace_scale: Option<f64>,
    /// JSON boot script replacing the built-in one.
    #[arg(long)]
    content: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    /// Print one JSON render event per line instead of text.
    #[arg(long)]
    json_events: bool,
    /// Log link commands instead of opening them.
    #[arg(long)]
    no_launch: bool,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(scale) = self.pace_scale {
            settings.pace_scale = scale;
        }
        if self.instant {
            settings.pace_scale = 0.0;
        }
        if let Some(path) = &self.content {
            settings.content_path = Some(path.clone());
        }
        if let Some(seed) = self.seed {
            settings.rng_seed = Some(seed);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings()?;
    args.apply(&mut settings);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let script = match &settings.content_path {
        Some(path) => content::load_script(path)
            .with_context(|| format!("failed to load boot script '{}'", path.display()))?,
        None => content::builtin_script().context("built-in boot script is invalid")?,
    };

    let mode = if args.json_events {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    let sink = Arc::new(ConsoleSink::new(settings.prompt.as_str(), mode));

    let (ready_tx, ready_rx) = watch::channel(false);
    let (line_tx, mut line_rx) = mpsc::channel(64);
    let reader = tokio::spawn(repl::forward_lines(
        BufReader::new(tokio::io::stdin()),
        ready_rx,
        line_tx,
    ));

    let mut sequencer = Sequencer::new(script, TokioPacer).with_pace_scale(settings.pace_scale);
    if let Some(seed) = settings.rng_seed {
        sequencer = sequencer.with_seed(seed);
    }
    let booted = sequencer.run(SessionState::new(sink.clone())).await;
    sink.set_backdrop(booted.state().transcript());

    let actions: Arc<dyn ExternalActions> = if args.no_launch {
        Arc::new(LoggingLauncher)
    } else {
        Arc::new(SystemLauncher)
    };
    let mut dispatcher = SessionDispatcher::new(booted, CommandRegistry::builtin(actions));

    // fails only when stdin already hit EOF during boot
    let _ = ready_tx.send(true);
    while let Some(line) = line_rx.recv().await {
        if dispatcher.submit(&line).is_none() {
            sink.reprompt();
        }
    }
    let discarded = reader
        .await
        .context("stdin reader panicked")?
        .context("failed to read stdin")?;
    if discarded > 0 {
        tracing::debug!(discarded, "ignored lines typed during boot");
    }

    tracing::info!(commands = dispatcher.history().len(), "session closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pace_scale_flag_rejects_absurd_values() {
        for raw in ["1e300", "inf", "NaN", "-1"] {
            let parsed = Args::try_parse_from(["terminal", "--pace-scale", raw]);
            assert!(parsed.is_err(), "accepted --pace-scale {raw}");
        }

        let args = Args::try_parse_from(["terminal", "--pace-scale", "2.5"]).expect("args");
        let mut settings = Settings::default();
        args.apply(&mut settings);
        assert_eq!(settings.pace_scale, 2.5);
    }
}
