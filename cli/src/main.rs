// SPDX-FileCopyrightText: 2026 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A command line tool for toggling GPIO lines at fixed frequencies.

use anyhow::{Context, Result};
use clap::Parser;
use gpioblink::config::DEFAULT_CONSUMER;
use gpioblink::{
    CdevPlatform, Config, IntervalMode, MonotonicRawClock, Pacing, Shutdown, StimulusConfig,
};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod common;

fn main() -> ExitCode {
    match Opts::try_parse() {
        Ok(opts) => {
            init_logging(opts.verbose);
            return match run(&opts) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{}", common::format_error(opts.verbose, &e));
                    ExitCode::from(exit_status(&e))
                }
            };
        }
        Err(e) => {
            if !e.use_stderr() {
                // help or version
                println!("{e}");
                return ExitCode::SUCCESS;
            }
            eprintln!("{e}");
        }
    }
    ExitCode::FAILURE
}

fn run(opts: &Opts) -> Result<()> {
    let config = opts.config();
    let shutdown = Shutdown::on_interrupt()?;
    let platform = CdevPlatform::from_config(&config);
    gpioblink::blink(&platform, MonotonicRawClock, &config, shutdown)
        .with_context(|| format!("unable to blink lines on {}", config.chip.display()))?;
    Ok(())
}

fn exit_status(e: &anyhow::Error) -> u8 {
    e.downcast_ref::<gpioblink::Error>()
        .map(gpioblink::Error::exit_code)
        .unwrap_or(1)
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[derive(Debug, Parser)]
#[command(
    name = "gpioblink",
    about = "A utility to toggle GPIO lines at independent fixed frequencies.",
    version
)]
struct Opts {
    /// The chip containing the lines
    ///
    /// The chip may be identified by number, name, or path.
    /// e.g. the following all select the same chip:
    ///     --chip 0
    ///     --chip gpiochip0
    ///     --chip /dev/gpiochip0
    #[arg(
        short,
        long,
        value_name = "chip",
        default_value = "0",
        verbatim_doc_comment
    )]
    chip: String,

    /// A line to toggle and the frequency to toggle it at
    ///
    /// The line is identified by offset and the frequency is in Hz,
    /// with an optional name used in log output.
    /// May be repeated to toggle several lines.
    ///
    /// If not specified then lines 17 and 18 are toggled at 10Hz and 1Hz.
    ///  e.g.
    ///      -s 17=10:left -s 18=1:right
    ///      --stimulus 4=7.5
    #[arg(
        short,
        long = "stimulus",
        value_name = "offset=frequency[:name]",
        value_parser = common::parse_stimulus,
        verbatim_doc_comment
    )]
    stimuli: Vec<StimulusConfig>,

    /// Toggle every line on every sweep, ignoring the frequencies.
    #[arg(long)]
    free_run: bool,

    /// Sleep between sweeps rather than busy polling
    ///
    /// Reduces CPU load at the cost of toggle timing jitter of up to the period.
    ///
    /// The period is taken as milliseconds unless otherwise specified.
    #[arg(short = 't', long, value_name = "period", value_parser = common::parse_duration)]
    tick: Option<Duration>,

    /// The consumer label applied to requested lines.
    #[arg(long, value_name = "consumer", default_value = DEFAULT_CONSUMER)]
    consumer: String,

    /// Provide more detailed logging and error messages.
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Opts {
    fn config(&self) -> Config {
        let mut config = Config {
            chip: common::chip_path_from_id(&self.chip),
            consumer: self.consumer.clone(),
            ..Default::default()
        };
        if !self.stimuli.is_empty() {
            config.stimuli = self.stimuli.clone();
        }
        if self.free_run {
            config.interval_mode = IntervalMode::FreeRun;
        }
        if let Some(period) = self.tick {
            config.pacing = Pacing::Tick(period);
        }
        config
    }
}
