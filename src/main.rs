//! The magpie bot: build a chain from corpus files, then chatter on a schedule.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::{error, info, warn};

use magpie::corpus::load_corpus;
use magpie::post::{Credentials, StatusPoster};
use magpie::{Chain, Error, GenOptions};

/// Generates Markov chain sentences from text files and posts them as statuses.
///
/// Credentials are read from MAGPIE_API_URL and MAGPIE_API_TOKEN (a .env file works).
#[derive(Debug, Parser)]
#[command(name = "magpie", version, about)]
struct Cli {
    /// Corpus files to model, read and concatenated in order
    #[arg(required = true)]
    sources: Vec<PathBuf>,

    /// Longest status, in bytes, the bot will post
    #[arg(long, default_value_t = 140)]
    max_length: usize,

    /// Candidates to sample per iteration before skipping it
    #[arg(long, default_value_t = 100)]
    attempts: usize,

    /// Seconds to wait between posts
    #[arg(long, default_value_t = 10)]
    interval: u64,

    /// Post once and exit
    #[arg(long)]
    once: bool,

    /// Print generated statuses instead of posting them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let text = load_corpus(&cli.sources)?;
    let mut builder = Chain::builder();
    builder.feed_str(&text);
    let chain = builder.build()?;
    info!("chain holds {} word pairs", chain.len());

    let poster = if cli.dry_run {
        None
    } else {
        let poster = StatusPoster::new(Credentials::from_env()?)?;
        poster.verify().context("credential check failed")?;
        Some(poster)
    };

    let opts = GenOptions {
        max_len: cli.max_length,
        max_attempts: cli.attempts,
        ..GenOptions::default()
    };
    let mut rng = rand::thread_rng();

    loop {
        match chain.generate_post(&mut rng, &opts) {
            Ok(status) => {
                println!("{status}");
                if let Some(poster) = &poster {
                    // A rejected post should not kill a long-running bot.
                    if let Err(err) = poster.publish(&status) {
                        error!("failed to post status: {err}");
                    }
                }
            }
            Err(err @ Error::LimitUnsatisfiable { .. }) => warn!("skipping iteration: {err}"),
            Err(err) => return Err(err.into()),
        }

        if cli.once {
            break;
        }
        thread::sleep(Duration::from_secs(cli.interval));
    }

    Ok(())
}
