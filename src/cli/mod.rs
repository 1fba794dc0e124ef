use crate::logging::consts::DEFAULT_LOGGING_BATCH_SIZE;
use clap::Parser;
use http::HeaderValue;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    pub jwt_signing_key: String,
    /// Newline-delimited JSON file with one sample per line.
    #[arg(long)]
    #[arg(default_value = "samples.example.ndjson")]
    pub samples: PathBuf,
    /// Directory that relative image references of the samples point into.
    #[arg(long)]
    #[arg(default_value = "images")]
    pub images_dir: PathBuf,
    /// Display name of the model the player competes against.
    #[arg(long)]
    #[arg(default_value = "Fine-Tuned CLIP")]
    pub model_name: String,
    #[arg(long = "allowed-origin")]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<HeaderValue>,
    /// Sessions untouched for this many seconds are dropped.
    #[arg(long)]
    #[arg(default_value_t = 3600)]
    pub session_idle_timeout_secs: u64,
    #[arg(long)]
    #[arg(default_value_t = 60)]
    pub session_sweep_interval_secs: u64,
    /// Ship structured logs to Quickwit when set.
    #[arg(long)]
    pub quickwit_url: Option<Url>,
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_LOGGING_BATCH_SIZE)]
    pub quickwit_batch_size: usize,
}
