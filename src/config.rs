//! Command line configuration.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How requests are mapped onto todo lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PartitionMode {
    /// One list per client, keyed by the derived tracking token.
    Session,
    /// A single list shared by everyone.
    Global,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "htmx-todo")]
#[command(version, about = "Serves a todo list rendered as htmx fragments", long_about = None)]
pub struct Config {
    /// The host to serve the website on
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// The port to serve the website on
    #[arg(long, default_value = "3000")]
    pub port: String,

    /// How todo lists are partitioned between clients
    #[arg(long, value_enum, default_value_t = PartitionMode::Session)]
    pub partition: PartitionMode,

    /// Directory holding main.css
    #[arg(long, default_value = "static")]
    pub static_dir: PathBuf,

    /// Log at DEBUG instead of INFO
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// The `host:port` string the listener binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
