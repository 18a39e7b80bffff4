mod cli;
mod commands;
mod config;
mod generate;
mod iconify;
mod index;
mod init;
mod naming;
mod render;
mod svg;
mod utils;
mod writer;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    // 诊断日志写到 stderr，RUST_LOG 可调整级别（默认 info）
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    commands::run(cli)
}
