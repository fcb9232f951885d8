mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pv", about = "Groth16 proof validator for bn128")]
struct Cli {
    /// Machine-readable output on stdout
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Verify a proof file against a verification key
    Verify {
        /// Verification key (ZoKrates-style JSON)
        #[arg(long, default_value = "verification_key.json")]
        vk: PathBuf,
        /// Proof request: { scheme, curve, proof, inputs }
        #[arg(long, default_value = "proof.json")]
        proof: PathBuf,
        /// Give up after this many seconds
        #[arg(
            long,
            default_value_t = pv_core::DEFAULT_TIMEOUT.as_secs(),
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        timeout_secs: u64,
    },
    /// Show and validate a verification key
    VkInfo {
        #[arg(long, default_value = "verification_key.json")]
        vk: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    output::set_json_mode(cli.json);
    match cli.command {
        Cmd::Verify { vk, proof, timeout_secs } => {
            if !commands::verify::run(&vk, &proof, timeout_secs).await? {
                std::process::exit(1);
            }
        }
        Cmd::VkInfo { vk } => commands::vk_info::run(&vk)?,
    }
    Ok(())
}
