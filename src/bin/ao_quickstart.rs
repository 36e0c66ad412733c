//! ao-quickstart: walk the whole flow against an aoconnect bridge
//!
//! Usage:
//!   ao-quickstart [--wallet <path>] [--module <hash>] [--name <name>] [--config <yaml>]
//!
//! Loads (or creates) a wallet, spawns a process, sends a message and an eval,
//! reads results and finishes with a dry run.

use anyhow::Context;
use simple_ao::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_MODULE: &str = "JArYBF-D8q2OmZ4Mok00sD2Y_6SYEQ7Hjx-6VZ_jl3g";

struct Args {
    wallet: Option<String>,
    module: String,
    name: String,
    config: Option<String>,
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut args = Args {
        wallet: None,
        module: DEFAULT_MODULE.to_string(),
        name: "My Cool Process".to_string(),
        config: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--wallet" => args.wallet = Some(it.next().context("--wallet needs a path")?),
            "--module" => args.module = it.next().context("--module needs a hash")?,
            "--name" => args.name = it.next().context("--name needs a value")?,
            "--config" => args.config = Some(it.next().context("--config needs a path")?),
            "help" | "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }
    Ok(Some(args))
}

fn print_usage() {
    println!(
        r#"ao-quickstart: spawn, message and query an AO process

USAGE:
    ao-quickstart [OPTIONS]

OPTIONS:
    --wallet <path>     Wallet file (default: AO_WALLET_FILE or my_wallet.json)
    --module <hash>     Module to spawn from
    --name <name>       Process name
    --config <yaml>     YAML file with facade defaults

ENVIRONMENT:
    AO_BRIDGE_URL           Bridge base URL (default http://localhost:4004)
    AO_BRIDGE_TOKEN         Bearer token for the bridge
    AO_HTTP_TIMEOUT_SECS    Request timeout
    RUST_LOG                Log filter (default info)"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let Some(args) = parse_args()? else {
        return Ok(());
    };

    let config = match &args.config {
        Some(path) => AoConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => AoConfig::from_env(),
    };

    let mut builder = SimpleAo::builder()
        .config(config)
        .provider(Arc::new(HttpBridgeProvider::from_env()?));
    if let Some(wallet) = &args.wallet {
        builder = builder.wallet_file(wallet);
    }
    let mut ao = builder.build().await?;

    if !ao.is_bound() && ao.generate_wallet().await?.is_none() {
        anyhow::bail!("could not create a wallet");
    }

    let Some(process_id) = ao.spawn_process(&args.module, Some(args.name.as_str())).await? else {
        anyhow::bail!("spawn failed; check the module hash and the bridge connection");
    };

    ao.send_message(&process_id, "Hello AO!", None).await?;
    ao.send_eval(&process_id, "print('Hello from Rust!')").await?;

    let results = ao.read_results(&process_id, Some(5)).await?;
    println!("Got {} results", results.len());

    match ao.dry_run(&process_id, "print('This is just a test')", None).await? {
        Some(Outcome::Success(result)) => println!("Dry run result: {result}"),
        Some(Outcome::Failure(raw)) => println!("Dry run failed: {raw}"),
        None => {}
    }

    println!("Process ID: {process_id}");
    Ok(())
}
