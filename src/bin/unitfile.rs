use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unitfile::manifest::{load_daemon, load_options, load_unit_file};
use unitfile::{marshal_with, Options};

fn usage() -> &'static str {
    "Usage:\n  unitfile render <daemon.toml|daemon.json> [--config <options.toml>]\n  unitfile parse <unit-file> [--config <options.toml>]\n  unitfile check <unit-file> [--config <options.toml>]"
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unitfile=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [command, input] => run(command, Path::new(input), Options::default()),
        [command, input, flag, config] if flag == "--config" => {
            run(command, Path::new(input), load_options(Path::new(config))?)
        }
        _ => bail!(usage()),
    }
}

fn run(command: &str, input: &Path, options: Options) -> Result<()> {
    match command {
        "render" => render(input, &options),
        "parse" => parse(input, &options),
        "check" => check(input, &options),
        other => bail!("unknown command '{}'\n{}", other, usage()),
    }
}

fn render(input: &Path, options: &Options) -> Result<()> {
    let daemon = load_daemon(input)?;
    let text = marshal_with(&daemon, options)
        .with_context(|| format!("rendering unit file from '{}'", input.display()))?;
    println!("{text}");
    Ok(())
}

fn parse(input: &Path, options: &Options) -> Result<()> {
    let daemon = load_unit_file(input, options)?;
    let json = serde_json::to_string_pretty(&daemon).context("serializing daemon as JSON")?;
    println!("{json}");
    Ok(())
}

fn check(input: &Path, options: &Options) -> Result<()> {
    let daemon = load_unit_file(input, options)?;
    tracing::info!(path = %input.display(), "unit file is valid");
    println!("[Unit]    {}", daemon.unit.description);
    println!("[Service] {}", daemon.service.exec_start);
    println!("[Install] {}", daemon.install.wanted_by);
    match &daemon.socket {
        Some(socket) => println!("[Socket]  {}", socket.listen_stream),
        None => println!("[Socket]  (none)"),
    }
    Ok(())
}
