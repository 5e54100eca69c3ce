use anyhow::{Context, Result};
use certplan::{
    certs::{
        certificate_filename_in_build_context, generate_cert_install_commands,
        generate_copy_cert_entries,
    },
    cli::{Cli, Commands},
    config::{Config, OutputFormat},
    detect::{OsFamily, Runtime},
    dockerfile::render_cert_instructions,
};
use clap::Parser;
use serde::Serialize;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Detection {
    os_family: OsFamily,
    runtime: Runtime,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Commands { base_image, certs } => {
            let config = load_config(cli.config.as_deref())?;
            let format = cli.format.unwrap_or(config.format);
            let base_image = resolve_base_image(base_image, &config)?;
            let certs = resolve_certs(certs, &config)?;
            let commands = generate_cert_install_commands(Some(base_image.as_str()), &certs);
            info!(
                "Planned {} command(s) for {} certificate(s)",
                commands.len(),
                certs.len()
            );
            print_lines(format, &commands)?;
        }
        Commands::CopyEntries { certs, target_dir } => {
            let config = load_config(cli.config.as_deref())?;
            let format = cli.format.unwrap_or(config.format);
            let certs = resolve_certs(certs, &config)?;
            let target_dir = target_dir.unwrap_or_else(|| config.target_dir.clone());
            let entries = generate_copy_cert_entries(&certs, &target_dir);
            match format {
                OutputFormat::Text => {
                    for entry in &entries {
                        println!("{} {}", entry.source(), entry.destination());
                    }
                }
                OutputFormat::Json => print_json(&entries)?,
            }
        }
        Commands::Filename { cert, index } => {
            let name = certificate_filename_in_build_context(&cert, index);
            match cli.format.unwrap_or_default() {
                OutputFormat::Text => println!("{}", name),
                OutputFormat::Json => print_json(&name)?,
            }
        }
        Commands::Dockerfile { base_image, certs } => {
            let config = load_config(cli.config.as_deref())?;
            let format = cli.format.unwrap_or(config.format);
            let base_image = resolve_base_image(base_image, &config)?;
            let certs = resolve_certs(certs, &config)?;
            let instructions = render_cert_instructions(Some(base_image.as_str()), &certs);
            print_lines(format, &instructions)?;
        }
        Commands::Detect { base_image } => {
            let detection = Detection {
                os_family: OsFamily::detect(&base_image),
                runtime: Runtime::detect(&base_image),
            };
            match cli.format.unwrap_or_default() {
                OutputFormat::Text => {
                    println!("os_family: {}", detection.os_family);
                    println!("runtime: {}", detection.runtime);
                }
                OutputFormat::Json => print_json(&detection)?,
            }
        }
        Commands::Version => {
            println!("certplan {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_path(path),
        None => Config::load(),
    }
}

fn resolve_base_image(base_image: Option<String>, config: &Config) -> Result<String> {
    base_image
        .or_else(|| config.base_image.clone())
        .context("Either --base-image, CERTPLAN_BASE_IMAGE or base_image in config must be set")
}

fn resolve_certs(certs: Vec<String>, config: &Config) -> Result<Vec<String>> {
    let certs = if certs.is_empty() {
        config.certificates.clone()
    } else {
        certs
    };
    if certs.is_empty() {
        anyhow::bail!("No certificates given on the command line or in config");
    }
    Ok(certs)
}

fn print_lines(format: OutputFormat, lines: &[String]) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in lines {
                println!("{}", line);
            }
        }
        OutputFormat::Json => print_json(&lines)?,
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
