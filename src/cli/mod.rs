use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "certplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the shell commands that install CA certificates into an image
    Commands {
        /// Base image the commands will run in (e.g., openjdk:11-jre-slim)
        #[arg(short, long, env = "CERTPLAN_BASE_IMAGE")]
        base_image: Option<String>,

        /// Certificate files to install
        #[arg(value_name = "CERT")]
        certs: Vec<String>,
    },

    /// Print the build context copy entries for certificate files
    CopyEntries {
        /// Certificate files to copy
        #[arg(value_name = "CERT")]
        certs: Vec<String>,

        /// Directory the certificates are copied into
        #[arg(long)]
        target_dir: Option<String>,
    },

    /// Print the build context filename of a certificate
    Filename {
        /// Certificate file path
        cert: String,

        /// Position of the certificate in the certificate list
        index: usize,
    },

    /// Print Dockerfile instructions that install CA certificates
    Dockerfile {
        /// Base image of the Dockerfile (e.g., eclipse-temurin:17-jre)
        #[arg(short, long, env = "CERTPLAN_BASE_IMAGE")]
        base_image: Option<String>,

        /// Certificate files to install
        #[arg(value_name = "CERT")]
        certs: Vec<String>,
    },

    /// Show the OS family and runtime detected for a base image
    Detect {
        /// Base image reference
        base_image: String,
    },

    /// Show version information
    Version,
}
