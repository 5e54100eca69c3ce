pub mod certs;
pub mod cli;
pub mod config;
pub mod constants;
pub mod detect;
pub mod dockerfile;

pub use anyhow::Result;
pub use certs::{
    certificate_filename_in_build_context, generate_cert_install_commands,
    generate_copy_cert_entries, CopyCertEntry,
};
