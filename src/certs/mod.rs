//! CA certificate install planning
//!
//! Produces the shell commands that install custom CA certificates into an
//! image, and the copy pairs that place the certificate files into the build
//! context. Nothing here touches the filesystem.

use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::constants::{java, BUILD_CONTEXT_PREFIX, CERT_STAGING_DIR};
use crate::detect::{OsFamily, Runtime};


/// A certificate file to copy, with its source and destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyCertEntry {
    source: String,
    destination: String,
}

impl CopyCertEntry {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}

/// Generate the commands that install `cert_paths` into an image built from
/// `base_image`.
///
/// Certificates are copied from [`CERT_STAGING_DIR`] into the system anchor
/// directory, the system store is refreshed once, and for Java images every
/// certificate is then imported into the JVM truststore.
///
/// Returns no commands when there is no base image or no certificates.
pub fn generate_cert_install_commands<S: AsRef<str>>(
    base_image: Option<&str>,
    cert_paths: &[S],
) -> Vec<String> {
    let Some(base_image) = base_image else {
        return Vec::new();
    };
    if cert_paths.is_empty() {
        return Vec::new();
    }

    let store = OsFamily::detect(base_image).trust_store();
    let runtime = Runtime::detect(base_image);

    let filenames: Vec<String> = cert_paths
        .iter()
        .enumerate()
        .map(|(i, path)| certificate_filename_in_build_context(path.as_ref(), i))
        .collect();

    let mut commands: Vec<String> = filenames
        .iter()
        .map(|name| format!("cp {}/{} {}", CERT_STAGING_DIR, name, store.anchor_dir))
        .collect();

    commands.push(store.update_command.to_string());

    if runtime == Runtime::Java {
        commands.extend(java_import_commands(&filenames));
    }

    debug!(
        "Generated {} install commands for {} certificate(s) on {}",
        commands.len(),
        cert_paths.len(),
        base_image
    );
    commands
}

/// Name of the certificate at `index` once copied into the build context.
///
/// The index prefix keeps names distinct when two paths share a filename.
pub fn certificate_filename_in_build_context(cert_path: &str, index: usize) -> String {
    let name = Path::new(cert_path)
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    format!("{}{}-{}", BUILD_CONTEXT_PREFIX, index, name)
}

/// Generate the copy pairs that place `cert_paths` under `target_dir`.
///
/// The source of each pair is the build-context filename, not the original
/// path: the build file is expected to reference files relative to its
/// context.
pub fn generate_copy_cert_entries<S: AsRef<str>>(
    cert_paths: &[S],
    target_dir: &str,
) -> Vec<CopyCertEntry> {
    cert_paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let name = certificate_filename_in_build_context(path.as_ref(), i);
            let destination = format!("{}/{}", target_dir, name);
            CopyCertEntry::new(name, destination)
        })
        .collect()
}

/// One `keytool` import per certificate. Each tries the JDK 9+ store, then the
/// JDK 8 store, and never fails the build.
fn java_import_commands(filenames: &[String]) -> Vec<String> {
    filenames
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let alias = format!("{}{}", java::ALIAS_PREFIX, i);
            let import = |keystore: &str| {
                format!(
                    "keytool -importcert -noprompt -trustcacerts -alias {} -file {}/{} -keystore {} -storepass {}",
                    alias,
                    CERT_STAGING_DIR,
                    name,
                    keystore,
                    java::STORE_PASSWORD
                )
            };
            format!(
                "{} || {} || true",
                import(java::CACERTS),
                import(java::LEGACY_CACERTS)
            )
        })
        .collect()
}
