//! Dockerfile instructions for CA certificate installation

use tracing::debug;

use crate::certs::{generate_cert_install_commands, generate_copy_cert_entries};
use crate::constants::CERT_STAGING_DIR;


/// `&&` and `||` share precedence, so an `a || b` command must be grouped or a
/// trailing `|| true` would swallow failures of everything joined before it.
fn shell_group(command: &str) -> String {
    if command.contains("||") {
        format!("{{ {}; }}", command)
    } else {
        command.to_string()
    }
}

/// Render the `COPY` and `RUN` instructions that install `cert_paths` into an
/// image built from `base_image`.
///
/// Certificates are copied into the staging directory the install commands
/// read from, then installed in a single `RUN` layer. The caller is
/// responsible for placing the files into the build context under the names
/// used as `COPY` sources.
pub fn render_cert_instructions<S: AsRef<str>>(
    base_image: Option<&str>,
    cert_paths: &[S],
) -> Vec<String> {
    let commands = generate_cert_install_commands(base_image, cert_paths);
    if commands.is_empty() {
        return Vec::new();
    }

    let mut instructions: Vec<String> = generate_copy_cert_entries(cert_paths, CERT_STAGING_DIR)
        .iter()
        .map(|entry| format!("COPY {} {}", entry.source(), entry.destination()))
        .collect();
    let run = commands
        .iter()
        .map(|command| shell_group(command))
        .collect::<Vec<_>>()
        .join(" && ");
    instructions.push(format!("RUN {}", run));

    debug!("Rendered {} Dockerfile instructions", instructions.len());
    instructions
}
