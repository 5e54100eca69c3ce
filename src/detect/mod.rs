//! Base image classification
//!
//! Works purely on the image reference string. Nothing is pulled or inspected.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::constants::{pattern, trust};


/// Operating system family of a base image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OsFamily {
    Alpine,
    DebianUbuntu,
    RedHat,
    Unknown,
}

/// Runtime shipped in a base image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    Java,
    Generic,
}

/// Where CA certificates go and how the system store is refreshed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrustStore {
    pub anchor_dir: &'static str,
    pub update_command: &'static str,
}

const CA_CERTIFICATES: TrustStore = TrustStore {
    anchor_dir: trust::CA_CERTIFICATES_DIR,
    update_command: trust::UPDATE_CA_CERTIFICATES,
};

const CA_TRUST: TrustStore = TrustStore {
    anchor_dir: trust::CA_TRUST_ANCHORS_DIR,
    update_command: trust::UPDATE_CA_TRUST,
};

fn matches_any(base_image: &str, fragments: &[&str]) -> bool {
    let image = base_image.to_ascii_lowercase();
    fragments.iter().any(|fragment| image.contains(fragment))
}

impl OsFamily {
    /// Classify a base image reference. The first matching family wins, in
    /// the order Alpine, Debian/Ubuntu, Red Hat.
    pub fn detect(base_image: &str) -> Self {
        let family = if matches_any(base_image, pattern::ALPINE) {
            OsFamily::Alpine
        } else if matches_any(base_image, pattern::DEBIAN_UBUNTU) {
            OsFamily::DebianUbuntu
        } else if matches_any(base_image, pattern::REDHAT) {
            OsFamily::RedHat
        } else {
            OsFamily::Unknown
        };
        debug!("Detected OS family {} for base image {:?}", family, base_image);
        family
    }

    /// Unknown images are treated like Debian, the most common base.
    pub fn trust_store(self) -> TrustStore {
        match self {
            OsFamily::Alpine | OsFamily::DebianUbuntu | OsFamily::Unknown => CA_CERTIFICATES,
            OsFamily::RedHat => CA_TRUST,
        }
    }
}

impl Runtime {
    pub fn detect(base_image: &str) -> Self {
        let runtime = if matches_any(base_image, pattern::JAVA) {
            Runtime::Java
        } else {
            Runtime::Generic
        };
        debug!("Detected runtime {} for base image {:?}", runtime, base_image);
        runtime
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsFamily::Alpine => "alpine",
            OsFamily::DebianUbuntu => "debian-ubuntu",
            OsFamily::RedHat => "red-hat",
            OsFamily::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runtime::Java => f.write_str("java"),
            Runtime::Generic => f.write_str("generic"),
        }
    }
}
