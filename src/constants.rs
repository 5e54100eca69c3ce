/// Base image name fragments used to classify the operating system family.
///
/// Matching is case-insensitive and by substring, so `"node:16-alpine"` and
/// `"registry.access.redhat.com/ubi8/openjdk-11"` both classify.
pub mod pattern {
    /// Alpine Linux
    pub const ALPINE: &[&str] = &["alpine"];

    /// Debian and Ubuntu
    pub const DEBIAN_UBUNTU: &[&str] = &["debian", "ubuntu"];

    /// Red Hat family (RHEL, UBI, CentOS, Fedora)
    pub const REDHAT: &[&str] = &["rhel", "ubi", "centos", "fedora"];

    /// Images that ship a JVM
    pub const JAVA: &[&str] = &["java", "openjdk", "jdk", "jre", "eclipse-temurin"];
}

/// System trust store locations
pub mod trust {
    /// Anchor directory read by `update-ca-certificates`
    pub const CA_CERTIFICATES_DIR: &str = "/usr/local/share/ca-certificates/";

    /// Anchor directory read by `update-ca-trust`
    pub const CA_TRUST_ANCHORS_DIR: &str = "/etc/pki/ca-trust/source/anchors/";

    pub const UPDATE_CA_CERTIFICATES: &str = "update-ca-certificates";

    pub const UPDATE_CA_TRUST: &str = "update-ca-trust";
}

/// Java truststore import settings
pub mod java {
    /// Prefix of the alias given to each imported certificate
    pub const ALIAS_PREFIX: &str = "jkube-cert-";

    /// Default password of the JDK `cacerts` store
    pub const STORE_PASSWORD: &str = "changeit";

    /// `cacerts` location on JDK 9 and later
    pub const CACERTS: &str = "$JAVA_HOME/lib/security/cacerts";

    /// `cacerts` location on JDK 8 and earlier
    pub const LEGACY_CACERTS: &str = "$JAVA_HOME/jre/lib/security/cacerts";
}

/// Directory inside the image where certificates are staged before install
pub const CERT_STAGING_DIR: &str = "/tmp/certs";

/// Prefix of every certificate filename in the build context
pub const BUILD_CONTEXT_PREFIX: &str = "cert-";
