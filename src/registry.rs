use std::collections::BTreeSet;
use std::sync::{LazyLock, PoisonError, RwLock};

use crate::scheme::DEFAULT_SCHEMES;

/// Hosts recognized without a scheme out of the box
pub const DEFAULT_HOSTS: &[&str] = &["localhost"];

/// Recognized schemes and bare host names.
///
/// A registry decides which `scheme:` prefixes count as known schemes and
/// which scheme-less host names are accepted as URLs. Entries are stored
/// lowercased.
///
/// The process-wide instance is changed with [`add_scheme`], [`add_host`]
/// and friends and is used by [`UrlInfo::parse`](crate::UrlInfo::parse).
/// Tests and applications that need isolation pass their own instance to
/// [`UrlInfo::parse_with`](crate::UrlInfo::parse_with).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RegistryConfig"))]
pub struct Registry {
    schemes: BTreeSet<String>,
    hosts: BTreeSet<String>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            schemes: DEFAULT_SCHEMES.iter().map(|s| (*s).to_string()).collect(),
            hosts: DEFAULT_HOSTS.iter().map(|h| (*h).to_string()).collect(),
        }
    }
}

impl Registry {
    /// Registry with the default schemes and hosts
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that recognizes nothing
    pub fn empty() -> Self {
        Self {
            schemes: BTreeSet::new(),
            hosts: BTreeSet::new(),
        }
    }

    pub fn add_scheme(&mut self, scheme: &str) {
        self.schemes.insert(scheme.to_ascii_lowercase());
    }

    pub fn remove_scheme(&mut self, scheme: &str) {
        self.schemes.remove(&scheme.to_ascii_lowercase());
    }

    pub fn has_scheme(&self, scheme: &str) -> bool {
        self.schemes.contains(&scheme.to_ascii_lowercase())
    }

    pub fn add_host(&mut self, host: &str) {
        self.hosts.insert(host.to_lowercase());
    }

    pub fn remove_host(&mut self, host: &str) {
        self.hosts.remove(&host.to_lowercase());
    }

    pub fn has_host(&self, host: &str) -> bool {
        self.hosts.contains(&host.to_lowercase())
    }

    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(String::as_str)
    }

    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(String::as_str)
    }
}

/// Serialized shape of a [`Registry`]; entries are lowercased on load.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RegistryConfig {
    #[serde(default)]
    schemes: Vec<String>,
    #[serde(default)]
    hosts: Vec<String>,
}

#[cfg(feature = "serde")]
impl From<RegistryConfig> for Registry {
    fn from(config: RegistryConfig) -> Self {
        let mut registry = Self::empty();
        config.schemes.iter().for_each(|s| registry.add_scheme(s));
        config.hosts.iter().for_each(|h| registry.add_host(h));
        registry
    }
}

static GLOBAL: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::new()));

/// Run `f` against the process-wide registry
pub(crate) fn with_global<T>(f: impl FnOnce(&Registry) -> T) -> T {
    let guard = GLOBAL.read().unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

fn update_global(f: impl FnOnce(&mut Registry)) {
    let mut guard = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard);
}

/// Recognize `scheme` in every URL parsed from now on
pub fn add_scheme(scheme: &str) {
    tracing::debug!(scheme, "registering URL scheme");
    update_global(|registry| registry.add_scheme(scheme));
}

/// Stop recognizing `scheme` in URLs parsed from now on
pub fn remove_scheme(scheme: &str) {
    tracing::debug!(scheme, "removing URL scheme");
    update_global(|registry| registry.remove_scheme(scheme));
}

/// Accept `host` without a scheme in every URL parsed from now on
pub fn add_host(host: &str) {
    tracing::debug!(host, "registering bare host");
    update_global(|registry| registry.add_host(host));
}

/// Stop accepting `host` without a scheme
pub fn remove_host(host: &str) {
    tracing::debug!(host, "removing bare host");
    update_global(|registry| registry.remove_host(host));
}

/// Restore the process-wide registry to its defaults
pub fn reset_registry() {
    tracing::debug!("resetting URL registry");
    update_global(|registry| *registry = Registry::new());
}

/// Copy of the process-wide registry
pub fn global_registry() -> Registry {
    with_global(Clone::clone)
}
