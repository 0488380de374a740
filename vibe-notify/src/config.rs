//! Which controller we talk to, and where it listens

/// The two notifier flavours. They share the route table shape and differ in
/// naming, default port, the "needs attention" label and the custom message
/// actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `ble-notify`, talks to the BLE controller
    Ble,
    /// `vibekeys-notify`, talks to the VibeKeys controller
    VibeKeys,
}

impl Variant {
    pub(crate) fn program(&self) -> &'static str {
        match self {
            Variant::Ble => "ble-notify",
            Variant::VibeKeys => "vibekeys-notify",
        }
    }

    /// Environment variable holding the base URL override
    pub(crate) fn url_env(&self) -> &'static str {
        match self {
            Variant::Ble => "BLE_URL",
            Variant::VibeKeys => "VIBEKEYS_APP_URL",
        }
    }

    pub(crate) fn default_url(&self) -> &'static str {
        match self {
            Variant::Ble => "http://127.0.0.1:3000",
            Variant::VibeKeys => "http://127.0.0.1:57001",
        }
    }
}

/// Resolved once at start-up and handed to the notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub variant: Variant,
    /// Base URL without a trailing slash
    pub base_url: String,
}

impl Config {
    pub fn new(variant: Variant, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            variant,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from the variant's environment variable
    pub fn from_env(variant: Variant) -> Self {
        Self::from_lookup(variant, |key| std::env::var(key).ok())
    }

    /// An unset or empty value falls back to the variant default, same as
    /// `${VAR:-default}` in a shell.
    pub fn from_lookup<F>(variant: Variant, lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let base_url = lookup(variant.url_env())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| variant.default_url().to_string());
        Self::new(variant, base_url)
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
