//! Avatar lookup for target names
//!
//! The avatar is only a visual hint shown next to the board. Resolution never
//! blocks a round: any failure is `None` and play continues without one.

use crate::names;
use tracing::debug;

/// Suffix appended to bare names
pub const ENS_SUFFIX: &str = ".eth";

/// Base URL of the public ENS metadata service
pub const METADATA_AVATAR_BASE: &str = "https://metadata.ens.domains/mainnet/avatar";

const MIN_LABEL_LEN: usize = 3;
const MAX_LABEL_LEN: usize = 63;

/// Finds the avatar image for a name
pub trait AvatarResolver {
    /// Image URL for `name`, `None` if it has none or lookup failed
    fn resolve_avatar(&self, name: &str) -> Option<String>;
}

/// Builds metadata-service URLs for curated names flagged as having an avatar
///
/// No network I/O is done; the URL is returned as-is for the presentation
/// layer to fetch.
#[derive(Debug, Clone)]
pub struct MetadataResolver {
    base_url: String,
}

impl MetadataResolver {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for MetadataResolver {
    fn default() -> Self {
        Self::new(METADATA_AVATAR_BASE)
    }
}

impl AvatarResolver for MetadataResolver {
    fn resolve_avatar(&self, name: &str) -> Option<String> {
        let full = full_name(name);
        if !is_valid_ens_name(&full) {
            debug!(name, "not a valid ENS name, skipping avatar");
            return None;
        }

        let label = full.strip_suffix(ENS_SUFFIX).unwrap_or(&full);
        match names::metadata(label) {
            Some(entry) if entry.has_avatar => {
                let url = format!(
                    "{}/{}",
                    self.base_url.trim_end_matches('/'),
                    full.to_ascii_lowercase()
                );
                debug!(name = %full, %url, "avatar resolved");
                Some(url)
            }
            _ => {
                debug!(name = %full, "no avatar known");
                None
            }
        }
    }
}

/// Resolver for running without avatars
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAvatar;

impl AvatarResolver for NoAvatar {
    fn resolve_avatar(&self, _name: &str) -> Option<String> {
        None
    }
}

/// `name` with `.eth` appended unless it already has a dot
#[must_use]
pub fn full_name(name: &str) -> String {
    if name.contains('.') {
        name.to_string()
    } else {
        format!("{name}{ENS_SUFFIX}")
    }
}

/// Whether `name` is a well-formed ENS label, with or without `.eth`
///
/// The label must be 3 to 63 characters of ASCII letters, digits, or hyphens,
/// and must not start or end with a hyphen.
#[must_use]
pub fn is_valid_ens_name(name: &str) -> bool {
    let label = name.strip_suffix(ENS_SUFFIX).unwrap_or(name);

    (MIN_LABEL_LEN..=MAX_LABEL_LEN).contains(&label.len())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}
