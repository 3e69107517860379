//! Configuration fingerprinting.
//!
//! Generated distributions are stamped with a SHA-256 fingerprint of the
//! taxonomy that validated them, so persisted data records which catalog
//! version it complied with and regeneration tooling can detect drift.

use sha2::{Digest, Sha256};

use crate::catalog;
use crate::categories::all_providers;
use crate::types::CatalogKey;

/// Compute the fingerprint of the entire taxonomy (catalog lists plus
/// category configurations), as lowercase hex.
///
/// Deterministic: iteration follows the fixed enum orders, and entries are
/// NUL-separated so list boundaries cannot collide.
pub fn catalog_fingerprint() -> String {
    let mut hasher = Sha256::new();

    for key in CatalogKey::all() {
        hasher.update(key.as_str().as_bytes());
        hasher.update([0u8]);
        for option in catalog::options(*key) {
            hasher.update(option.as_bytes());
            hasher.update([0u8]);
        }
    }

    for provider in all_providers() {
        let config = provider.config();
        hasher.update(config.category.as_str().as_bytes());
        hasher.update([0u8]);
        for field in config.required_fields {
            hasher.update(field.as_str().as_bytes());
            hasher.update([0u8]);
        }
        for (field, key) in config.dropdowns {
            hasher.update(field.as_str().as_bytes());
            hasher.update([1u8]);
            hasher.update(key.as_str().as_bytes());
            hasher.update([0u8]);
        }
        for source in config.context_sources {
            hasher.update(source.as_bytes());
            hasher.update([0u8]);
        }
    }

    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_deterministic() {
        let a = catalog_fingerprint();
        let b = catalog_fingerprint();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
