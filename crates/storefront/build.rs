//! Build script for the storefront crate.
//!
//! Generates a content-based hash for the main stylesheet so templates can
//! emit cache-busted asset URLs.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    hash_css();
}

/// Hash main.css and expose the short hash as `CSS_HASH`.
///
/// Templates read it via `env!("CSS_HASH")` through the `css_hash` filter.
fn hash_css() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_path = Path::new(&manifest_dir).join("static/css/main.css");

    // Tell Cargo to rerun if main.css changes
    println!("cargo:rerun-if-changed={}", css_path.display());

    let content = match fs::read(&css_path) {
        Ok(content) => content,
        Err(e) => {
            // CSS might not exist yet during initial build
            println!("cargo:warning=Could not read main.css: {e}");
            println!("cargo:rustc-env=CSS_HASH=");
            return;
        }
    };

    // First 8 chars of SHA256 are plenty for cache busting
    let mut hasher = Sha256::new();
    hasher.update(&content);
    let hash = format!("{:x}", hasher.finalize());
    let short_hash = hash.get(..8).unwrap_or_default();

    println!("cargo:rustc-env=CSS_HASH={short_hash}");
}
