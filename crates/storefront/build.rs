//! Build script for the storefront crate.
//!
//! Fingerprints `static/css/main.css` so the stylesheet can be served with
//! far-future cache headers under a content-addressed name.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Hex characters of the SHA-256 digest kept in the file name.
const HASH_LEN: usize = 8;

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo"));
    let css_dir = manifest_dir.join("static/css");
    let css_path = css_dir.join("main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    let Ok(content) = fs::read(&css_path) else {
        println!("cargo:warning=Could not read {}", css_path.display());
        println!("cargo:rustc-env=CSS_HASH=");
        return;
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short_hash = digest.get(..HASH_LEN).unwrap_or(&digest);
    println!("cargo:rustc-env=CSS_HASH={short_hash}");

    let derived_dir = css_dir.join("derived");
    fs::create_dir_all(&derived_dir).expect("Failed to create derived CSS directory");
    remove_stale(&derived_dir, short_hash);

    let derived_path = derived_dir.join(format!("main.{short_hash}.css"));
    fs::copy(&css_path, &derived_path).expect("Failed to copy CSS to derived directory");
}

/// Delete fingerprinted copies left over from earlier builds.
fn remove_stale(derived_dir: &Path, current_hash: &str) {
    let current = format!("main.{current_hash}.css");
    let Ok(entries) = fs::read_dir(derived_dir) else {
        return;
    };

    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("main.") && name.ends_with(".css") && name != current {
            let _ = fs::remove_file(entry.path());
        }
    }
}
