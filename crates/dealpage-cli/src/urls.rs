//! URL source resolution: command-line arguments first, then a url.txt-style
//! file, one URL per line.

use std::path::Path;

use anyhow::{bail, Context};

/// Returns the URLs to scrape. Arguments win outright; the file is only
/// consulted when no arguments were given. Blank lines and surrounding
/// whitespace in the file are ignored.
///
/// # Errors
///
/// Fails when neither source yields any URL, or the file exists but cannot
/// be read.
pub fn resolve_urls(args: &[String], url_file: &Path) -> anyhow::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    if url_file.exists() {
        let content = std::fs::read_to_string(url_file)
            .with_context(|| format!("failed to read {}", url_file.display()))?;
        let urls: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        if !urls.is_empty() {
            return Ok(urls);
        }
    }

    bail!(
        "no URLs given: pass them as arguments or list them in {}",
        url_file.display()
    )
}
