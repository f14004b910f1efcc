//! Page CLI commands

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::Document;
use crate::storage;

pub fn save(output: &Output, dir: &Path, title: &str, body: Option<String>) -> Result<()> {
    let body = match body {
        Some(body) => body.into_bytes(),
        None => {
            output.verbose_ctx("save", "Reading body from stdin");
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read page body from stdin")?;
            buf
        }
    };

    let doc = Document::new(title, body);
    let path = storage::path_in(dir, &doc.title);
    output.verbose_ctx("save", &format!("Writing {} bytes to {}", doc.body.len(), path.display()));
    if doc.is_empty() {
        output.verbose_ctx("save", "Body is empty, page file will be truncated");
    }

    storage::save_in(dir, &doc)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "title": doc.title,
            "path": path.display().to_string(),
            "bytes": doc.body.len(),
        }));
    } else {
        output.success(&format!("Saved page: {} ({} bytes)", doc.title, doc.body.len()));
    }

    Ok(())
}

pub fn load(output: &Output, dir: &Path, title: &str) -> Result<()> {
    output.verbose_ctx("load", &format!("Reading {}", storage::path_in(dir, title).display()));

    let doc = storage::load_from(dir, title)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "title": doc.title,
            "body": doc.body_text(),
            "bytes": doc.body.len(),
        }));
    } else {
        output
            .raw(&doc.body)
            .context("Failed to write page body to stdout")?;
    }

    Ok(())
}

pub fn list(output: &Output, dir: &Path) -> Result<()> {
    let titles = storage::list_in(dir)?;
    output.verbose_ctx("list", &format!("Found {} pages", titles.len()));

    if output.is_json() {
        output.data(&titles);
    } else if titles.is_empty() {
        println!("No pages found.");
    } else {
        for title in &titles {
            println!("{}", title);
        }
    }

    Ok(())
}

pub fn exists(output: &Output, dir: &Path, title: &str) -> Result<()> {
    let exists = storage::exists_in(dir, title);

    if output.is_json() {
        output.data(&serde_json::json!({
            "title": title,
            "exists": exists,
        }));
    } else if exists {
        println!("Page exists: {}", title);
    } else {
        println!("Page not found: {}", title);
    }

    Ok(())
}
