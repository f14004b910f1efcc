//! Demo run used when no subcommand is given
//!
//! Saves a fixed page, loads it back by title and prints the body.

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::domain::Document;
use crate::storage::{self, StoreError};

const DEMO_TITLE: &str = "TestPage";
const DEMO_BODY: &str = "This is a test page";

pub fn run(output: &Output, dir: &Path) -> Result<()> {
    let page = Document::new(DEMO_TITLE, DEMO_BODY);
    storage::save_in(dir, &page)?;
    output.verbose_ctx("demo", &format!("Saved {}", storage::path_in(dir, DEMO_TITLE).display()));

    print_loaded(output, storage::load_from(dir, DEMO_TITLE))
}

/// Prints a loaded page, or reports the load error without failing the run
fn print_loaded(output: &Output, loaded: Result<Document, StoreError>) -> Result<()> {
    let Some(doc) = take_loaded(output, loaded) else {
        return Ok(());
    };

    if output.is_json() {
        output.data(&serde_json::json!({
            "title": doc.title,
            "body": doc.body_text(),
        }));
    } else {
        println!("{}", doc.body_text());
    }

    Ok(())
}

/// Unwraps a load result, reporting any error on stderr
fn take_loaded(output: &Output, loaded: Result<Document, StoreError>) -> Option<Document> {
    match loaded {
        Ok(doc) => Some(doc),
        Err(e) if e.is_not_found() => {
            output.error(&format!("Page not found: {}", e.path().display()));
            None
        }
        Err(e) => {
            output.error(&format!("{:#}", anyhow::Error::from(e)));
            None
        }
    }
}
