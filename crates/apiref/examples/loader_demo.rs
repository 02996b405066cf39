//! Demonstrates the document load pipeline end to end
//!
//! Run with: cargo run --example loader_demo

use apiref::{DocumentLoader, LoadError, MemoryCache};
use std::sync::Arc;
use tempfile::TempDir;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    let petstore = dir.path().join("petstore.yaml");
    std::fs::write(
        &petstore,
        r#"
openapi: "3.0.3"
info:
  title: Pet Store
  version: "1.0.0"
  description: A sample API that uses a pet store as an example
paths: {}
"#,
    )?;

    let loader = DocumentLoader::new(Arc::new(MemoryCache::new()));

    println!("=== Loading a valid document ===");
    println!("title:       {:?}", loader.title(&petstore)?);
    println!("version:     {:?}", loader.version(&petstore)?);
    println!("description: {:?}", loader.description(&petstore)?);

    // Second load is served from the cache; same result, no re-validation.
    let reloaded = loader.load(&petstore)?;
    println!("cached reload ok: {}", reloaded.is_some());

    println!("\n=== Schema violations ===");
    let broken = dir.path().join("broken.yaml");
    std::fs::write(
        &broken,
        "openapi: \"3.0.3\"\ninfo:\n  title: No Version\npaths: {}\n",
    )?;

    match loader.load(&broken) {
        Err(LoadError::SchemaValidation(validation)) => {
            for violation in &validation.violations {
                println!("  {}", violation);
            }
        }
        other => println!("unexpected outcome: {other:?}"),
    }

    println!("\n=== Not this version ===");
    let asyncapi = dir.path().join("other.yaml");
    std::fs::write(&asyncapi, "asyncapi: \"2.6.0\"\ninfo: {}\n")?;
    println!("claimed: {:?}", loader.load(&asyncapi)?.is_some());

    Ok(())
}
