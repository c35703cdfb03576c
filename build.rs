//! Build script for chartbridge.
//!
//! Copies the `.env.example` template to the local data directory
//! (`<data_local_dir>/chartbridge/`), next to where the service and the CLI
//! look for their `.env` file. A missing template only produces a warning.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("chartbridge");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    // Read-only build sandboxes are not an error.
    if fs::create_dir_all(&out_dir).is_err() {
        println!("cargo:warning=cannot create {}", out_dir.display());
        return Ok(());
    }

    let contents = fs::read_to_string(&env_example_path)?;
    if fs::write(out_dir.join(".env.example"), contents).is_err() {
        println!("cargo:warning=cannot write template to {}", out_dir.display());
    }

    Ok(())
}
