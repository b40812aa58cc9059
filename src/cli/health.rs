//! Health mode

use anyhow::Result;
use std::path::Path;

use crate::health::evaluate_health;
use crate::render::{render_health, render_health_json};

pub fn run(root: &Path, json: bool) -> Result<()> {
    let report = evaluate_health(root);

    if json {
        println!("{}", render_health_json(root, &report)?);
    } else {
        print!("{}", render_health(root, &report));
    }

    Ok(())
}
