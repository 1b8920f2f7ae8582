//! Behavior file validation

use anyhow::Result;
use clap::Args;
use log::info;
use particle_behaviors::EmitterBehavior;
use std::path::PathBuf;

use super::load_behavior_set;
use crate::utils::{add_table_row, create_table};

#[derive(Args)]
pub struct ValidateArgs {
    /// Behavior file (.json, .yaml or .yml)
    pub file: PathBuf,
}

pub fn execute(args: &ValidateArgs) -> Result<()> {
    let set = load_behavior_set(&args.file)?;
    info!("Validated {}", args.file.display());

    let mut table = create_table(&["#", "Type", "Tier", "Update", "Scratch"]);
    for (index, behavior) in set.iter().enumerate() {
        add_table_row(
            &mut table,
            vec![
                index.to_string(),
                behavior.type_key().to_string(),
                behavior.order().to_string(),
                if behavior.has_update() { "yes" } else { "no" }.to_string(),
                behavior.scratch_slots().to_string(),
            ],
        );
    }
    table.printstd();

    println!(
        "{}: {} behavior(s), {} scratch slot(s) in use",
        args.file.display(),
        set.len(),
        set.scratch_used()
    );
    Ok(())
}
