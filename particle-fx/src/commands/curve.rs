//! Curve sampling from command-line keyframes

use anyhow::{Context, Result};
use clap::Args;
use particle_behaviors::{Curve, Keyframe};

use crate::utils::{add_table_row, create_table, format_value};

#[derive(Args)]
pub struct CurveArgs {
    /// Keyframe as VALUE@TIME, repeat in time order (e.g. -k 0@0 -k 1@0.25 -k 0@1)
    #[arg(
        short,
        long = "key",
        value_name = "VALUE@TIME",
        value_parser = parse_keyframe,
        allow_hyphen_values = true,
        required = true
    )]
    pub keys: Vec<Keyframe<f32>>,

    /// Hold each key's value until the next one instead of blending
    #[arg(long)]
    pub stepped: bool,

    /// Number of intervals to sample between age 0 and 1
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub steps: u32,
}

/// Parse `VALUE@TIME`
pub fn parse_keyframe(text: &str) -> Result<Keyframe<f32>, String> {
    let (value, time) = text
        .split_once('@')
        .ok_or_else(|| format!("expected VALUE@TIME, got '{text}'"))?;
    let value: f32 = value
        .trim()
        .parse()
        .map_err(|e| format!("bad value '{value}': {e}"))?;
    let time: f32 = time
        .trim()
        .parse()
        .map_err(|e| format!("bad time '{time}': {e}"))?;
    Ok(Keyframe::new(value, time))
}

pub fn execute(args: &CurveArgs) -> Result<()> {
    let curve = Curve::new(args.keys.clone(), args.stepped).context("Invalid keyframes")?;

    let mut table = create_table(&["Age", "Value"]);
    for step in 0..=args.steps {
        let age = step as f32 / args.steps as f32;
        add_table_row(
            &mut table,
            vec![format_value(age), format_value(curve.interpolate(age))],
        );
    }
    table.printstd();
    Ok(())
}
