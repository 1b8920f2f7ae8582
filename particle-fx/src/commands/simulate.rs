//! Headless simulation of a behavior file

use anyhow::{Context, Result};
use clap::Args;
use log::{debug, info};
use particle_behaviors::{Particle, ParticlePool, ParticleRng};
use serde::Serialize;
use std::path::PathBuf;

use super::load_behavior_set;
use crate::utils::{add_table_row, create_table, format_value};

#[derive(Args)]
pub struct SimulateArgs {
    /// Behavior file (.json, .yaml or .yml)
    pub file: PathBuf,

    /// Particles to spawn
    #[arg(short = 'n', long, default_value_t = 8)]
    pub particles: usize,

    /// Lifetime of each particle in seconds
    #[arg(short, long, default_value_t = 1.0)]
    pub lifetime: f32,

    /// Frames to run after spawning
    #[arg(short, long, default_value_t = 30)]
    pub frames: u32,

    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Random seed
    #[arg(short, long, default_value_t = 1, env = "PARTICLE_FX_SEED")]
    pub seed: u64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    frames: u32,
    elapsed: f32,
    spawned: usize,
    expired: usize,
    particles: Vec<ParticleSnapshot>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ParticleSnapshot {
    age: f32,
    age_percent: f32,
    alpha: f32,
    scale: [f32; 2],
    position: [f32; 2],
    tint: [f32; 3],
}

impl From<&Particle> for ParticleSnapshot {
    fn from(particle: &Particle) -> Self {
        Self {
            age: particle.age,
            age_percent: particle.age_percent,
            alpha: particle.alpha,
            scale: particle.scale.to_array(),
            position: particle.position.to_array(),
            tint: particle.tint.to_array(),
        }
    }
}

pub fn execute(args: &SimulateArgs) -> Result<()> {
    anyhow::ensure!(
        args.lifetime.is_finite() && args.lifetime > 0.0,
        "Lifetime must be a positive number of seconds"
    );
    anyhow::ensure!(
        args.dt.is_finite() && args.dt >= 0.0,
        "Frame time must be zero or positive"
    );

    let set = load_behavior_set(&args.file)?;
    let mut pool = ParticlePool::with_capacity(args.particles);
    let mut rng = ParticleRng::new(args.seed);

    let spawned = set
        .spawn(&mut pool, args.particles, args.lifetime, &mut rng)
        .context("Failed to spawn particles")?;
    info!("Spawned {spawned} particle(s) with seed {}", args.seed);

    let mut expired = 0;
    for frame in 0..args.frames {
        let removed = set.step(&mut pool, args.dt);
        if removed > 0 {
            debug!("Frame {frame}: {removed} particle(s) expired");
        }
        expired += removed;
    }

    let report = SimulationReport {
        frames: args.frames,
        elapsed: args.frames as f32 * args.dt,
        spawned,
        expired,
        particles: pool.iter_live().map(ParticleSnapshot::from).collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &SimulationReport) {
    let mut table = create_table(&["#", "Age %", "Alpha", "Scale", "Position", "Tint"]);
    for (index, p) in report.particles.iter().enumerate() {
        add_table_row(
            &mut table,
            vec![
                index.to_string(),
                format_value(p.age_percent * 100.0),
                format_value(p.alpha),
                format!("{}, {}", format_value(p.scale[0]), format_value(p.scale[1])),
                format!("{}, {}", p.position[0], p.position[1]),
                format!(
                    "{}, {}, {}",
                    format_value(p.tint[0]),
                    format_value(p.tint[1]),
                    format_value(p.tint[2])
                ),
            ],
        );
    }
    table.printstd();

    println!(
        "{} frame(s), {}s elapsed: {} spawned, {} expired, {} live",
        report.frames,
        format_value(report.elapsed),
        report.spawned,
        report.expired,
        report.particles.len()
    );
}
