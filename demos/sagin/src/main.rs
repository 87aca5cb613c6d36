//! sagin — small mixed-layer mobility scenario.
//!
//! Runs one entity of every kind (UAV, HAPS, balloon, ground vehicle, LEO
//! satellite) for ten simulated minutes, stops the UAV's updates halfway
//! through, and prints the final positions.
//!
//! ```text
//! cargo run -p sagin                       # embedded scenario
//! cargo run -p sagin -- path/to/scene.csv  # scenario from disk
//! RUST_LOG=debug cargo run -p sagin        # per-update logging
//! ```

use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use sg_core::{EntityId, SimConfig, SimTime, Vector3};
use sg_mobility::MobilityStore;
use sg_node::{load_scenario_csv, load_scenario_reader};
use sg_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SIM_SECS:        f64 = 600.0;
const LEO_RADIUS_M:    f64 = 6_771_000.0;
const UAV_ID:          EntityId = EntityId(0);
const GROUND_ID:       EntityId = EntityId(3);

// ── Scenario CSV ──────────────────────────────────────────────────────────────

// Positions in metres, velocities in m/s, orbital rates in rad/s.
// The satellite's rate gives a ~93 minute orbit.
const SCENARIO_CSV: &str = "\
id,kind,x,y,z,vx,vy,vz,radius,angle_x,angle_y,interval\n\
0,uav,0,0,120,12,4,0,,,,0.5\n\
1,haps,-5000,2000,20000,3,0,0,,,,default\n\
2,balloon,1500,-800,25000,2,2,0,,,,10\n\
3,ground,200,300,0,8,0,0,,,,1.0\n\
4,space,,,,0.0002,0.001126,0,6771000,0.1,0,5\n\
";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Counts updates per entity and logs each one at `debug`.
#[derive(Default)]
struct UpdateLog {
    updates: BTreeMap<EntityId, u64>,
}

impl SimObserver for UpdateLog {
    fn on_position_update(&mut self, time: SimTime, entity: EntityId, position: Vector3) {
        *self.updates.entry(entity).or_default() += 1;
        debug!(%time, %entity, %position, "update");
    }

    fn on_sim_end(&mut self, time: SimTime, store: &MobilityStore) {
        info!(%time, tracked = store.len(), "run finished");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // 1. Config.
    let config = SimConfig {
        stop_time_secs:               SIM_SECS,
        default_update_interval_secs: 2.0,
        default_orbit_radius:         LEO_RADIUS_M,
    };

    // 2. Scenario: first CLI argument, or the embedded CSV.
    let entries = match std::env::args().nth(1) {
        Some(path) => load_scenario_csv(Path::new(&path), &config)?,
        None => load_scenario_reader(Cursor::new(SCENARIO_CSV), &config)?,
    };
    info!(entities = entries.len(), "scenario loaded");

    // 3. Build; every row with an interval starts updating at t = 0.
    let mut sim = SimBuilder::new(config).scenario(entries).build()?;
    let mut obs = UpdateLog::default();

    // 4. First half.
    let t0 = Instant::now();
    sim.run_until(SimTime::from_secs_f64(SIM_SECS / 2.0), &mut obs)?;

    // 5. Halfway: ground the UAV and turn the vehicle north.
    if sim.contains(UAV_ID) {
        sim.stop_updates(UAV_ID)?;
    }
    if sim.contains(GROUND_ID) {
        sim.set_velocity(GROUND_ID, Vector3::new(0.0, 8.0, 0.0))?;
    }

    // 6. Second half.
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    // 7. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  updates applied : {}", sim.updates_fired());
    println!("  still scheduled : {}", sim.registrations());
    println!();

    println!("{:<12} {:<10} {:>8}  {}", "Entity", "Kind", "Updates", "Position");
    println!("{}", "-".repeat(72));
    for id in sim.entity_ids() {
        let kind = sim.entity(id).map(|e| e.kind().to_string()).unwrap_or_default();
        println!(
            "{:<12} {:<10} {:>8}  {}",
            id.to_string(),
            kind,
            obs.updates.get(&id).copied().unwrap_or(0),
            sim.position(id)?,
        );
    }

    Ok(())
}
