//! CSV scenario loader.
//!
//! # CSV format
//!
//! One row per entity.  Every column after `kind` may be left empty.
//!
//! ```csv
//! id,kind,x,y,z,vx,vy,vz,radius,angle_x,angle_y,interval
//! 0,ground,0,0,0,1,0,0,,,,1.0
//! 1,uav,0,0,120,5,5,0,,,,0.5
//! 2,balloon,300,0,20000,,,,,,,
//! 3,space,,,,0,0.001,0,6771000,0,0,default
//! ```
//!
//! | Column              | Meaning                                                 |
//! |---------------------|---------------------------------------------------------|
//! | `kind`              | `uav`, `balloon`, `haps`, `ground`, or `space`          |
//! | `x`,`y`,`z`         | Initial Cartesian position; blank components are 0.  Must be blank for `space`. |
//! | `vx`,`vy`,`vz`      | Initial velocity (angular rates in rad/s for `space`)   |
//! | `radius`            | Orbital radius for `space`; blank uses the config default |
//! | `angle_x`,`angle_y` | Initial orbital angles for `space`                      |
//! | `interval`          | Seconds between updates, `default`, or blank for none   |

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sg_core::{EntityId, EntityKind, SimConfig, Vector3};

use crate::{Entity, EntityBuilder, NodeError, NodeResult, UpdateInterval};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EntityRecord {
    id:       u32,
    kind:     String,
    x:        Option<f64>,
    y:        Option<f64>,
    z:        Option<f64>,
    vx:       Option<f64>,
    vy:       Option<f64>,
    vz:       Option<f64>,
    radius:   Option<f64>,
    angle_x:  Option<f64>,
    angle_y:  Option<f64>,
    interval: Option<String>,
}

/// One loaded entity plus the update interval it should start with.
#[derive(Clone, Debug)]
pub struct ScenarioEntry {
    pub entity:   Entity,
    /// `None` if the row left `interval` blank (no periodic updates).
    pub interval: Option<UpdateInterval>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a scenario from a CSV file.
///
/// Rows are returned in file order.  Duplicate ids are not rejected here;
/// the simulation's entity table does that when the entries are added.
pub fn load_scenario_csv(path: &Path, config: &SimConfig) -> NodeResult<Vec<ScenarioEntry>> {
    let file = std::fs::File::open(path)?;
    load_scenario_reader(file, config)
}

/// Like [`load_scenario_csv`] but accepts any `Read` source.
pub fn load_scenario_reader<R: Read>(reader: R, config: &SimConfig) -> NodeResult<Vec<ScenarioEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut entries = Vec::new();

    for (i, result) in csv_reader.deserialize::<EntityRecord>().enumerate() {
        // Line 1 is the header.
        let line = i + 2;
        let entry = result
            .map_err(|e| NodeError::Parse(e.to_string()))
            .and_then(|row| build_entry(row, config))
            .map_err(|e| NodeError::Row { line, source: Box::new(e) })?;
        entries.push(entry);
    }

    Ok(entries)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn build_entry(row: EntityRecord, config: &SimConfig) -> NodeResult<ScenarioEntry> {
    let kind: EntityKind = row.kind.parse().map_err(NodeError::Parse)?;
    let mut builder = EntityBuilder::new(EntityId(row.id), kind)
        .radius(row.radius.unwrap_or(config.default_orbit_radius));

    if row.x.is_some() || row.y.is_some() || row.z.is_some() {
        builder = builder.position(Vector3::new(
            row.x.unwrap_or(0.0),
            row.y.unwrap_or(0.0),
            row.z.unwrap_or(0.0),
        ));
    }
    if row.vx.is_some() || row.vy.is_some() || row.vz.is_some() {
        builder = builder.velocity(Vector3::new(
            row.vx.unwrap_or(0.0),
            row.vy.unwrap_or(0.0),
            row.vz.unwrap_or(0.0),
        ));
    }
    if row.angle_x.is_some() || row.angle_y.is_some() {
        builder = builder.angles(row.angle_x.unwrap_or(0.0), row.angle_y.unwrap_or(0.0));
    }

    let interval = parse_interval(row.interval.as_deref(), config)?;
    Ok(ScenarioEntry { entity: builder.build()?, interval })
}

fn parse_interval(s: Option<&str>, config: &SimConfig) -> NodeResult<Option<UpdateInterval>> {
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some("default") => UpdateInterval::from_secs(config.default_update_interval_secs).map(Some),
        Some(n) => {
            let secs = n.parse::<f64>().map_err(|_| {
                NodeError::Parse(format!(
                    "invalid interval {n:?}: expected seconds, \"default\", or blank"
                ))
            })?;
            UpdateInterval::from_secs(secs).map(Some)
        }
    }
}
