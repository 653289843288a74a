//! Node files and report output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dubins_cost::Configuration;
use serde::{Deserialize, Serialize};

/// One node as stored on disk: position plus compass heading (radians).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl From<NodeRecord> for Configuration {
    fn from(n: NodeRecord) -> Self {
        Configuration::new(n.x, n.y, n.heading)
    }
}

impl From<Configuration> for NodeRecord {
    fn from(c: Configuration) -> Self {
        Self {
            x: c.x,
            y: c.y,
            heading: c.heading,
        }
    }
}

/// Read a JSON array of `{x, y, heading}` objects.
pub fn load_nodes(path: &Path) -> Result<Vec<Configuration>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<NodeRecord> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing node list {}", path.display()))?;
    Ok(records.into_iter().map(Configuration::from).collect())
}

pub fn save_nodes(path: &Path, nodes: &[Configuration]) -> Result<()> {
    let records: Vec<NodeRecord> = nodes.iter().copied().map(NodeRecord::from).collect();
    write_json(path, &records)
}

/// Pretty-print `value` to `path`, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Parse `x,y,heading` from the command line.
pub fn parse_configuration(s: &str) -> Result<Configuration, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,heading but got {s:?}"));
    }
    let mut vals = [0.0f64; 3];
    for (v, p) in vals.iter_mut().zip(&parts) {
        *v = p
            .parse()
            .map_err(|e| format!("bad number {p:?} in {s:?}: {e}"))?;
    }
    Ok(Configuration::new(vals[0], vals[1], vals[2]))
}
