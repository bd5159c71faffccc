//! Loading a [`FloorSet`] from JSON.
//!
//! The building layout is authored as one JSON document:
//!
//! ```json
//! {
//!   "floors": [
//!     { "floor_id": "f1", "number": 1, "name": "Ground Floor",
//!       "rooms": [ { "id": "f1_lab1", "name": "Lab 1", "center": [17.5, -5.25],
//!                    "connected_to": ["f1_wp_lab1"] } ],
//!       "waypoints": [ { "id": "f1_wp_lab1", "position": [20, 0],
//!                        "connected_to": ["f1_wp_ramp"] } ],
//!       "walls": [ { "p1": [-26, -9], "p2": [26, -9] } ] }
//!   ],
//!   "connectors": [
//!     { "name": "Main Lift", "type": "lift", "cost_per_floor": 5,
//!       "floor_waypoints": { "f1": "f1_wp_lift", "f2": "f2_wp_lift" } }
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::registry::FloorSet;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read floor data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid floor data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;

impl FloorSet {
    /// Parse a floor set from a JSON string.
    pub fn from_json(json: &str) -> LoadResult<Self> {
        let set: FloorSet = serde_json::from_str(json)?;
        set.report_loaded();
        Ok(set)
    }

    /// Parse a floor set from any reader.
    pub fn from_reader<R: Read>(reader: R) -> LoadResult<Self> {
        let set: FloorSet = serde_json::from_reader(reader)?;
        set.report_loaded();
        Ok(set)
    }

    /// Read and parse a floor set from a file.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    fn report_loaded(&self) {
        log::debug!(
            "loaded {} floors, {} connectors",
            self.floors.len(),
            self.connectors.len()
        );
        self.audit();
    }
}
