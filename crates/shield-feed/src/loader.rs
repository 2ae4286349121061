//! CSV snapshot loaders.
//!
//! # CSV formats
//!
//! Headers are required; surrounding whitespace is trimmed and enum columns
//! are case-insensitive.  Optional columns may be left empty.
//!
//! ```csv
//! # hazards.csv
//! id,kind,lat,lon,severity,status,created_at
//! 1,flood,30.0,78.0,9,active,1700000000
//!
//! # shelters.csv
//! id,name,lat,lon,capacity,occupancy,contact,active
//! 1,Town hall,30.05,78.02,400,120,+91-135-000000,true
//!
//! # traffic.csv
//! lat,lon,congestion,blocked
//! 30.01,78.01,6.5,false
//!
//! # authorities.csv
//! id,name,kind,lat,lon,phone,email
//! 1,SDRF Dehradun,sdrf,30.32,78.03,,ops@sdrf.example
//! ```
//!
//! | Column     | Default when empty |
//! |------------|--------------------|
//! | `status`   | `active`           |
//! | `contact`  | `""`               |
//! | `active`   | `true`             |
//! | `phone`    | `""`               |
//! | `email`    | `""`               |

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use shield_core::{
    Authority, AuthorityId, GeoPoint, Hazard, HazardId, HazardStatus, Shelter, ShelterId,
    Timestamp, TrafficPoint,
};

use crate::{FeedError, FeedResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct HazardRow {
    id:         u64,
    kind:       String,
    lat:        f64,
    lon:        f64,
    severity:   u8,
    status:     Option<String>,
    created_at: i64,
}

#[derive(Deserialize)]
struct ShelterRow {
    id:        u64,
    name:      String,
    lat:       f64,
    lon:       f64,
    capacity:  u32,
    occupancy: u32,
    contact:   Option<String>,
    active:    Option<bool>,
}

#[derive(Deserialize)]
struct TrafficRow {
    lat:        f64,
    lon:        f64,
    congestion: f64,
    blocked:    bool,
}

#[derive(Deserialize)]
struct AuthorityRow {
    id:    u64,
    name:  String,
    kind:  String,
    lat:   f64,
    lon:   f64,
    phone: Option<String>,
    email: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load hazards from a CSV file.
pub fn load_hazards_csv(path: &Path) -> FeedResult<Vec<Hazard>> {
    load_hazards_reader(std::fs::File::open(path)?)
}

/// Like [`load_hazards_csv`] but accepts any `Read` source.
pub fn load_hazards_reader<R: Read>(reader: R) -> FeedResult<Vec<Hazard>> {
    rows::<_, HazardRow>(reader, "hazards")?
        .into_iter()
        .enumerate()
        .map(|(i, r)| -> FeedResult<Hazard> {
            let status = match r.status.as_deref() {
                None | Some("") => HazardStatus::Active,
                Some(s) => parse_enum(s, "hazards", i)?,
            };
            let hazard = Hazard {
                id:         HazardId(r.id),
                kind:       parse_enum(&r.kind, "hazards", i)?,
                location:   GeoPoint::new(r.lat, r.lon),
                severity:   r.severity,
                status,
                created_at: Timestamp::from_unix_secs(r.created_at),
            };
            hazard.validate()?;
            Ok(hazard)
        })
        .collect()
}

/// Load shelters from a CSV file.
pub fn load_shelters_csv(path: &Path) -> FeedResult<Vec<Shelter>> {
    load_shelters_reader(std::fs::File::open(path)?)
}

/// Like [`load_shelters_csv`] but accepts any `Read` source.
pub fn load_shelters_reader<R: Read>(reader: R) -> FeedResult<Vec<Shelter>> {
    rows::<_, ShelterRow>(reader, "shelters")?
        .into_iter()
        .map(|r| -> FeedResult<Shelter> {
            Ok(Shelter {
                id:        ShelterId(r.id),
                name:      r.name,
                location:  GeoPoint::new(r.lat, r.lon).validate()?,
                capacity:  r.capacity,
                occupancy: r.occupancy,
                contact:   r.contact.unwrap_or_default(),
                active:    r.active.unwrap_or(true),
            })
        })
        .collect()
}

/// Load traffic observations from a CSV file.
pub fn load_traffic_csv(path: &Path) -> FeedResult<Vec<TrafficPoint>> {
    load_traffic_reader(std::fs::File::open(path)?)
}

/// Like [`load_traffic_csv`] but accepts any `Read` source.
pub fn load_traffic_reader<R: Read>(reader: R) -> FeedResult<Vec<TrafficPoint>> {
    rows::<_, TrafficRow>(reader, "traffic")?
        .into_iter()
        .map(|r| -> FeedResult<TrafficPoint> {
            let t = TrafficPoint::new(GeoPoint::new(r.lat, r.lon), r.congestion, r.blocked);
            t.validate()?;
            Ok(t)
        })
        .collect()
}

/// Load authorities from a CSV file.
pub fn load_authorities_csv(path: &Path) -> FeedResult<Vec<Authority>> {
    load_authorities_reader(std::fs::File::open(path)?)
}

/// Like [`load_authorities_csv`] but accepts any `Read` source.
pub fn load_authorities_reader<R: Read>(reader: R) -> FeedResult<Vec<Authority>> {
    rows::<_, AuthorityRow>(reader, "authorities")?
        .into_iter()
        .enumerate()
        .map(|(i, r)| -> FeedResult<Authority> {
            Ok(Authority {
                id:       AuthorityId(r.id),
                kind:     parse_enum(&r.kind, "authorities", i)?,
                name:     r.name,
                location: GeoPoint::new(r.lat, r.lon).validate()?,
                phone:    r.phone.unwrap_or_default(),
                email:    r.email.unwrap_or_default(),
            })
        })
        .collect()
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// One consistent read of all four record tables.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub hazards:     Vec<Hazard>,
    pub shelters:    Vec<Shelter>,
    pub traffic:     Vec<TrafficPoint>,
    pub authorities: Vec<Authority>,
}

impl Snapshot {
    /// Load `hazards.csv`, `shelters.csv`, `traffic.csv`, and
    /// `authorities.csv` from `dir`.  A missing file yields an empty table.
    pub fn from_dir(dir: &Path) -> FeedResult<Self> {
        let snapshot = Self {
            hazards:     optional(dir, "hazards.csv", load_hazards_csv)?,
            shelters:    optional(dir, "shelters.csv", load_shelters_csv)?,
            traffic:     optional(dir, "traffic.csv", load_traffic_csv)?,
            authorities: optional(dir, "authorities.csv", load_authorities_csv)?,
        };
        info!(
            dir = %dir.display(),
            hazards = snapshot.hazards.len(),
            shelters = snapshot.shelters.len(),
            traffic = snapshot.traffic.len(),
            authorities = snapshot.authorities.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Hazards that are still `Active` or `Critical`.
    pub fn live_hazards(&self) -> impl Iterator<Item = &Hazard> {
        self.hazards.iter().filter(|h| h.status.is_live())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rows<R: Read, T: DeserializeOwned>(reader: R, table: &str) -> FeedResult<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .enumerate()
        .map(|(i, r)| r.map_err(|e| FeedError::Parse(format!("{table} row {}: {e}", i + 1))))
        .collect()
}

fn parse_enum<T: FromStr<Err = String>>(s: &str, table: &str, row: usize) -> FeedResult<T> {
    s.parse()
        .map_err(|e| FeedError::Parse(format!("{table} row {}: {e}", row + 1)))
}

fn optional<T>(
    dir:  &Path,
    name: &str,
    load: fn(&Path) -> FeedResult<Vec<T>>,
) -> FeedResult<Vec<T>> {
    let path = dir.join(name);
    if !path.exists() {
        debug!(path = %path.display(), "table absent; treating as empty");
        return Ok(Vec::new());
    }
    load(&path)
}
