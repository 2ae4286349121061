//! `shield-feed` — load normalized record snapshots from CSV.
//!
//! Ingestion from upstream sources (news, weather, citizen reports) is out
//! of scope; this crate reads the already-normalized tables those pipelines
//! produce.  Every row is validated on the way in, so anything returned here
//! is safe to hand to the routing and escalation crates.

pub mod error;
pub mod loader;


pub use error::{FeedError, FeedResult};
pub use loader::{
    Snapshot, load_authorities_csv, load_authorities_reader, load_hazards_csv,
    load_hazards_reader, load_shelters_csv, load_shelters_reader, load_traffic_csv,
    load_traffic_reader,
};
