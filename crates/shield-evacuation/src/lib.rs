//! `shield-evacuation` — where should people go, and who needs telling.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`planner`]  | `EvacuationPlanner`, `EvacuationPlan`, `Surroundings`          |
//! | [`alert`]    | `in_danger_zone`, `AlertPreference`, `ProximityAlert`          |
//! | [`response`] | `response_plan`: best shelter and nearest authority per hazard |
//!
//! All are pure queries over caller-supplied snapshots; nothing here
//! mutates hazard or shelter state.

pub mod alert;
pub mod planner;
pub mod response;


pub use alert::{AlertPreference, ProximityAlert, in_danger_zone};
pub use planner::{
    ChosenShelter, EvacuationPlan, EvacuationPlanner, PlanStatus, Surroundings,
    exclusion_radius_km,
};
pub use response::{NearestAuthority, RecommendedShelter, ResponsePlan, response_plan};
