//! Synthetic Dehradun-area scenario.
//!
//! A river-flood cluster north of the city, one wildfire in the hills, a
//! handful of shelters, and congested junctions scattered with a seeded RNG
//! so every run sees the same snapshot.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use shield_core::{
    Authority, AuthorityId, AuthorityKind, GeoPoint, Hazard, HazardId, HazardKind, Shelter,
    ShelterId, Timestamp, TrafficPoint,
};
use shield_feed::Snapshot;

pub const TRAFFIC_POINTS: usize = 24;

/// Where the demo user is standing.
pub const USER: GeoPoint = GeoPoint::new(30.330, 78.040);

pub fn build(seed: u64, now: Timestamp) -> Snapshot {
    let mut rng = SmallRng::seed_from_u64(seed);

    // Five reports of the same flood within ~2 km, the last one severe.
    let flood = [
        (30.350, 78.050, 4),
        (30.356, 78.054, 5),
        (30.347, 78.060, 3),
        (30.360, 78.046, 6),
        (30.352, 78.057, 9),
    ];
    let mut hazards: Vec<Hazard> = flood
        .iter()
        .enumerate()
        .map(|(i, &(lat, lon, sev))| {
            Hazard::new(
                HazardId(i as u64 + 1),
                HazardKind::Flood,
                GeoPoint::new(lat, lon),
                sev,
                now.minus_hours(5 - i as u32),
            )
        })
        .collect();
    hazards.push(Hazard::new(
        HazardId(10),
        HazardKind::Wildfire,
        GeoPoint::new(30.455, 78.075),
        6,
        now.minus_hours(2),
    ));

    let shelters = vec![
        Shelter { capacity: 800, ..Shelter::at(ShelterId(1), "Parade Ground", GeoPoint::new(30.325, 78.043)) },
        Shelter { capacity: 300, ..Shelter::at(ShelterId(2), "ISBT Hall", GeoPoint::new(30.288, 78.000)) },
        Shelter { capacity: 500, ..Shelter::at(ShelterId(3), "Raipur Stadium", GeoPoint::new(30.310, 78.090)) },
        Shelter { active: false, ..Shelter::at(ShelterId(4), "Old Mill", GeoPoint::new(30.340, 78.030)) },
    ];

    let traffic = (0..TRAFFIC_POINTS)
        .map(|_| {
            let at = GeoPoint::new(rng.gen_range(30.28..30.37), rng.gen_range(77.99..78.10));
            TrafficPoint::new(at, rng.gen_range(0.0..10.0), rng.gen_bool(0.1))
        })
        .collect();

    let authority = |id, name: &str, kind, lat, lon| Authority {
        id:       AuthorityId(id),
        name:     name.to_owned(),
        kind,
        location: GeoPoint::new(lat, lon),
        phone:    String::new(),
        email:    format!("{}@dispatch.example", name.to_lowercase().replace(' ', ".")),
    };
    let authorities = vec![
        authority(1, "NDRF 15 Bn", AuthorityKind::Ndrf, 30.230, 77.950),
        authority(2, "SDRF Jolly Grant", AuthorityKind::Sdrf, 30.190, 78.180),
        authority(3, "Rajpur Police", AuthorityKind::Police, 30.370, 78.070),
        authority(4, "Fire Station Clock Tower", AuthorityKind::Fire, 30.324, 78.041),
    ];

    Snapshot { hazards, shelters, traffic, authorities }
}
