//! dispatch — end-to-end run of the shield disaster-response core.
//!
//! Loads a snapshot (a directory of CSV tables if one is given, otherwise a
//! seeded synthetic scenario), then walks the whole pipeline: routing,
//! evacuation and responder planning, proximity alerts, escalation of every
//! hazard in report order, severity-tier routing, and the expiry sweep.
//!
//! ```text
//! dispatch [SNAPSHOT_DIR]
//!
//! RUST_LOG=debug        more detail from the library crates
//! SHIELD_CONFIG=cfg.json override ShieldConfig (any subset of fields)
//! SHIELD_OSRM_URL=url    enrich routes with road geometry from OSRM
//! ```

mod scenario;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shield_core::{GeoPoint, HazardId, HazardStatus, ShieldConfig, Timestamp};
use shield_escalation::{EscalationEngine, LogNotifier, MemoryLedger, expire};
use shield_evacuation::{AlertPreference, EvacuationPlanner, Surroundings, response_plan};
use shield_feed::Snapshot;
use shield_spatial::{GeometryResolver, OsrmResolver, Polyline, RouteOutcome, RouteService};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const NOW:  Timestamp = Timestamp::from_unix_secs(1_700_000_000);

type Resolver = Box<dyn Fn(&[GeoPoint]) -> Option<Polyline> + Send + Sync>;

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config() -> Result<ShieldConfig> {
    match std::env::var("SHIELD_CONFIG") {
        Ok(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))
        }
        Err(_) => Ok(ShieldConfig::default()),
    }
}

fn resolver(config: &ShieldConfig) -> Result<Resolver> {
    match std::env::var("SHIELD_OSRM_URL") {
        Ok(url) => {
            info!(%url, "road geometry enabled");
            let osrm = OsrmResolver::new(url, config.routing.geometry_timeout)?;
            Ok(Box::new(move |path: &[GeoPoint]| osrm.resolve(path)))
        }
        Err(_) => Ok(Box::new(|_: &[GeoPoint]| -> Option<Polyline> { None })),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    println!("=== dispatch — shield disaster-response core ===");

    let config = load_config()?;
    let mut snap = match std::env::args().nth(1) {
        Some(dir) => Snapshot::from_dir(Path::new(&dir))?,
        None => scenario::build(SEED, NOW),
    };
    println!(
        "Snapshot: {} hazards, {} shelters, {} traffic points, {} authorities",
        snap.hazards.len(),
        snap.shelters.len(),
        snap.traffic.len(),
        snap.authorities.len()
    );
    println!();

    let routes = RouteService::new(config.routing.clone(), resolver(&config)?)?;
    let user = scenario::USER;
    let t0 = Instant::now();

    // 1. Nearest shelter by road cost.
    match routes.route_to_nearest_shelter(user, &snap.traffic, &snap.shelters)? {
        RouteOutcome::Found(n) => println!(
            "Nearest shelter from {user}: {} (cost {:.3}, {} hops, geometry: {})",
            n.shelter,
            n.route.cost,
            n.route.node_path.len() - 1,
            n.route.geometry.as_ref().map_or(0, |g| g.len()),
        ),
        RouteOutcome::NoRoute => println!("Nearest shelter from {user}: unreachable"),
        RouteOutcome::NoCandidate => println!("Nearest shelter from {user}: none open"),
    }

    // 2. Escalation, replaying reports in creation order.
    let engine = EscalationEngine::new(config.escalation.clone(), LogNotifier, MemoryLedger::new());
    let mut order: Vec<usize> = (0..snap.hazards.len()).collect();
    order.sort_by_key(|&i| (snap.hazards[i].created_at, snap.hazards[i].id));

    println!();
    println!(
        "{:<12} {:<10} {:<4} {:<10} {:<9} {}",
        "Hazard", "Kind", "Sev", "Status", "Escalated", "Cluster"
    );
    println!("{}", "-".repeat(60));
    for i in order {
        let hazard = snap.hazards[i].clone();
        let out = engine.on_hazard_mutated(&hazard, &snap.hazards, &snap.authorities, NOW)?;
        set_status(&mut snap.hazards, hazard.id, out.status);
        for &id in &out.cluster_promoted {
            set_status(&mut snap.hazards, id, HazardStatus::Critical);
        }
        println!(
            "{:<12} {:<10} {:<4} {:<10} {:<9} {:?}",
            hazard.id.to_string(),
            hazard.kind.as_str(),
            hazard.severity,
            out.status.as_str(),
            match (&out.record, out.pending) {
                (_, true) => "pending".to_owned(),
                (Some(r), _) => r.authority_name.clone(),
                (None, _) => "-".to_owned(),
            },
            out.cluster_promoted,
        );
    }
    println!("Ledger holds {} escalation record(s)", engine.ledger().len());

    // 3. Tier routing for anything still below critical.
    for hazard in snap.hazards.iter().filter(|h| h.status == HazardStatus::Active) {
        let tier = engine.escalate_by_tier(hazard, &snap.authorities, NOW)?;
        println!("Tier escalation {}: {tier:?}", hazard.id);
    }

    // 4. Evacuation plan away from the worst live hazard.
    let planner = EvacuationPlanner::new(config.evacuation.clone(), routes);
    let around = Surroundings {
        shelters: &snap.shelters,
        traffic:  &snap.traffic,
        hazards:  &snap.hazards,
    };
    if let Some(worst) = snap.live_hazards().max_by_key(|h| (h.severity, std::cmp::Reverse(h.id))) {
        let plan = planner.plan_evacuation(user, worst, around)?;
        println!();
        println!("Evacuation plan away from {}:", worst.id);
        println!("{}", serde_json::to_string_pretty(&plan)?);

        let response = response_plan(worst, around, &snap.authorities)?;
        println!();
        println!("Responder plan for {}:", worst.id);
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    // 5. Proximity alerts for the user.
    let alerts = planner.alerts_for(user, &AlertPreference::default(), &[], around)?;
    println!();
    println!("{} proximity alert(s) for {user}", alerts.len());
    for a in &alerts {
        let shelter = a.plan.shelter.as_ref().map_or("-", |s| s.name.as_str());
        println!(
            "  {} at {:.2} km → go to {shelter} (eta {:.0} min)",
            a.hazard, a.distance_km, a.plan.eta_minutes
        );
    }

    // 6. Expiry sweep two days on.
    let later = NOW.plus_hours(49);
    let archived: Vec<HazardId> = expire(&snap.hazards, later, &config.expiry)
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    println!();
    println!("Expiry sweep at {later}: archive {archived:?}");

    println!();
    println!("Pipeline complete in {:.3} s", t0.elapsed().as_secs_f64());
    Ok(())
}

fn set_status(hazards: &mut [shield_core::Hazard], id: HazardId, to: HazardStatus) {
    if let Some(h) = hazards.iter_mut().find(|h| h.id == id) {
        if h.status.can_transition(to) {
            h.status = to;
        }
    }
}
