//! Reaction to hazard create/update events.
//!
//! On every mutation of a hazard the caller invokes
//! [`EscalationEngine::on_hazard_mutated`] with a snapshot of recent
//! hazards.  The engine then:
//!
//! 1. ignores `Resolved`/`Archived` hazards outright;
//! 2. promotes the hazard to `Critical` when its severity reaches the
//!    configured threshold;
//! 3. runs cluster detection: if enough same-kind live hazards sit within
//!    the cluster radius inside the trailing window, every `Active`
//!    same-kind hazard in that window goes `Critical`;
//! 4. if the hazard is now `Critical`, escalates it to the nearest authority
//!    through the ledger, so each hazard is escalated at most once.
//!
//! Status changes for *other* hazards are reported, not applied.

use tracing::{debug, info, warn};

use shield_core::{
    Authority, EscalationConfig, EscalationRecord, GeoPoint, Hazard, HazardId, HazardStatus,
    ShieldResult, Timestamp,
};
use shield_spatial::PointIndex;

use crate::ledger::{EscalationLedger, MemoryLedger};
use crate::notifier::{Alert, LogNotifier, Notifier, address_of};

/// What one mutation event did.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EscalationOutcome {
    /// The hazard's status after promotion rules.  Persist this.
    pub status:           HazardStatus,
    /// Other hazards promoted to `Critical` by cluster detection.  Persist
    /// these too.
    pub cluster_promoted: Vec<HazardId>,
    /// The hazard's escalation record, if one exists (written by this call
    /// or an earlier one).
    pub record:           Option<EscalationRecord>,
    /// `true` if this call won the ledger claim and sent the alert.
    pub escalated:        bool,
    /// Critical but no authority was available; retry on a later mutation.
    pub pending:          bool,
}

impl EscalationOutcome {
    fn unchanged(status: HazardStatus) -> Self {
        Self {
            status,
            cluster_promoted: Vec::new(),
            record: None,
            escalated: false,
            pending: false,
        }
    }
}

// ── EscalationEngine ──────────────────────────────────────────────────────────

pub struct EscalationEngine<N: Notifier = LogNotifier, L: EscalationLedger = MemoryLedger> {
    config:   EscalationConfig,
    notifier: N,
    ledger:   L,
}

impl EscalationEngine {
    /// Engine that logs alerts and keeps its ledger in memory.
    pub fn in_memory(config: EscalationConfig) -> Self {
        Self::new(config, LogNotifier, MemoryLedger::new())
    }
}

impl<N: Notifier, L: EscalationLedger> EscalationEngine<N, L> {
    pub fn new(config: EscalationConfig, notifier: N, ledger: L) -> Self {
        Self { config, notifier, ledger }
    }

    pub fn config(&self) -> &EscalationConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Apply promotion, cluster detection, and escalation to `hazard`.
    ///
    /// `recent` may contain hazards of any kind, status, or age, and may or
    /// may not include `hazard` itself; the engine filters.
    pub fn on_hazard_mutated(
        &self,
        hazard:      &Hazard,
        recent:      &[Hazard],
        authorities: &[Authority],
        now:         Timestamp,
    ) -> ShieldResult<EscalationOutcome> {
        hazard.validate()?;
        if matches!(hazard.status, HazardStatus::Resolved | HazardStatus::Archived) {
            debug!(hazard = %hazard.id, status = %hazard.status, "closed hazard; skipping");
            return Ok(EscalationOutcome::unchanged(hazard.status));
        }

        let mut status = hazard.status;
        if hazard.severity >= self.config.critical_severity {
            status = promote(hazard.id, status, "severity threshold");
        }

        let window: Vec<&Hazard> = recent
            .iter()
            .filter(|h| h.id != hazard.id && h.kind == hazard.kind)
            .filter(|h| h.status.is_live())
            .filter(|h| h.created_at >= now.minus_hours(self.config.cluster_window_hours))
            .collect();

        let clustered = 1 + cluster_size(hazard.location, &window, self.config.cluster_radius_km);
        let mut cluster_promoted = Vec::new();
        if clustered >= self.config.cluster_threshold {
            info!(hazard = %hazard.id, kind = %hazard.kind, clustered, "cluster detected");
            status = promote(hazard.id, status, "cluster");
            cluster_promoted = window
                .iter()
                .filter(|h| h.status.can_transition(HazardStatus::Critical))
                .map(|h| h.id)
                .collect();
        }

        let mut outcome = EscalationOutcome {
            cluster_promoted,
            ..EscalationOutcome::unchanged(status)
        };
        if status != HazardStatus::Critical {
            return Ok(outcome);
        }

        if let Some(existing) = self.ledger.get(hazard.id) {
            outcome.record = Some(existing);
            return Ok(outcome);
        }

        let index = PointIndex::new(authorities.iter().map(|a| (a.location, a)));
        let Some((distance_km, authority)) = index.nearest(hazard.location) else {
            warn!(hazard = %hazard.id, "critical hazard but no authority available; pending");
            outcome.pending = true;
            return Ok(outcome);
        };

        let reason = if clustered >= self.config.cluster_threshold {
            "Cluster detected in region."
        } else {
            "Severity threshold reached."
        };
        let critical = Hazard { status, ..hazard.clone() };
        let alert = Alert::for_hazard(&critical, reason, vec![address_of(authority)]);

        let (record, escalated) = claim_and_send(
            &self.ledger,
            &self.notifier,
            EscalationRecord {
                hazard:         hazard.id,
                authority_name: authority.name.clone(),
                notified:       false,
                timestamp:      now,
            },
            &alert,
        );
        if escalated {
            info!(
                hazard = %hazard.id,
                authority = %authority.name,
                distance_km,
                notified = record.as_ref().is_some_and(|r| r.notified),
                "hazard escalated"
            );
        }
        outcome.record = record;
        outcome.escalated = escalated;
        Ok(outcome)
    }
}

/// Claim the ledger slot for `record.hazard`; only the winner sends.
///
/// Returns the hazard's record as the ledger now holds it, and whether this
/// call was the one that claimed it.
pub(crate) fn claim_and_send<L, N>(
    ledger:   &L,
    notifier: &N,
    record:   EscalationRecord,
    alert:    &Alert,
) -> (Option<EscalationRecord>, bool)
where
    L: EscalationLedger + ?Sized,
    N: Notifier + ?Sized,
{
    let hazard = record.hazard;
    if !ledger.try_claim(record) {
        debug!(%hazard, "already escalated");
        return (ledger.get(hazard), false);
    }
    let ok = notifier.send(alert);
    if !ok {
        warn!(%hazard, "notification failed; record kept with notified = false");
    }
    ledger.mark_notified(hazard, ok);
    (ledger.get(hazard), true)
}

fn promote(id: HazardId, from: HazardStatus, why: &str) -> HazardStatus {
    if from.can_transition(HazardStatus::Critical) {
        info!(hazard = %id, reason = why, "promoted to critical");
        HazardStatus::Critical
    } else {
        from
    }
}

/// Members of `window` within `radius_km` of `center`.
fn cluster_size(center: GeoPoint, window: &[&Hazard], radius_km: f64) -> usize {
    PointIndex::new(window.iter().map(|h| (h.location, ())))
        .within_km(center, radius_km)
        .len()
}
