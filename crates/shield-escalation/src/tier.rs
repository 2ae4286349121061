//! Severity-tier routing: which class of responder hears about a hazard.
//!
//! | Severity          | Kind                          | Responders      |
//! |-------------------|-------------------------------|-----------------|
//! | ≥ critical (8)    | any                           | NDRF + SDRF     |
//! | 5 ..= critical-1  | fire, wildfire, heatwave      | fire service    |
//! | 5 ..= critical-1  | flood, earthquake, landslide  | police          |
//! | 5 ..= critical-1  | anything else                 | nobody (listed) |
//! | < 5               | any                           | not required    |

use tracing::{debug, info};

use shield_core::{
    Authority, AuthorityKind, EscalationRecord, Hazard, HazardKind, HazardStatus, ShieldResult,
    Timestamp,
};

use crate::engine::{EscalationEngine, claim_and_send};
use crate::ledger::EscalationLedger;
use crate::notifier::{Alert, Notifier, address_of};

/// Lowest severity that warrants any tier escalation.
pub const MIN_TIER_SEVERITY: u8 = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TierDecision {
    NotRequired,
    /// Notify every authority of these kinds.  May be empty for kinds no
    /// tier covers.
    Notify(&'static [AuthorityKind]),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TierOutcome {
    NotRequired,
    /// The tier names responders but none are registered.
    NoRecipients,
    /// The hazard already has an escalation record; nothing was sent.
    AlreadyEscalated(Option<EscalationRecord>),
    Escalated { recipients: Vec<String>, notified: bool },
}

/// The responder tier for `hazard`, given the critical-severity threshold.
pub fn responders_for(hazard: &Hazard, critical_severity: u8) -> TierDecision {
    use AuthorityKind as A;
    use HazardKind as K;

    if hazard.severity >= critical_severity {
        return TierDecision::Notify(&[A::Ndrf, A::Sdrf]);
    }
    if hazard.severity < MIN_TIER_SEVERITY {
        return TierDecision::NotRequired;
    }
    match hazard.kind {
        K::Fire | K::Wildfire | K::Heatwave => TierDecision::Notify(&[A::Fire]),
        K::Flood | K::Earthquake | K::Landslide => TierDecision::Notify(&[A::Police]),
        K::Cyclone => TierDecision::Notify(&[]),
    }
}

impl<N: Notifier, L: EscalationLedger> EscalationEngine<N, L> {
    /// Alert every authority in `hazard`'s severity tier in a single message.
    ///
    /// Shares the per-hazard ledger guard with
    /// [`on_hazard_mutated`][Self::on_hazard_mutated]: whichever path claims
    /// the hazard first is the only one that sends.
    pub fn escalate_by_tier(
        &self,
        hazard:      &Hazard,
        authorities: &[Authority],
        now:         Timestamp,
    ) -> ShieldResult<TierOutcome> {
        hazard.validate()?;
        if matches!(hazard.status, HazardStatus::Resolved | HazardStatus::Archived) {
            debug!(hazard = %hazard.id, status = %hazard.status, "closed hazard; skipping tier");
            return Ok(TierOutcome::NotRequired);
        }

        let kinds = match responders_for(hazard, self.config().critical_severity) {
            TierDecision::NotRequired => return Ok(TierOutcome::NotRequired),
            TierDecision::Notify(kinds) => kinds,
        };
        let chosen: Vec<&Authority> =
            authorities.iter().filter(|a| kinds.contains(&a.kind)).collect();
        if chosen.is_empty() {
            debug!(hazard = %hazard.id, ?kinds, "no authority registered for tier");
            return Ok(TierOutcome::NoRecipients);
        }

        let recipients: Vec<String> = chosen.iter().map(|a| address_of(a)).collect();
        let names: Vec<&str> = chosen.iter().map(|a| a.name.as_str()).collect();
        let alert = Alert::for_hazard(hazard, "Severity tier escalation.", recipients.clone());

        let (record, claimed) = claim_and_send(
            self.ledger(),
            self.notifier(),
            EscalationRecord {
                hazard:         hazard.id,
                authority_name: names.join(", "),
                notified:       false,
                timestamp:      now,
            },
            &alert,
        );
        if !claimed {
            return Ok(TierOutcome::AlreadyEscalated(record));
        }

        let notified = record.is_some_and(|r| r.notified);
        info!(hazard = %hazard.id, recipients = recipients.len(), notified, "tier escalation");
        Ok(TierOutcome::Escalated { recipients, notified })
    }
}
