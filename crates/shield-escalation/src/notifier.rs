//! Outbound alerts.

use tracing::info;

use shield_core::{Authority, Hazard};

/// A rendered notification, transport-agnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alert {
    pub subject:    String,
    pub body:       String,
    pub recipients: Vec<String>,
}

impl Alert {
    /// Render the standard emergency alert for `hazard`.
    ///
    /// `reason` is a short human line such as "Cluster detected in region."
    pub fn for_hazard(hazard: &Hazard, reason: &str, recipients: Vec<String>) -> Self {
        let subject = format!("Emergency Alert - {}", hazard.kind.as_str().to_uppercase());
        let body = format!(
            "Hazard: {kind}\nSeverity: {sev}\nLocation: {lat}, {lon}\nStatus: {status}\n\n{reason}\nImmediate action required.\n",
            kind = hazard.kind,
            sev = hazard.severity,
            lat = hazard.location.lat,
            lon = hazard.location.lon,
            status = hazard.status.as_str().to_uppercase(),
        );
        Self { subject, body, recipients }
    }
}

/// Where an alert for `authority` should be delivered: email, else phone,
/// else the bare name.
pub(crate) fn address_of(authority: &Authority) -> String {
    [&authority.email, &authority.phone, &authority.name]
        .into_iter()
        .find(|s| !s.is_empty())
        .cloned()
        .unwrap_or_default()
}

/// Delivery channel for alerts.
///
/// `send` returns `true` on confirmed delivery.  Implementations must bound
/// their own latency and report failure as `false` rather than panicking;
/// the engine records the result and moves on.
///
/// Any `Fn(&Alert) -> bool + Send + Sync` closure is a `Notifier`.
pub trait Notifier: Send + Sync {
    fn send(&self, alert: &Alert) -> bool;
}

impl<F> Notifier for F
where
    F: Fn(&Alert) -> bool + Send + Sync,
{
    fn send(&self, alert: &Alert) -> bool {
        self(alert)
    }
}

/// Writes each alert as a `tracing` event and reports success.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, alert: &Alert) -> bool {
        info!(
            subject = %alert.subject,
            recipients = ?alert.recipients,
            "alert dispatched"
        );
        true
    }
}
