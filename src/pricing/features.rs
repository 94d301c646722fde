use crate::pricing::catalog::RateCatalog;
use crate::pricing::settings::ResolvedSettings;

/// Per-webhook price beyond the plan allowance.
const WEBHOOK_OVERAGE_PRICE: f64 = 0.01;
/// Flat add-on surcharges, charged once per campaign, not per lead.
const CUSTOM_ENVELOPE_SURCHARGE: f64 = 0.05;
const SPECIALTY_MAILER_SURCHARGE: f64 = 0.10;
const COMPLIANCE_HANDLING_SURCHARGE: f64 = 0.15;

/// Sum of the optional add-on surcharges. Everything except the webhook
/// overage is a flat one-time addition, independent of lead and attempt
/// volume.
pub fn feature_surcharge(catalog: &RateCatalog, settings: &ResolvedSettings) -> f64 {
    let mut surcharge = 0.0;

    let allowance = catalog.webhook_allowance(settings.plan_tier);
    if settings.webhooks_configured > allowance {
        surcharge += (settings.webhooks_configured - allowance) as f64 * WEBHOOK_OVERAGE_PRICE;
    }

    if settings.custom_envelopes {
        surcharge += CUSTOM_ENVELOPE_SURCHARGE;
    }
    if settings.specialty_mailers {
        surcharge += SPECIALTY_MAILER_SURCHARGE;
    }
    if settings.compliance_handling {
        surcharge += COMPLIANCE_HANDLING_SURCHARGE;
    }

    surcharge
}
