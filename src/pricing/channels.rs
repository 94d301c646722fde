use crate::pricing::catalog::{RateCatalog, RatePlanEntry};
use crate::pricing::settings::{ChannelKind, MailKind, ResolvedSettings, TextKind};

/// Voicemail drops add half the base call cost on top of it.
const VOICEMAIL_DROP_FACTOR: f64 = 0.5;
/// Live transfers add another half, independently of voicemail drops.
const LIVE_TRANSFER_FACTOR: f64 = 0.5;
/// Per-attempt floor when no text rate resolves.
const TEXT_FALLBACK_PRICE: f64 = 0.01;
/// Per-attempt floor when no social rate resolves.
const SOCIAL_FALLBACK_PRICE: f64 = 0.02;

/// What a channel strategy hands back to the orchestrator: the channel's
/// monetary cost and the rate entry it matched, which later supplies the
/// reported margin.
#[derive(Debug, Clone, Copy)]
pub struct ChannelOutcome {
    pub cost: f64,
    pub matched_rate: Option<RatePlanEntry>,
}

impl ChannelOutcome {
    fn zero() -> Self {
        ChannelOutcome {
            cost: 0.0,
            matched_rate: None,
        }
    }
}

/// Dispatch to the strategy for the resolved channel. Unrecognized channels
/// cost nothing here; the orchestrator's minimum-charge floor picks them up.
pub fn channel_cost(
    catalog: &RateCatalog,
    settings: &ResolvedSettings,
    total_attempts: f64,
) -> ChannelOutcome {
    match settings.channel {
        ChannelKind::Call => call_cost(catalog, settings, total_attempts),
        ChannelKind::Text => text_cost(catalog, settings, total_attempts),
        ChannelKind::Social => social_cost(catalog, settings, total_attempts),
        ChannelKind::DirectMail => direct_mail_cost(catalog, settings),
        ChannelKind::Other => ChannelOutcome::zero(),
    }
}

fn call_cost(
    catalog: &RateCatalog,
    settings: &ResolvedSettings,
    total_attempts: f64,
) -> ChannelOutcome {
    let rate = catalog.lookup(ChannelKind::Call, settings.plan_tier, None);
    let base = total_attempts * rate.customer_price;
    let mut cost = base;
    if settings.do_voicemail_drops {
        cost += total_attempts * VOICEMAIL_DROP_FACTOR * rate.customer_price;
    }
    if settings.transfer_enabled {
        cost += total_attempts * LIVE_TRANSFER_FACTOR * rate.customer_price;
    }
    ChannelOutcome {
        cost,
        matched_rate: Some(rate),
    }
}

fn text_cost(
    catalog: &RateCatalog,
    settings: &ResolvedSettings,
    total_attempts: f64,
) -> ChannelOutcome {
    let sub_type = settings.text_type.map(|k| match k {
        TextKind::Sms => "sms",
        TextKind::Imessage => "imessage",
    });
    let rate = catalog.lookup(ChannelKind::Text, settings.plan_tier, sub_type);
    let price = if rate.customer_price > 0.0 {
        rate.customer_price
    } else {
        TEXT_FALLBACK_PRICE
    };
    ChannelOutcome {
        cost: total_attempts * price,
        matched_rate: Some(rate),
    }
}

fn social_cost(
    catalog: &RateCatalog,
    settings: &ResolvedSettings,
    total_attempts: f64,
) -> ChannelOutcome {
    let rate = catalog.lookup(
        ChannelKind::Social,
        settings.plan_tier,
        settings.social_platform.as_deref(),
    );
    let price = if rate.customer_price > 0.0 {
        rate.customer_price
    } else {
        SOCIAL_FALLBACK_PRICE
    };
    ChannelOutcome {
        cost: total_attempts * price,
        matched_rate: Some(rate),
    }
}

/// Direct mail is priced per lead, not per attempt: each lead gets one
/// mail piece regardless of the cadence settings.
fn direct_mail_cost(catalog: &RateCatalog, settings: &ResolvedSettings) -> ChannelOutcome {
    let rate = catalog.lookup(ChannelKind::DirectMail, settings.plan_tier, None);
    let leads = settings.lead_count as f64;

    let per_piece = match settings.mail_type {
        // AI-triggered sends bill at the plan's event rate.
        Some(MailKind::AiTriggered) => rate.customer_price,
        Some(kind) => catalog.mail_base_cost(kind).unwrap_or(rate.customer_price),
        None => rate.customer_price,
    };

    ChannelOutcome {
        cost: leads * per_piece,
        matched_rate: Some(rate),
    }
}
