use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;

use crate::pricing::settings::{ChannelKind, MailKind, PlanTier, TextKind};

/// One row of the rate catalog: what a unit costs us, what the customer
/// pays, and the margin on that price. Margin is computed once when the
/// catalog is built, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatePlanEntry {
    pub internal_cost: f64,
    pub customer_price: f64,
    pub margin: f64,
    pub credit_factor: f64,
}

impl RatePlanEntry {
    fn new(internal_cost: f64, customer_price: f64, credit_factor: f64) -> Self {
        let margin = if customer_price > 0.0 {
            round2((customer_price - internal_cost) / customer_price)
        } else {
            0.0
        };
        RatePlanEntry {
            internal_cost,
            customer_price,
            margin,
            credit_factor,
        }
    }

    /// Zero-cost sentinel returned for channels the catalog does not price.
    pub const ZERO: RatePlanEntry = RatePlanEntry {
        internal_cost: 0.0,
        customer_price: 0.0,
        margin: 0.0,
        credit_factor: 0.0,
    };
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Named multiplier pair for a pricing scenario (weekend sends, holiday
/// sends, bulk discounts, ...). Declared per channel. The estimator does not
/// consult these today: the call strategy prices voicemail drops and live
/// transfers with its own flat factors instead. They are kept in the catalog
/// because the inspection panel lists them next to the unit rates.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioMultiplier {
    pub name: &'static str,
    pub internal_cost_multiplier: f64,
    pub customer_price_multiplier: f64,
}

/// Compiled-in pricing tables. Built once at startup, read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct RateCatalog {
    call: HashMap<PlanTier, RatePlanEntry>,
    text: HashMap<PlanTier, HashMap<TextKind, RatePlanEntry>>,
    social: HashMap<PlanTier, RatePlanEntry>,
    social_platforms: HashMap<String, RatePlanEntry>,
    direct_mail: HashMap<PlanTier, RatePlanEntry>,
    mail_base: HashMap<MailKind, f64>,
    defaults: HashMap<ChannelKind, RatePlanEntry>,
    webhook_allowances: HashMap<PlanTier, i64>,
    scenarios: HashMap<ChannelKind, Vec<ScenarioMultiplier>>,
}

impl RateCatalog {
    pub fn standard() -> Self {
        let mut call = HashMap::new();
        call.insert(PlanTier::Basic, RatePlanEntry::new(0.18, 0.25, 1.0));
        call.insert(PlanTier::Starter, RatePlanEntry::new(0.14, 0.20, 1.0));
        call.insert(PlanTier::Enterprise, RatePlanEntry::new(0.11, 0.16, 1.0));

        let mut text = HashMap::new();
        let mut basic_text = HashMap::new();
        basic_text.insert(TextKind::Sms, RatePlanEntry::new(0.009, 0.015, 1.0));
        basic_text.insert(TextKind::Imessage, RatePlanEntry::new(0.016, 0.025, 2.0));
        text.insert(PlanTier::Basic, basic_text);
        let mut starter_text = HashMap::new();
        starter_text.insert(TextKind::Sms, RatePlanEntry::new(0.008, 0.012, 1.0));
        starter_text.insert(TextKind::Imessage, RatePlanEntry::new(0.014, 0.022, 2.0));
        text.insert(PlanTier::Starter, starter_text);
        let mut enterprise_text = HashMap::new();
        enterprise_text.insert(TextKind::Sms, RatePlanEntry::new(0.007, 0.010, 1.0));
        enterprise_text.insert(TextKind::Imessage, RatePlanEntry::new(0.012, 0.018, 2.0));
        text.insert(PlanTier::Enterprise, enterprise_text);

        let mut social = HashMap::new();
        social.insert(PlanTier::Basic, RatePlanEntry::new(0.024, 0.040, 1.0));
        social.insert(PlanTier::Starter, RatePlanEntry::new(0.019, 0.030, 1.0));
        social.insert(PlanTier::Enterprise, RatePlanEntry::new(0.016, 0.025, 1.0));

        let mut social_platforms = HashMap::new();
        social_platforms.insert("facebook".into(), RatePlanEntry::new(0.018, 0.030, 1.0));
        social_platforms.insert("instagram".into(), RatePlanEntry::new(0.021, 0.035, 1.0));
        social_platforms.insert("linkedin".into(), RatePlanEntry::new(0.032, 0.050, 2.0));
        social_platforms.insert("x".into(), RatePlanEntry::new(0.015, 0.025, 1.0));

        let mut direct_mail = HashMap::new();
        direct_mail.insert(PlanTier::Basic, RatePlanEntry::new(0.52, 0.75, 1.0));
        direct_mail.insert(PlanTier::Starter, RatePlanEntry::new(0.48, 0.68, 1.0));
        direct_mail.insert(PlanTier::Enterprise, RatePlanEntry::new(0.44, 0.60, 1.0));

        // Flat per-piece print-and-postage base, independent of plan tier.
        let mut mail_base = HashMap::new();
        mail_base.insert(MailKind::Postcard, 0.58);
        mail_base.insert(MailKind::Letter, 0.85);
        mail_base.insert(MailKind::Check, 1.25);

        let mut defaults = HashMap::new();
        defaults.insert(ChannelKind::Call, RatePlanEntry::new(0.15, 0.22, 1.0));
        defaults.insert(ChannelKind::Text, RatePlanEntry::new(0.008, 0.012, 1.0));
        defaults.insert(ChannelKind::Social, RatePlanEntry::new(0.018, 0.030, 1.0));
        defaults.insert(ChannelKind::DirectMail, RatePlanEntry::new(0.48, 0.68, 1.0));

        let mut webhook_allowances = HashMap::new();
        webhook_allowances.insert(PlanTier::Basic, 1);
        webhook_allowances.insert(PlanTier::Starter, 5);
        webhook_allowances.insert(PlanTier::Enterprise, 25);

        let mut scenarios = HashMap::new();
        scenarios.insert(ChannelKind::Call, channel_scenarios(1.4, 1.5));
        scenarios.insert(ChannelKind::Text, channel_scenarios(1.2, 1.25));
        scenarios.insert(ChannelKind::Social, channel_scenarios(1.2, 1.3));
        scenarios.insert(ChannelKind::DirectMail, channel_scenarios(1.3, 1.4));

        RateCatalog {
            call,
            text,
            social,
            social_platforms,
            direct_mail,
            mail_base,
            defaults,
            webhook_allowances,
            scenarios,
        }
    }

    /// Generic lookup used by the channel strategies. Never fails: an absent
    /// (tier, sub-type) combination falls back to the channel's default
    /// entry, and a channel with no table at all gets the zero sentinel.
    pub fn lookup(
        &self,
        channel: ChannelKind,
        tier: Option<PlanTier>,
        sub_type: Option<&str>,
    ) -> RatePlanEntry {
        let exact = match channel {
            ChannelKind::Call => tier.and_then(|t| self.call.get(&t)).copied(),
            ChannelKind::Text => {
                let kind = sub_type.and_then(TextKind::parse);
                match (tier, kind) {
                    (Some(t), Some(k)) => self.text.get(&t).and_then(|m| m.get(&k)).copied(),
                    _ => None,
                }
            }
            ChannelKind::Social => {
                // Platform-specific pricing wins over the plan-tier row.
                let by_platform = sub_type.and_then(|p| self.social_platforms.get(p)).copied();
                by_platform.or_else(|| tier.and_then(|t| self.social.get(&t)).copied())
            }
            ChannelKind::DirectMail => tier.and_then(|t| self.direct_mail.get(&t)).copied(),
            ChannelKind::Other => None,
        };

        exact.unwrap_or_else(|| self.default_entry(channel))
    }

    pub fn default_entry(&self, channel: ChannelKind) -> RatePlanEntry {
        self.defaults
            .get(&channel)
            .copied()
            .unwrap_or(RatePlanEntry::ZERO)
    }

    /// Flat base cost for a physical mail piece, if that piece is priced.
    pub fn mail_base_cost(&self, kind: MailKind) -> Option<f64> {
        self.mail_base.get(&kind).copied()
    }

    /// Webhooks included with the plan before overage pricing kicks in.
    /// An unresolvable tier gets the starter allowance, matching the
    /// starter default applied to the tier itself.
    pub fn webhook_allowance(&self, tier: Option<PlanTier>) -> i64 {
        let tier = tier.unwrap_or(PlanTier::Starter);
        self.webhook_allowances.get(&tier).copied().unwrap_or(0)
    }

    pub fn scenario_multipliers(&self, channel: ChannelKind) -> &[ScenarioMultiplier] {
        self.scenarios.get(&channel).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Everything the inspection panel shows for one channel: tier rows,
    /// sub-type tables, the default entry, and the scenario multipliers.
    pub fn channel_table(&self, channel: ChannelKind) -> serde_json::Value {
        let rates = match channel {
            ChannelKind::Call => json!({ "tiers": &self.call }),
            ChannelKind::Text => json!({ "tiers": &self.text }),
            ChannelKind::Social => json!({
                "tiers": &self.social,
                "platforms": &self.social_platforms,
            }),
            ChannelKind::DirectMail => json!({
                "tiers": &self.direct_mail,
                "mail_base": &self.mail_base,
            }),
            ChannelKind::Other => json!({}),
        };

        json!({
            "rates": rates,
            "default_rate": self.default_entry(channel),
            "scenario_multipliers": self.scenario_multipliers(channel),
        })
    }

    /// Every plan entry in the catalog, for margin audits and the rates dump.
    pub fn all_entries(&self) -> Vec<RatePlanEntry> {
        let mut entries: Vec<RatePlanEntry> = Vec::new();
        entries.extend(self.call.values().copied());
        entries.extend(self.text.values().flat_map(|m| m.values().copied()));
        entries.extend(self.social.values().copied());
        entries.extend(self.social_platforms.values().copied());
        entries.extend(self.direct_mail.values().copied());
        entries.extend(self.defaults.values().copied());
        entries
    }
}

fn channel_scenarios(premium_internal: f64, premium_customer: f64) -> Vec<ScenarioMultiplier> {
    vec![
        ScenarioMultiplier {
            name: "weekend",
            internal_cost_multiplier: 1.1,
            customer_price_multiplier: 1.15,
        },
        ScenarioMultiplier {
            name: "holiday",
            internal_cost_multiplier: 1.2,
            customer_price_multiplier: 1.25,
        },
        ScenarioMultiplier {
            name: "voicemail",
            internal_cost_multiplier: 1.4,
            customer_price_multiplier: 1.5,
        },
        ScenarioMultiplier {
            name: "transfer",
            internal_cost_multiplier: 1.4,
            customer_price_multiplier: 1.5,
        },
        ScenarioMultiplier {
            name: "bulk",
            internal_cost_multiplier: 0.85,
            customer_price_multiplier: 0.9,
        },
        ScenarioMultiplier {
            name: "premium",
            internal_cost_multiplier: premium_internal,
            customer_price_multiplier: premium_customer,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_basic_rate_is_a_quarter() {
        let catalog = RateCatalog::standard();
        let entry = catalog.lookup(ChannelKind::Call, Some(PlanTier::Basic), None);
        assert_eq!(entry.customer_price, 0.25);
        assert_eq!(entry.margin, 0.28);
    }

    #[test]
    fn absent_tier_falls_back_to_channel_default() {
        let catalog = RateCatalog::standard();
        let entry = catalog.lookup(ChannelKind::Call, None, None);
        assert_eq!(entry, catalog.default_entry(ChannelKind::Call));
    }

    #[test]
    fn text_sub_type_selects_the_premium_row() {
        let catalog = RateCatalog::standard();
        let sms = catalog.lookup(ChannelKind::Text, Some(PlanTier::Starter), Some("sms"));
        let imessage = catalog.lookup(ChannelKind::Text, Some(PlanTier::Starter), Some("imessage"));
        assert!(imessage.customer_price > sms.customer_price);
    }

    #[test]
    fn social_platform_rate_wins_over_tier_rate() {
        let catalog = RateCatalog::standard();
        let linkedin = catalog.lookup(ChannelKind::Social, Some(PlanTier::Basic), Some("linkedin"));
        assert_eq!(linkedin.customer_price, 0.05);
        let generic = catalog.lookup(ChannelKind::Social, Some(PlanTier::Basic), None);
        assert_eq!(generic.customer_price, 0.04);
    }

    #[test]
    fn unknown_channel_gets_the_zero_sentinel() {
        let catalog = RateCatalog::standard();
        let entry = catalog.lookup(ChannelKind::Other, Some(PlanTier::Basic), None);
        assert_eq!(entry, RatePlanEntry::ZERO);
    }

    #[test]
    fn postcard_base_cost_is_58_cents() {
        let catalog = RateCatalog::standard();
        assert_eq!(catalog.mail_base_cost(MailKind::Postcard), Some(0.58));
        assert_eq!(catalog.mail_base_cost(MailKind::Letter), Some(0.85));
        assert_eq!(catalog.mail_base_cost(MailKind::Check), Some(1.25));
        assert_eq!(catalog.mail_base_cost(MailKind::AiTriggered), None);
    }

    #[test]
    fn every_margin_sits_between_zero_and_one() {
        let catalog = RateCatalog::standard();
        for entry in catalog.all_entries() {
            assert!(
                (0.0..=1.0).contains(&entry.margin),
                "margin {} out of range for {:?}",
                entry.margin,
                entry
            );
        }
    }

    #[test]
    fn scenario_tables_cover_every_priced_channel() {
        let catalog = RateCatalog::standard();
        for channel in [
            ChannelKind::Call,
            ChannelKind::Text,
            ChannelKind::Social,
            ChannelKind::DirectMail,
        ] {
            let names: Vec<&str> = catalog
                .scenario_multipliers(channel)
                .iter()
                .map(|s| s.name)
                .collect();
            assert_eq!(
                names,
                vec!["weekend", "holiday", "voicemail", "transfer", "bulk", "premium"]
            );
        }
    }
}
