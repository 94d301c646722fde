use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw campaign settings as posted by the creation wizard. Every field is
/// optional: the wizard sends whatever steps the user has filled in so far,
/// and the estimator is re-run on each change.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CampaignSettings {
    pub channel: Option<String>,
    pub lead_count: Option<i64>,
    pub min_daily_attempts: Option<i64>,
    pub max_daily_attempts: Option<i64>,
    pub daily_attempt_limit: Option<i64>,
    pub include_weekends: Option<bool>,
    pub do_voicemail_drops: Option<bool>,
    pub transfer_enabled: Option<bool>,
    pub transfer_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub days_selected: Option<i64>,
    pub campaign_name: Option<String>,
    pub available_agents: Option<i64>,
    pub plan_tier: Option<String>,
    pub text_type: Option<String>,
    pub social_platform: Option<String>,
    pub mail_type: Option<String>,
    #[serde(default)]
    pub features: FeatureSettings,
}

/// Optional add-ons picked in the features step of the wizard.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FeatureSettings {
    pub webhooks_configured: Option<i64>,
    pub custom_envelopes: Option<bool>,
    pub specialty_mailers: Option<bool>,
    pub compliance_handling: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChannelKind {
    Call,
    Text,
    Social,
    DirectMail,
    Other,
}

impl ChannelKind {
    pub fn parse(label: &str) -> Self {
        match label {
            "call" => ChannelKind::Call,
            "text" => ChannelKind::Text,
            "social" => ChannelKind::Social,
            "direct-mail" => ChannelKind::DirectMail,
            _ => ChannelKind::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Basic,
    Starter,
    Enterprise,
}

impl PlanTier {
    /// Lenient parse: an unrecognized tier label resolves to `None`, which
    /// sends rate lookups to the channel's default entry.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "basic" => Some(PlanTier::Basic),
            "starter" => Some(PlanTier::Starter),
            "enterprise" => Some(PlanTier::Enterprise),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    Sms,
    Imessage,
}

impl TextKind {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "sms" => Some(TextKind::Sms),
            "imessage" => Some(TextKind::Imessage),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MailKind {
    Postcard,
    Letter,
    Check,
    AiTriggered,
}

impl MailKind {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "postcard" => Some(MailKind::Postcard),
            "letter" => Some(MailKind::Letter),
            "check" => Some(MailKind::Check),
            "ai-triggered" => Some(MailKind::AiTriggered),
            _ => None,
        }
    }
}

/// Fully populated settings, produced once before any cost math runs so the
/// defaulting rules stay auditable in one place.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSettings {
    pub channel_label: String,
    pub channel: ChannelKind,
    pub lead_count: i64,
    pub min_daily_attempts: i64,
    pub max_daily_attempts: i64,
    pub daily_attempt_limit: i64,
    pub include_weekends: bool,
    pub do_voicemail_drops: bool,
    pub transfer_enabled: bool,
    pub transfer_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub days_selected: i64,
    pub campaign_name: String,
    pub available_agents: i64,
    pub plan_tier_label: String,
    pub plan_tier: Option<PlanTier>,
    pub text_type: Option<TextKind>,
    pub social_platform: Option<String>,
    pub mail_type: Option<MailKind>,
    pub webhooks_configured: i64,
    pub custom_envelopes: bool,
    pub specialty_mailers: bool,
    pub compliance_handling: bool,
}

// Upstream sends 0 for untouched numeric wizard fields, so zero is treated
// the same as absent. Negative values pass through untouched.
fn non_zero_or(value: Option<i64>, fallback: i64) -> i64 {
    match value {
        Some(n) if n != 0 => n,
        _ => fallback,
    }
}

fn label_or(value: &Option<String>, fallback: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s.clone(),
        _ => fallback.to_string(),
    }
}

impl ResolvedSettings {
    pub fn from_settings(settings: &CampaignSettings) -> Self {
        let channel_label = label_or(&settings.channel, "unknown");
        let plan_tier_label = label_or(&settings.plan_tier, "starter");

        ResolvedSettings {
            channel: ChannelKind::parse(&channel_label),
            channel_label,
            lead_count: non_zero_or(settings.lead_count, 0),
            min_daily_attempts: non_zero_or(settings.min_daily_attempts, 1),
            max_daily_attempts: non_zero_or(settings.max_daily_attempts, 3),
            daily_attempt_limit: non_zero_or(settings.daily_attempt_limit, 1000),
            include_weekends: settings.include_weekends.unwrap_or(false),
            do_voicemail_drops: settings.do_voicemail_drops.unwrap_or(false),
            transfer_enabled: settings.transfer_enabled.unwrap_or(false),
            transfer_type: settings.transfer_type.clone(),
            start_date: settings.start_date,
            end_date: settings.end_date,
            days_selected: non_zero_or(settings.days_selected, 1),
            campaign_name: settings.campaign_name.clone().unwrap_or_default(),
            available_agents: non_zero_or(settings.available_agents, 0),
            plan_tier: PlanTier::parse(&plan_tier_label),
            plan_tier_label,
            text_type: settings.text_type.as_deref().and_then(TextKind::parse),
            social_platform: settings.social_platform.clone(),
            mail_type: settings.mail_type.as_deref().and_then(MailKind::parse),
            webhooks_configured: non_zero_or(settings.features.webhooks_configured, 0),
            custom_envelopes: settings.features.custom_envelopes.unwrap_or(false),
            specialty_mailers: settings.features.specialty_mailers.unwrap_or(false),
            compliance_handling: settings.features.compliance_handling.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_settings_take_documented_defaults() {
        let resolved = ResolvedSettings::from_settings(&CampaignSettings::default());
        assert_eq!(resolved.channel_label, "unknown");
        assert_eq!(resolved.channel, ChannelKind::Other);
        assert_eq!(resolved.lead_count, 0);
        assert_eq!(resolved.min_daily_attempts, 1);
        assert_eq!(resolved.max_daily_attempts, 3);
        assert_eq!(resolved.daily_attempt_limit, 1000);
        assert_eq!(resolved.days_selected, 1);
        assert_eq!(resolved.plan_tier_label, "starter");
        assert_eq!(resolved.plan_tier, Some(PlanTier::Starter));
        assert!(!resolved.include_weekends);
        assert!(!resolved.do_voicemail_drops);
        assert!(!resolved.transfer_enabled);
    }

    #[test]
    fn zero_numerics_are_treated_as_absent() {
        let settings = CampaignSettings {
            min_daily_attempts: Some(0),
            max_daily_attempts: Some(0),
            daily_attempt_limit: Some(0),
            days_selected: Some(0),
            ..Default::default()
        };
        let resolved = ResolvedSettings::from_settings(&settings);
        assert_eq!(resolved.min_daily_attempts, 1);
        assert_eq!(resolved.max_daily_attempts, 3);
        assert_eq!(resolved.daily_attempt_limit, 1000);
        assert_eq!(resolved.days_selected, 1);
    }

    #[test]
    fn negative_numerics_pass_through() {
        let settings = CampaignSettings {
            lead_count: Some(-50),
            min_daily_attempts: Some(-2),
            ..Default::default()
        };
        let resolved = ResolvedSettings::from_settings(&settings);
        assert_eq!(resolved.lead_count, -50);
        assert_eq!(resolved.min_daily_attempts, -2);
    }

    #[test]
    fn channel_label_passes_through_unchanged() {
        let settings = CampaignSettings {
            channel: Some("carrier-pigeon".into()),
            ..Default::default()
        };
        let resolved = ResolvedSettings::from_settings(&settings);
        assert_eq!(resolved.channel_label, "carrier-pigeon");
        assert_eq!(resolved.channel, ChannelKind::Other);
    }

    #[test]
    fn unrecognized_plan_tier_resolves_to_no_tier() {
        let settings = CampaignSettings {
            plan_tier: Some("gold".into()),
            ..Default::default()
        };
        let resolved = ResolvedSettings::from_settings(&settings);
        assert_eq!(resolved.plan_tier_label, "gold");
        assert_eq!(resolved.plan_tier, None);
    }

    #[test]
    fn sub_types_parse_leniently() {
        let settings = CampaignSettings {
            text_type: Some("imessage".into()),
            mail_type: Some("mystery-box".into()),
            ..Default::default()
        };
        let resolved = ResolvedSettings::from_settings(&settings);
        assert_eq!(resolved.text_type, Some(TextKind::Imessage));
        assert_eq!(resolved.mail_type, None);
    }
}
