pub mod attempts;
pub mod catalog;
pub mod channels;
pub mod credits;
pub mod duration;
pub mod estimator;
pub mod features;
pub mod settings;

pub use catalog::RateCatalog;
pub use credits::{estimated_credits_of, format_currency};
pub use estimator::{estimate_campaign_cost, estimate_with_trace, CampaignCostResult};
pub use settings::CampaignSettings;
