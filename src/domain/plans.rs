//! Subscription plans and email campaigns assembled step by step (Builder).

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Duration, Local};

use crate::domain::payment::Amount;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionPlan {
    pub name: String,
    pub price: Amount,
    pub user_limit: u32,
    pub storage_limit_gb: u64,
    /// Monthly API request limit, None when the plan has no API access
    pub api_request_limit: Option<u32>,
    pub features: Vec<String>,
    pub custom_settings: BTreeMap<String, String>,
}

impl fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Plan - {}/month", self.name, self.price)?;
        writeln!(f, "Users: {}", self.user_limit)?;
        writeln!(f, "Storage: {}GB", self.storage_limit_gb)?;
        match self.api_request_limit {
            Some(limit) => writeln!(f, "API Access: Yes ({limit} requests/month)")?,
            None => writeln!(f, "API Access: No")?,
        }
        write!(f, "Features: {}", self.features.join(", "))
    }
}

#[derive(Debug, Default)]
pub struct SubscriptionPlanBuilder {
    plan: SubscriptionPlan,
}

impl SubscriptionPlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.plan.name = name.into();
        self
    }

    pub fn price(mut self, price: Amount) -> Self {
        self.plan.price = price;
        self
    }

    pub fn user_limit(mut self, limit: u32) -> Self {
        self.plan.user_limit = limit;
        self
    }

    pub fn storage_limit(mut self, gigabytes: u64) -> Self {
        self.plan.storage_limit_gb = gigabytes;
        self
    }

    pub fn api_access(mut self, request_limit: u32) -> Self {
        self.plan.api_request_limit = Some(request_limit);
        self
    }

    pub fn feature(mut self, feature: impl Into<String>) -> Self {
        self.plan.features.push(feature.into());
        self
    }

    pub fn custom_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.plan.custom_settings.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> SubscriptionPlan {
        self.plan
    }
}

/// Predefined plan recipes. Every recipe starts from a fresh builder.
pub struct SubscriptionPlanDirector;

impl SubscriptionPlanDirector {
    pub fn free_plan(&self) -> SubscriptionPlan {
        SubscriptionPlanBuilder::new()
            .name("Free")
            .price(Amount::from_units(0))
            .user_limit(5)
            .storage_limit(10)
            .feature("Basic Support")
            .feature("Core Features")
            .build()
    }

    pub fn team_plan(&self) -> SubscriptionPlan {
        SubscriptionPlanBuilder::new()
            .name("Team")
            .price(Amount::from_cents(4_999))
            .user_limit(25)
            .storage_limit(100)
            .api_access(10_000)
            .feature("Priority Support")
            .feature("Advanced Features")
            .feature("Team Collaboration")
            .feature("Analytics")
            .build()
    }

    pub fn enterprise_plan(&self) -> SubscriptionPlan {
        SubscriptionPlanBuilder::new()
            .name("Enterprise")
            .price(Amount::from_cents(19_999))
            .user_limit(100)
            .storage_limit(1_000)
            .api_access(1_000_000)
            .feature("24/7 Support")
            .feature("All Features")
            .feature("Custom Integrations")
            .feature("Advanced Security")
            .feature("SLA Guarantee")
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailCampaign {
    pub name: String,
    pub subject: String,
    pub from_email: String,
    pub from_name: String,
    pub template_html: String,
    pub recipients: Vec<String>,
    pub personalization: BTreeMap<String, String>,
    pub scheduled: Option<DateTime<Local>>,
    pub track_opens: bool,
    pub track_clicks: bool,
    pub headers: BTreeMap<String, String>,
}

impl fmt::Display for EmailCampaign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Campaign: {}", self.name)?;
        writeln!(f, "Subject: {}", self.subject)?;
        writeln!(f, "From: {} <{}>", self.from_name, self.from_email)?;
        writeln!(f, "Recipients: {}", self.recipients.len())?;
        match self.scheduled {
            Some(at) => writeln!(f, "Scheduled: {}", at.format("%Y-%m-%d %H:%M"))?,
            None => writeln!(f, "Scheduled: immediately")?,
        }
        write!(
            f,
            "Tracking: Opens={}, Clicks={}",
            self.track_opens, self.track_clicks
        )
    }
}

#[derive(Debug, Default)]
pub struct EmailCampaignBuilder {
    campaign: EmailCampaign,
}

impl EmailCampaignBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.campaign.name = name.into();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.campaign.subject = subject.into();
        self
    }

    pub fn sender(mut self, email: impl Into<String>, name: impl Into<String>) -> Self {
        self.campaign.from_email = email.into();
        self.campaign.from_name = name.into();
        self
    }

    pub fn template(mut self, html: impl Into<String>) -> Self {
        self.campaign.template_html = html.into();
        self
    }

    pub fn recipient(mut self, email: impl Into<String>) -> Self {
        self.campaign.recipients.push(email.into());
        self
    }

    pub fn personalization(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.campaign.personalization.insert(key.into(), value.into());
        self
    }

    pub fn schedule(mut self, at: DateTime<Local>) -> Self {
        self.campaign.scheduled = Some(at);
        self
    }

    pub fn tracking(mut self, opens: bool, clicks: bool) -> Self {
        self.campaign.track_opens = opens;
        self.campaign.track_clicks = clicks;
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.campaign.headers.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> EmailCampaign {
        self.campaign
    }
}

/// Predefined campaign recipes, scheduled relative to `now`.
pub struct EmailCampaignDirector {
    now: DateTime<Local>,
}

impl EmailCampaignDirector {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now }
    }

    pub fn welcome_email(&self) -> EmailCampaign {
        EmailCampaignBuilder::new()
            .name("Welcome Campaign")
            .subject("Welcome to Our Service!")
            .sender("welcome@company.com", "Company Name")
            .template("<h1>Welcome!</h1><p>Thank you for joining us...</p>")
            .personalization("firstName", "{{firstName}}")
            .tracking(true, true)
            .build()
    }

    pub fn newsletter(&self) -> EmailCampaign {
        EmailCampaignBuilder::new()
            .name("Monthly Newsletter")
            .subject("Your Monthly Update")
            .sender("news@company.com", "Company Newsletter")
            .template("<h1>Monthly Newsletter</h1><p>Here's what's new...</p>")
            .tracking(true, true)
            .schedule(self.now + Duration::days(1))
            .build()
    }

    pub fn promotional(&self, promo_code: &str) -> EmailCampaign {
        EmailCampaignBuilder::new()
            .name("Special Offer")
            .subject("Limited Time Offer Inside!")
            .sender("promotions@company.com", "Special Offers")
            .template(format!(
                "<h1>Special Offer</h1><p>Use code {promo_code} for 20% off!</p>"
            ))
            .personalization("promoCode", promo_code)
            .tracking(true, true)
            .header("X-Campaign-Type", "promotional")
            .schedule(self.now + Duration::hours(2))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_director_plans_are_independent() {
        let director = SubscriptionPlanDirector;
        let free = director.free_plan();
        let team = director.team_plan();
        assert_eq!(free.features, vec!["Basic Support", "Core Features"]);
        assert_eq!(team.features.len(), 4);
        assert_eq!(free.api_request_limit, None);
    }

    #[test]
    fn test_plan_display() {
        let plan = SubscriptionPlanDirector.team_plan();
        let text = plan.to_string();
        assert!(text.starts_with("Team Plan - $49.99/month\n"));
        assert!(text.contains("API Access: Yes (10000 requests/month)"));
        assert!(text.ends_with("Features: Priority Support, Advanced Features, Team Collaboration, Analytics"));
    }

    #[test]
    fn test_promotional_schedule_and_header() {
        let now = Local.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        let campaign = EmailCampaignDirector::new(now).promotional("SUMMER2025");
        assert_eq!(campaign.scheduled, Some(now + Duration::hours(2)));
        assert_eq!(
            campaign.headers.get("X-Campaign-Type").map(String::as_str),
            Some("promotional")
        );
        assert!(campaign.template_html.contains("SUMMER2025"));
        assert!(campaign
            .to_string()
            .contains("Scheduled: 2025-06-01 12:00"));
    }
}
