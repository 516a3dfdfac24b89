use std::io::Write;

use chrono::{DateTime, Duration, Local};

use crate::application::runner::{emit, separator, PatternRunner};
use crate::application::ApplicationResult;
use crate::domain::payment::Amount;
use crate::domain::plans::{
    EmailCampaignBuilder, EmailCampaignDirector, SubscriptionPlanBuilder, SubscriptionPlanDirector,
};
use crate::domain::PatternType;

pub struct BuilderRunner {
    now: DateTime<Local>,
}

impl Default for BuilderRunner {
    fn default() -> Self {
        Self::at(Local::now())
    }
}

impl BuilderRunner {
    /// Runner whose campaign schedules are relative to `now`.
    pub fn at(now: DateTime<Local>) -> Self {
        Self { now }
    }

    fn subscription_demo(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        let director = SubscriptionPlanDirector;

        emit(out, "Free Plan:")?;
        emit(out, format!("{}\n", director.free_plan()))?;

        emit(out, "Team Plan:")?;
        emit(out, format!("{}\n", director.team_plan()))?;

        let custom = SubscriptionPlanBuilder::new()
            .name("Custom")
            .price(Amount::from_cents(29_999))
            .user_limit(50)
            .storage_limit(500)
            .api_access(50_000)
            .feature("Custom Support")
            .feature("White Labeling")
            .custom_setting("customDomain", "true")
            .build();
        emit(out, "Custom Plan:")?;
        emit(out, custom)
    }

    fn campaign_demo(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        let director = EmailCampaignDirector::new(self.now);

        emit(out, "Welcome Email Campaign:")?;
        emit(out, format!("{}\n", director.welcome_email()))?;

        emit(out, "Newsletter Campaign:")?;
        emit(out, format!("{}\n", director.newsletter()))?;

        emit(out, "Promotional Campaign:")?;
        emit(out, format!("{}\n", director.promotional("SUMMER2025")))?;

        let custom = EmailCampaignBuilder::new()
            .name("Product Launch")
            .subject("Introducing Our New Product!")
            .sender("product@company.com", "Product Team")
            .template("<h1>Big News!</h1><p>Check out our latest product...</p>")
            .recipient("user1@example.com")
            .recipient("user2@example.com")
            .personalization("productName", "{{productName}}")
            .tracking(true, true)
            .schedule(self.now + Duration::days(7))
            .build();
        emit(out, "Custom Campaign:")?;
        emit(out, custom)
    }
}

impl PatternRunner for BuilderRunner {
    fn pattern(&self) -> PatternType {
        PatternType::Builder
    }

    fn run_pattern(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        emit(out, "Subscription Plan Builder Demo:\n")?;
        self.subscription_demo(out)?;
        separator(out)?;
        emit(out, "Email Campaign Builder Demo:\n")?;
        self.campaign_demo(out)
    }
}
