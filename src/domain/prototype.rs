//! Document and report templates copied from fully configured originals (Prototype).

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::domain::error::{DomainError, DomainResult};

/// A template that can produce an independent copy of itself.
pub trait Prototype {
    /// Deep copy carrying a fresh creation timestamp where the type tracks one.
    fn duplicate(&self) -> Self;
}

fn metadata_lines(metadata: &BTreeMap<String, String>) -> impl Iterator<Item = String> + '_ {
    metadata.iter().map(|(k, v)| format!("  {k}: {v}"))
}

fn section<'a>(title: &str, items: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    let mut lines = vec![String::new(), format!("{title}:")];
    lines.extend(items.into_iter().map(|item| format!("  {item}")));
    lines
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: DateTime<Local>,
    pub metadata: BTreeMap<String, String>,
}

impl ReportDocument {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            created: Local::now(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn display(&self) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            format!("Report: {}", self.title),
            format!("Author: {}", self.author),
            format!("Created: {}", self.created.format("%Y-%m-%d %H:%M:%S")),
            format!("Content: {}", self.content),
            "Metadata:".to_string(),
        ];
        lines.extend(metadata_lines(&self.metadata));
        lines
    }
}

impl Prototype for ReportDocument {
    fn duplicate(&self) -> Self {
        Self {
            created: Local::now(),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDocument {
    pub title: String,
    pub content: String,
    pub author: String,
    pub subject: String,
    pub created: DateTime<Local>,
    pub recipients: Vec<String>,
    pub metadata: BTreeMap<String, String>,
}

impl EmailDocument {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            subject: subject.into(),
            created: Local::now(),
            recipients: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn display(&self) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            format!("Email: {}", self.title),
            format!("Subject: {}", self.subject),
            format!("Author: {}", self.author),
            format!("Created: {}", self.created.format("%Y-%m-%d %H:%M:%S")),
            format!("Content: {}", self.content),
            format!("Recipients: {}", self.recipients.join(", ")),
            "Metadata:".to_string(),
        ];
        lines.extend(metadata_lines(&self.metadata));
        lines
    }
}

impl Prototype for EmailDocument {
    fn duplicate(&self) -> Self {
        Self {
            created: Local::now(),
            ..self.clone()
        }
    }
}

/// Parts shared by every report template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportBase {
    pub title: String,
    pub parameters: BTreeMap<String, String>,
    pub data_sources: Vec<String>,
    pub charts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinancialReport {
    pub base: ReportBase,
    pub fiscal_period: String,
    pub accounting_standard: String,
    pub currency_conversions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesReport {
    pub base: ReportBase,
    pub period: String,
    pub product_categories: Vec<String>,
    pub regions: Vec<String>,
}

impl SalesReport {
    pub fn add_product_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        debug!("added product category: {}", category);
        self.product_categories.push(category);
    }

    pub fn add_region(&mut self, region: impl Into<String>) {
        let region = region.into();
        debug!("added region: {}", region);
        self.regions.push(region);
    }
}

/// Closed set of report templates kept in a [`ReportTemplateRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTemplate {
    Financial(FinancialReport),
    Sales(SalesReport),
}

impl ReportTemplate {
    pub fn report_type(&self) -> &'static str {
        match self {
            ReportTemplate::Financial(_) => "Financial",
            ReportTemplate::Sales(_) => "Sales",
        }
    }

    fn base(&self) -> &ReportBase {
        match self {
            ReportTemplate::Financial(r) => &r.base,
            ReportTemplate::Sales(r) => &r.base,
        }
    }

    fn base_mut(&mut self) -> &mut ReportBase {
        match self {
            ReportTemplate::Financial(r) => &mut r.base,
            ReportTemplate::Sales(r) => &mut r.base,
        }
    }

    pub fn title(&self) -> &str {
        &self.base().title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.base_mut().title = title.into();
    }

    pub fn add_parameter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let (key, value) = (key.into(), value.into());
        debug!("added parameter: {} = {}", key, value);
        self.base_mut().parameters.insert(key, value);
    }

    pub fn add_data_source(&mut self, source: impl Into<String>) {
        let source = source.into();
        debug!("added data source: {}", source);
        self.base_mut().data_sources.push(source);
    }

    pub fn add_chart(&mut self, chart: impl Into<String>) {
        let chart = chart.into();
        debug!("added chart: {}", chart);
        self.base_mut().charts.push(chart);
    }

    pub fn configure_layout(&self) -> Vec<String> {
        match self {
            ReportTemplate::Financial(r) => vec![
                format!("Configuring layout for {} financial report", r.base.title),
                format!("Fiscal Period: {}", r.fiscal_period),
                format!("Accounting Standard: {}", r.accounting_standard),
            ],
            ReportTemplate::Sales(r) => vec![
                format!("Configuring layout for {} sales report", r.base.title),
                format!("Period: {}", r.period),
                format!("Categories: {}", r.product_categories.join(", ")),
            ],
        }
    }

    pub fn display(&self) -> Vec<String> {
        let base = self.base();
        let parameters: Vec<String> = base
            .parameters
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect();
        let mut lines = Vec::new();
        match self {
            ReportTemplate::Financial(r) => {
                lines.push(String::new());
                lines.push(format!("Financial Report: {}", base.title));
                lines.push(format!("Fiscal Period: {}", r.fiscal_period));
                lines.push(format!("Accounting Standard: {}", r.accounting_standard));
                lines.extend(section("Parameters", &parameters));
                lines.extend(section("Data Sources", &base.data_sources));
                lines.extend(section("Charts", &base.charts));
                lines.extend(section("Currency Conversions", &r.currency_conversions));
            }
            ReportTemplate::Sales(r) => {
                lines.push(String::new());
                lines.push(format!("Sales Report: {}", base.title));
                lines.push(format!("Period: {}", r.period));
                lines.extend(section("Parameters", &parameters));
                lines.extend(section("Product Categories", &r.product_categories));
                lines.extend(section("Regions", &r.regions));
                lines.extend(section("Data Sources", &base.data_sources));
                lines.extend(section("Charts", &base.charts));
            }
        }
        lines
    }
}

impl Prototype for ReportTemplate {
    fn duplicate(&self) -> Self {
        self.clone()
    }
}

/// Keyed store of prototypes; lookups hand out copies, never the originals.
#[derive(Debug, Default)]
pub struct ReportTemplateRegistry {
    templates: BTreeMap<String, ReportTemplate>,
}

impl ReportTemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: &str, template: ReportTemplate) -> DomainResult<()> {
        if key.is_empty() {
            return Err(DomainError::EmptyTemplateKey);
        }
        debug!("registered template: {} ({})", key, template.report_type());
        self.templates.insert(key.to_string(), template);
        Ok(())
    }

    pub fn get_template(&self, key: &str) -> DomainResult<ReportTemplate> {
        self.templates
            .get(key)
            .map(ReportTemplate::duplicate)
            .ok_or_else(|| DomainError::TemplateNotFound(key.to_string()))
    }

    /// `(key, report type)` pairs in key order.
    pub fn list(&self) -> Vec<(&str, &'static str)> {
        self.templates
            .iter()
            .map(|(k, t)| (k.as_str(), t.report_type()))
            .collect()
    }
}
