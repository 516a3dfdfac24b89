use std::io::Write;

use crate::application::runner::{emit, emit_all, PatternRunner};
use crate::application::ApplicationResult;
use crate::domain::prototype::{
    EmailDocument, FinancialReport, Prototype, ReportBase, ReportDocument, ReportTemplate,
    ReportTemplateRegistry, SalesReport,
};
use crate::domain::PatternType;

pub struct PrototypeRunner;

impl PrototypeRunner {
    fn document_example(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        emit(out, "=== Document Template System Demo ===\n")?;

        let mut report = ReportDocument::new(
            "Monthly Sales Report",
            "This report summarizes the monthly sales performance...",
            "John Doe",
        );
        report.metadata.insert("Department".into(), "Sales".into());
        report.metadata.insert("Period".into(), "Monthly".into());

        let mut email = EmailDocument::new(
            "Customer Welcome Email",
            "Welcome to our service! We're excited to have you...",
            "Marketing Team",
            "Welcome to Our Service!",
        );
        email.recipients.push("{{customer.email}}".into());
        email.metadata.insert("Category".into(), "Welcome".into());
        email.metadata.insert("Priority".into(), "High".into());

        emit(out, "=== Original Templates ===")?;
        emit_all(out, report.display())?;
        emit_all(out, email.display())?;

        emit(out, "\n=== Cloned and Customized Templates ===")?;
        let mut quarterly = report.duplicate();
        quarterly.title = "Quarterly Sales Report".into();
        quarterly.metadata.insert("Period".into(), "Quarterly".into());
        emit_all(out, quarterly.display())?;

        let mut reminder = email.duplicate();
        reminder.title = "Payment Reminder".into();
        reminder.subject = "Payment Due Reminder".into();
        reminder.content = "This is a friendly reminder about your upcoming payment...".into();
        reminder.metadata.insert("Category".into(), "Payment".into());
        emit_all(out, reminder.display())
    }

    fn register(
        registry: &mut ReportTemplateRegistry,
        key: &str,
        template: ReportTemplate,
        out: &mut dyn Write,
    ) -> ApplicationResult<()> {
        let report_type = template.report_type();
        registry.register(key, template)?;
        emit(out, format!("Registered template: {} ({})", key, report_type))
    }

    fn checkout(
        registry: &ReportTemplateRegistry,
        key: &str,
        out: &mut dyn Write,
    ) -> ApplicationResult<ReportTemplate> {
        let template = registry.get_template(key)?;
        emit(out, format!("Cloning template: {}", key))?;
        Ok(template)
    }

    fn report_example(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        emit(out, "=== Report Template System Demo ===\n")?;
        let mut registry = ReportTemplateRegistry::new();

        let mut financial = ReportTemplate::Financial(FinancialReport {
            base: ReportBase {
                title: "Quarterly Financial Report".into(),
                ..ReportBase::default()
            },
            fiscal_period: "Q2 2025".into(),
            accounting_standard: "IFRS".into(),
            ..FinancialReport::default()
        });
        financial.add_parameter("Department", "Finance");
        financial.add_data_source("SQL_Financial_DB");
        financial.add_chart("BalanceSheet");
        Self::register(&mut registry, "quarterly_financial", financial, out)?;

        let mut sales = SalesReport {
            base: ReportBase {
                title: "Monthly Sales Report".into(),
                ..ReportBase::default()
            },
            period: "May 2025".into(),
            ..SalesReport::default()
        };
        sales.add_product_category("Electronics");
        sales.add_product_category("Accessories");
        sales.add_region("North America");
        let mut sales = ReportTemplate::Sales(sales);
        sales.add_chart("SalesTrend");
        sales.add_chart("RegionalComparison");
        Self::register(&mut registry, "monthly_sales", sales, out)?;

        emit(out, "\nAvailable Templates:")?;
        for (key, report_type) in registry.list() {
            emit(out, format!("- {} ({})", key, report_type))?;
        }

        emit(out, "\n=== Cloning and Customizing Templates ===\n")?;

        let mut custom_financial = Self::checkout(&registry, "quarterly_financial", out)?;
        custom_financial.set_title("Annual Financial Report 2025");
        if let ReportTemplate::Financial(report) = &mut custom_financial {
            report.fiscal_period = "FY 2025".into();
        }
        custom_financial.add_chart("CashFlow");
        custom_financial.add_parameter("Auditor", "KPMG");
        emit_all(out, custom_financial.configure_layout())?;
        emit_all(out, custom_financial.display())?;

        let mut custom_sales = Self::checkout(&registry, "monthly_sales", out)?;
        custom_sales.set_title("Q2 Regional Sales Report");
        if let ReportTemplate::Sales(report) = &mut custom_sales {
            report.period = "Q2 2025".into();
            report.add_region("Europe");
            report.add_product_category("Services");
        }
        custom_sales.add_parameter("Currency", "USD");
        emit_all(out, custom_sales.configure_layout())?;
        emit_all(out, custom_sales.display())
    }
}

impl PatternRunner for PrototypeRunner {
    fn pattern(&self) -> PatternType {
        PatternType::Prototype
    }

    fn run_pattern(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        self.document_example(out)?;
        emit(out, format!("\n{}\n", "=".repeat(50)))?;
        self.report_example(out)
    }
}
