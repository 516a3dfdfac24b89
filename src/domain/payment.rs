//! Payment processors created through factories (Factory Method).

use std::fmt;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

/// Money amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

pub trait PaymentProcessor {
    /// Human readable payment method, e.g. "credit card".
    fn method(&self) -> &'static str;

    /// Validate and record a payment. Failure is reported, never raised.
    fn process_payment(&mut self, amount: Amount) -> bool;

    /// Status line for the last processed payment.
    fn status(&self) -> String;
}

pub trait PaymentProcessorFactory {
    fn create_processor(&self) -> Box<dyn PaymentProcessor>;
}

const CREDIT_CARD_LIMIT: Amount = Amount::from_units(15_000);
const PAYPAL_LIMIT: Amount = Amount::from_units(10_000);

#[derive(Debug, Default)]
pub struct CreditCardProcessor {
    last_transaction_id: String,
    last_status: bool,
}

impl PaymentProcessor for CreditCardProcessor {
    fn method(&self) -> &'static str {
        "credit card"
    }

    fn process_payment(&mut self, amount: Amount) -> bool {
        self.last_transaction_id = Uuid::new_v4().to_string();
        self.last_status = amount.is_positive() && amount < CREDIT_CARD_LIMIT;
        debug!(%amount, ok = self.last_status, "credit card payment");
        self.last_status
    }

    fn status(&self) -> String {
        if self.last_status {
            format!(
                "Credit card payment successful. Transaction ID: {}",
                self.last_transaction_id
            )
        } else {
            "Credit card payment failed".to_string()
        }
    }
}

#[derive(Debug, Default)]
pub struct PayPalProcessor {
    last_transaction_id: String,
    last_status: bool,
}

impl PaymentProcessor for PayPalProcessor {
    fn method(&self) -> &'static str {
        "PayPal"
    }

    fn process_payment(&mut self, amount: Amount) -> bool {
        self.last_transaction_id = format!("PP-{}", Utc::now().timestamp_micros());
        self.last_status = amount.is_positive() && amount < PAYPAL_LIMIT;
        debug!(%amount, ok = self.last_status, "paypal payment");
        self.last_status
    }

    fn status(&self) -> String {
        if self.last_status {
            format!(
                "PayPal payment successful. PayPal Transaction ID: {}",
                self.last_transaction_id
            )
        } else {
            "PayPal payment failed".to_string()
        }
    }
}

pub struct CreditCardProcessorFactory;

impl PaymentProcessorFactory for CreditCardProcessorFactory {
    fn create_processor(&self) -> Box<dyn PaymentProcessor> {
        Box::new(CreditCardProcessor::default())
    }
}

pub struct PayPalProcessorFactory;

impl PaymentProcessorFactory for PayPalProcessorFactory {
    fn create_processor(&self) -> Box<dyn PaymentProcessor> {
        Box::new(PayPalProcessor::default())
    }
}
