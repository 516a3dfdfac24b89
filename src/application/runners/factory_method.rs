use std::io::Write;

use crate::application::runner::{emit, PatternRunner};
use crate::application::ApplicationResult;
use crate::domain::payment::{
    Amount, CreditCardProcessorFactory, PayPalProcessorFactory, PaymentProcessor,
    PaymentProcessorFactory,
};
use crate::domain::PatternType;

pub struct FactoryMethodRunner;

fn pay(
    processor: &mut dyn PaymentProcessor,
    amount: Amount,
    out: &mut dyn Write,
) -> ApplicationResult<()> {
    emit(
        out,
        format!("Processing {} payment of {}", processor.method(), amount),
    )?;
    processor.process_payment(amount);
    emit(out, processor.status())
}

impl PatternRunner for FactoryMethodRunner {
    fn pattern(&self) -> PatternType {
        PatternType::FactoryMethod
    }

    fn run_pattern(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        let mut credit_card = CreditCardProcessorFactory.create_processor();
        emit(out, "\nTesting Credit Card Payment:")?;
        pay(credit_card.as_mut(), Amount::from_units(500), out)?;

        let mut paypal = PayPalProcessorFactory.create_processor();
        emit(out, "\nTesting PayPal Payment:")?;
        pay(paypal.as_mut(), Amount::from_cents(75_050), out)?;

        // Over the credit card limit
        emit(out, "\nTesting Failed Payment:")?;
        pay(credit_card.as_mut(), Amount::from_units(20_000), out)
    }
}
