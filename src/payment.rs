// Adapter Pattern: payment processors
// Stripe's legacy `make_transaction` is exposed through `PaymentProcessor`.

use crate::error::ParseKindError;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Target interface the checkout code expects.
pub trait PaymentProcessor {
    /// Charges `amount` and returns the processor's confirmation.
    fn process_payment(&self, amount: f64) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalPaymentProcessor;

impl PaymentProcessor for PayPalPaymentProcessor {
    fn process_payment(&self, amount: f64) -> String {
        let message = format!("Processing payment of {amount} via PayPal.");
        info!(amount, provider = "PayPal", "{message}");
        message
    }
}

// ============================================================================
// Legacy service
// ============================================================================

/// Method surface of the Stripe client.
#[cfg_attr(test, mockall::automock)]
pub trait StripeApi {
    fn make_transaction(&self, total_amount: f64) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StripePaymentService;

impl StripeApi for StripePaymentService {
    fn make_transaction(&self, total_amount: f64) -> String {
        let message = format!("Making transaction of {total_amount} via Stripe.");
        info!(total_amount, provider = "Stripe", "{message}");
        message
    }
}

#[derive(Debug, Clone, Default)]
pub struct StripePaymentAdapter<S = StripePaymentService> {
    service: S,
}

impl<S: StripeApi> StripePaymentAdapter<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }
}

impl<S: StripeApi> PaymentProcessor for StripePaymentAdapter<S> {
    fn process_payment(&self, amount: f64) -> String {
        debug!(amount, "forwarding payment to Stripe");
        self.service.make_transaction(amount)
    }
}

// ============================================================================
// Provider selection
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub enum PaymentProvider {
    PayPal,
    Stripe,
}

impl PaymentProvider {
    pub fn processor(self) -> Box<dyn PaymentProcessor> {
        match self {
            PaymentProvider::PayPal => Box::new(PayPalPaymentProcessor),
            PaymentProvider::Stripe => Box::new(StripePaymentAdapter::new(StripePaymentService)),
        }
    }
}

impl fmt::Display for PaymentProvider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PaymentProvider::PayPal => f.write_str("PayPal"),
            PaymentProvider::Stripe => f.write_str("Stripe"),
        }
    }
}

impl FromStr for PaymentProvider {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PayPal" => Ok(PaymentProvider::PayPal),
            "Stripe" => Ok(PaymentProvider::Stripe),
            _ => Err(ParseKindError::new("payment provider", s, "PayPal, Stripe")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_paypal_message() {
        assert_eq!(
            PayPalPaymentProcessor.process_payment(100.0),
            "Processing payment of 100 via PayPal."
        );
    }

    #[test]
    fn test_stripe_adapter_matches_direct_call() {
        let direct = StripePaymentService.make_transaction(200.0);
        let adapted = StripePaymentAdapter::new(StripePaymentService).process_payment(200.0);

        assert_eq!(adapted, direct);
        assert_eq!(adapted, "Making transaction of 200 via Stripe.");
    }

    #[test]
    fn test_stripe_adapter_passes_amount_unchanged() {
        let mut mock = MockStripeApi::new();
        mock.expect_make_transaction()
            .with(eq(42.75))
            .times(1)
            .returning(|amount| format!("charged {amount}"));

        let adapter = StripePaymentAdapter::new(mock);
        assert_eq!(adapter.process_payment(42.75), "charged 42.75");
    }

    #[test]
    fn test_processors_through_trait_objects() {
        let processors: Vec<Box<dyn PaymentProcessor>> = vec![
            PaymentProvider::PayPal.processor(),
            PaymentProvider::Stripe.processor(),
        ];

        let messages: Vec<String> = processors.iter().map(|p| p.process_payment(9.5)).collect();
        assert_eq!(messages[0], "Processing payment of 9.5 via PayPal.");
        assert_eq!(messages[1], "Making transaction of 9.5 via Stripe.");
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("Stripe".parse::<PaymentProvider>(), Ok(PaymentProvider::Stripe));
        assert!("Square".parse::<PaymentProvider>().is_err());
    }
}
