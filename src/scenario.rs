// Scenario configuration: which drinks, report, payments and deliveries to run.
// Loaded from TOML or JSON; `Scenario::default()` is the classic demo.

use crate::beverage::{self, BeverageKind, Condiment};
use crate::delivery::DeliveryServiceFactory;
use crate::error::ScenarioError;
use crate::payment::PaymentProvider;
use crate::report::{self, DateWindow, ReportKind, ReportStep};
use chrono::NaiveDate;
use itertools::Itertools;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn, Level};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub drinks: Vec<DrinkOrder>,
    #[serde(default)]
    pub report: Option<ReportRequest>,
    #[serde(default)]
    pub payments: Vec<PaymentRequest>,
    #[serde(default)]
    pub deliveries: Vec<DeliveryRequest>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrinkOrder {
    pub base: BeverageKind,
    #[serde(default)]
    pub condiments: Vec<Condiment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportRequest {
    pub kind: ReportKind,
    #[serde(default)]
    pub steps: Vec<ReportStep>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaymentRequest {
    pub provider: PaymentProvider,
    pub amount: f64,
}

// `service` stays a string: unknown keys are a factory error at run time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeliveryRequest {
    pub service: String,
    pub order_id: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            log_level: default_log_level(),
            drinks: vec![DrinkOrder {
                base: BeverageKind::Espresso,
                condiments: vec![Condiment::Milk, Condiment::Sugar, Condiment::WhippedCream],
            }],
            report: Some(ReportRequest {
                kind: ReportKind::Sales,
                steps: vec![
                    ReportStep::DateFilter(DateWindow::LastDays { last_days: 7 }),
                    ReportStep::Sort("Date".to_string()),
                    ReportStep::Csv,
                ],
            }),
            payments: vec![
                PaymentRequest {
                    provider: PaymentProvider::PayPal,
                    amount: 100.0,
                },
                PaymentRequest {
                    provider: PaymentProvider::Stripe,
                    amount: 200.0,
                },
            ],
            deliveries: vec![
                DeliveryRequest {
                    service: "ExternalA".to_string(),
                    order_id: "123".to_string(),
                },
                DeliveryRequest {
                    service: "ExternalB".to_string(),
                    order_id: "456".to_string(),
                },
            ],
        }
    }
}

impl Scenario {
    pub fn from_toml_str(content: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Picks the format from the extension, falling back to sniffing for JSON.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ if content.trim_start().starts_with('{') => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    pub fn level(&self) -> Result<Level, ScenarioError> {
        Level::from_str(&self.log_level).map_err(|_| ScenarioError::InvalidValue {
            field: "log_level".to_string(),
            reason: format!("'{}' is not a tracing level", self.log_level),
        })
    }

    fn validate(&self) -> Result<(), ScenarioError> {
        self.level()?;

        for (index, payment) in self.payments.iter().enumerate() {
            if !payment.amount.is_finite() || payment.amount < 0.0 {
                return Err(ScenarioError::InvalidValue {
                    field: format!("payments[{index}].amount"),
                    reason: format!("{} is not a non-negative amount", payment.amount),
                });
            }
        }

        if let Some(request) = &self.report {
            for step in &request.steps {
                if let ReportStep::DateFilter(DateWindow::Between { from, to }) = step {
                    if from > to {
                        return Err(ScenarioError::InvalidValue {
                            field: "report.steps.date_filter".to_string(),
                            reason: format!("{from} is after {to}"),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Runs every section in order and returns the lines a caller would print.
    /// A failing delivery becomes a line; it does not stop the run.
    pub fn run(&self, today: NaiveDate) -> Vec<String> {
        let mut lines = Vec::new();

        for order in &self.drinks {
            debug!(
                base = %order.base,
                condiments = %order.condiments.iter().join(", "),
                "preparing drink"
            );
            let drink = beverage::prepare(order.base, &order.condiments);
            lines.push(drink.receipt_line());
        }

        if let Some(request) = &self.report {
            let report = report::compose(request.kind, &request.steps, today);
            lines.push(report.generate());
        }

        for payment in &self.payments {
            let processor = payment.provider.processor();
            lines.push(processor.process_payment(payment.amount));
        }

        for delivery in &self.deliveries {
            let outcome = DeliveryServiceFactory::get_delivery_service(&delivery.service)
                .and_then(|service| {
                    let dispatched = service.deliver_order(&delivery.order_id)?;
                    let status = service.delivery_status(&delivery.order_id)?;
                    Ok([dispatched, status])
                });

            match outcome {
                Ok(messages) => lines.extend(messages),
                Err(err) => {
                    warn!(service = %delivery.service, order_id = %delivery.order_id, error = %err, "delivery failed");
                    lines.push(format!("Delivery failed: {err}"));
                }
            }
        }

        lines
    }
}
