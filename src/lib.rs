//! # Decorator, Adapter and Factory
//!
//! Two small domains wired with classic structural and creational patterns:
//!
//! - [`beverage`]: condiments decorate a drink, adding to its cost and description
//! - [`report`]: filters, sorting and export formats decorate a report
//! - [`payment`]: a legacy Stripe client adapted to [`payment::PaymentProcessor`]
//! - [`delivery`]: external logistics APIs adapted to [`delivery::DeliveryService`],
//!   selected by [`delivery::DeliveryServiceFactory`]
//! - [`scenario`]: a TOML/JSON description of a demo run
//!
//! Run the demo with:
//! ```bash
//! cargo run --bin patterns-demo -- demos/scenario.toml
//! ```

pub mod beverage;
pub mod delivery;
pub mod error;
pub mod payment;
pub mod price;
pub mod report;
pub mod scenario;

pub use beverage::{Beverage, BeverageExt};
pub use delivery::{DeliveryService, DeliveryServiceFactory, DeliveryServiceKind};
pub use error::{DeliveryError, ParseKindError, ScenarioError};
pub use payment::PaymentProcessor;
pub use price::Price;
pub use report::Report;
pub use scenario::Scenario;
