// Adapter + Factory Pattern: delivery services
// Two external logistics providers with their own APIs are adapted to the
// internal `DeliveryService` trait; the factory picks one by key.

use crate::error::DeliveryError;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

// ============================================================================
// Target interface
// ============================================================================

pub trait DeliveryService {
    /// Dispatches the order and returns the carrier's confirmation.
    fn deliver_order(&self, order_id: &str) -> Result<String, DeliveryError>;

    fn delivery_status(&self, order_id: &str) -> Result<String, DeliveryError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InternalDeliveryService;

impl DeliveryService for InternalDeliveryService {
    fn deliver_order(&self, order_id: &str) -> Result<String, DeliveryError> {
        let message = format!("Delivering order {order_id} via internal service.");
        info!(order_id, carrier = "Internal", "{message}");
        Ok(message)
    }

    fn delivery_status(&self, order_id: &str) -> Result<String, DeliveryError> {
        Ok(format!("Status of order {order_id} in internal service."))
    }
}

// ============================================================================
// External logistics A: numeric item ids
// ============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait LegacyShipping {
    fn ship_item(&self, item_id: i32) -> String;
    fn track_shipment(&self, shipment_id: i32) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalLogisticsServiceA;

impl LegacyShipping for ExternalLogisticsServiceA {
    fn ship_item(&self, item_id: i32) -> String {
        let message = format!("Shipping item {item_id} via External Logistics A.");
        info!(item_id, carrier = "ExternalA", "{message}");
        message
    }

    fn track_shipment(&self, shipment_id: i32) -> String {
        format!("Tracking shipment {shipment_id} via External Logistics A.")
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogisticsAdapterA<S = ExternalLogisticsServiceA> {
    service: S,
}

impl<S: LegacyShipping> LogisticsAdapterA<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }
}

// Surrounding whitespace is accepted, as the legacy integer parser does.
fn parse_numeric_id(order_id: &str) -> Result<i32, DeliveryError> {
    order_id
        .trim()
        .parse::<i32>()
        .map_err(|err| DeliveryError::invalid_order_id(order_id, err))
}

impl<S: LegacyShipping> DeliveryService for LogisticsAdapterA<S> {
    fn deliver_order(&self, order_id: &str) -> Result<String, DeliveryError> {
        let item_id = parse_numeric_id(order_id)?;
        Ok(self.service.ship_item(item_id))
    }

    fn delivery_status(&self, order_id: &str) -> Result<String, DeliveryError> {
        let shipment_id = parse_numeric_id(order_id)?;
        Ok(self.service.track_shipment(shipment_id))
    }
}

// ============================================================================
// External logistics B: free-form package codes
// ============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait PackageCarrier {
    fn send_package(&self, package_info: &str) -> String;
    fn check_package_status(&self, tracking_code: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalLogisticsServiceB;

impl PackageCarrier for ExternalLogisticsServiceB {
    fn send_package(&self, package_info: &str) -> String {
        let message = format!("Sending package {package_info} via External Logistics B.");
        info!(package_info, carrier = "ExternalB", "{message}");
        message
    }

    fn check_package_status(&self, tracking_code: &str) -> String {
        format!("Status of package {tracking_code} via External Logistics B.")
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogisticsAdapterB<S = ExternalLogisticsServiceB> {
    service: S,
}

impl<S: PackageCarrier> LogisticsAdapterB<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }
}

impl<S: PackageCarrier> DeliveryService for LogisticsAdapterB<S> {
    fn deliver_order(&self, order_id: &str) -> Result<String, DeliveryError> {
        Ok(self.service.send_package(order_id))
    }

    fn delivery_status(&self, order_id: &str) -> Result<String, DeliveryError> {
        Ok(self.service.check_package_status(order_id))
    }
}

// ============================================================================
// Factory
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
pub enum DeliveryServiceKind {
    Internal,
    ExternalA,
    ExternalB,
}

impl DeliveryServiceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryServiceKind::Internal => "Internal",
            DeliveryServiceKind::ExternalA => "ExternalA",
            DeliveryServiceKind::ExternalB => "ExternalB",
        }
    }
}

impl fmt::Display for DeliveryServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryServiceKind {
    type Err = DeliveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Internal" => Ok(DeliveryServiceKind::Internal),
            "ExternalA" => Ok(DeliveryServiceKind::ExternalA),
            "ExternalB" => Ok(DeliveryServiceKind::ExternalB),
            _ => Err(DeliveryError::InvalidServiceType(s.to_string())),
        }
    }
}

/// Stateless; every call builds a new service.
pub struct DeliveryServiceFactory;

impl DeliveryServiceFactory {
    pub fn create(kind: DeliveryServiceKind) -> Box<dyn DeliveryService> {
        debug!(%kind, "creating delivery service");
        match kind {
            DeliveryServiceKind::Internal => Box::new(InternalDeliveryService),
            DeliveryServiceKind::ExternalA => {
                Box::new(LogisticsAdapterA::new(ExternalLogisticsServiceA))
            }
            DeliveryServiceKind::ExternalB => {
                Box::new(LogisticsAdapterB::new(ExternalLogisticsServiceB))
            }
        }
    }

    pub fn get_delivery_service(service_type: &str) -> Result<Box<dyn DeliveryService>, DeliveryError> {
        let kind = service_type.parse::<DeliveryServiceKind>()?;
        Ok(Self::create(kind))
    }
}
