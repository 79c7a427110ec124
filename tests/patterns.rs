// End-to-end checks through the public API only.

use design_patterns::beverage::{Espresso, Milk, Sugar, WhippedCream};
use design_patterns::delivery::{ExternalLogisticsServiceA, LogisticsAdapterA};
use design_patterns::payment::{StripeApi, StripePaymentAdapter, StripePaymentService};
use design_patterns::report::{CsvExportDecorator, SalesReport, SortingDecorator};
use design_patterns::{
    Beverage, DeliveryError, DeliveryService, DeliveryServiceFactory, PaymentProcessor, Price,
    Report, Scenario,
};
use std::path::Path;

#[test]
fn test_wrap_order_changes_description_not_cost() {
    let milk_sugar = Sugar::new(Milk::new(Espresso));
    let sugar_milk = Milk::new(Sugar::new(Espresso));

    assert_eq!(milk_sugar.description(), "Espresso, Milk, Sugar");
    assert_eq!(sugar_milk.description(), "Espresso, Sugar, Milk");
    assert_eq!(milk_sugar.cost(), Price::from_cents(270));
    assert_eq!(milk_sugar.cost(), sugar_milk.cost());
}

#[test]
fn test_boxed_chain_rebinding() {
    let mut drink: Box<dyn Beverage> = Box::new(Espresso);
    drink = Box::new(Milk::new(drink));
    drink = Box::new(WhippedCream::new(drink));
    assert_eq!(drink.receipt_line(), "Espresso, Milk, Whipped Cream : $3.20");
}

#[test]
fn test_report_chain() {
    let report = CsvExportDecorator::new(SortingDecorator::new(SalesReport, "Amount"));
    assert_eq!(report.generate(), "Sales Report Data sorted by Amount in CSV format");
}

#[test]
fn test_stripe_adapter_has_same_effect_as_legacy_call() {
    let adapter = StripePaymentAdapter::new(StripePaymentService);
    assert_eq!(
        adapter.process_payment(200.0),
        StripePaymentService.make_transaction(200.0)
    );
}

#[test]
fn test_factory_services_are_uniform() {
    for (key, order_id) in [("Internal", "1"), ("ExternalA", "2"), ("ExternalB", "3")] {
        let service = DeliveryServiceFactory::get_delivery_service(key).unwrap();
        let dispatched = service.deliver_order(order_id).unwrap();
        let status = service.delivery_status(order_id).unwrap();
        assert!(dispatched.contains(order_id), "{key}: {dispatched}");
        assert!(status.contains(order_id), "{key}: {status}");
    }
}

#[test]
fn test_factory_rejects_unknown_key() {
    assert!(matches!(
        DeliveryServiceFactory::get_delivery_service("Teleport"),
        Err(DeliveryError::InvalidServiceType(_))
    ));
}

#[test]
fn test_numeric_adapter_parse_failure() {
    let adapter = LogisticsAdapterA::new(ExternalLogisticsServiceA);
    assert!(matches!(
        adapter.deliver_order("abc"),
        Err(DeliveryError::InvalidOrderId { .. })
    ));
    assert_eq!(
        adapter.deliver_order("123").unwrap(),
        "Shipping item 123 via External Logistics A."
    );
}

#[test]
fn test_bundled_demo_scenario_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/scenario.toml");
    let scenario = Scenario::load(&path).unwrap();
    let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let lines = scenario.run(today);

    assert_eq!(lines[0], "Espresso, Milk, Sugar, Whipped Cream : $3.40");
    assert_eq!(lines[1], "Tea, Sugar : $1.70");
    assert_eq!(lines.last().unwrap(), "Delivery failed: Order id 'abc' is not numeric");
}
