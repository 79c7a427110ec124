// Decorator Pattern: beverages and condiments
// A condiment wraps a beverage, adds its price and appends its name.

use crate::error::ParseKindError;
use crate::price::Price;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Component
// ============================================================================

pub trait Beverage {
    fn cost(&self) -> Price;
    fn description(&self) -> String;

    /// `"Espresso, Milk : $2.50"`
    fn receipt_line(&self) -> String {
        format!("{} : {}", self.description(), self.cost())
    }
}

// Lets runtime-built chains (`Box<dyn Beverage>`) be wrapped again.
impl<B: Beverage + ?Sized> Beverage for Box<B> {
    fn cost(&self) -> Price {
        (**self).cost()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

// ============================================================================
// Leaves
// ============================================================================

macro_rules! leaf_beverage {
    ($name:ident, $cents:expr) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Beverage for $name {
            fn cost(&self) -> Price {
                Price::from_cents($cents)
            }

            fn description(&self) -> String {
                stringify!($name).to_string()
            }
        }
    };
}

leaf_beverage!(Espresso, 200);
leaf_beverage!(Tea, 150);
leaf_beverage!(Latte, 300);
leaf_beverage!(Mocha, 350);

// ============================================================================
// Decorators
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Milk<B> {
    beverage: B,
}

impl<B: Beverage> Milk<B> {
    pub fn new(beverage: B) -> Self {
        Self { beverage }
    }
}

impl<B: Beverage> Beverage for Milk<B> {
    fn cost(&self) -> Price {
        self.beverage.cost() + Condiment::Milk.price()
    }

    fn description(&self) -> String {
        format!("{}, {}", self.beverage.description(), Condiment::Milk.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sugar<B> {
    beverage: B,
}

impl<B: Beverage> Sugar<B> {
    pub fn new(beverage: B) -> Self {
        Self { beverage }
    }
}

impl<B: Beverage> Beverage for Sugar<B> {
    fn cost(&self) -> Price {
        self.beverage.cost() + Condiment::Sugar.price()
    }

    fn description(&self) -> String {
        format!("{}, {}", self.beverage.description(), Condiment::Sugar.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhippedCream<B> {
    beverage: B,
}

impl<B: Beverage> WhippedCream<B> {
    pub fn new(beverage: B) -> Self {
        Self { beverage }
    }
}

impl<B: Beverage> Beverage for WhippedCream<B> {
    fn cost(&self) -> Price {
        self.beverage.cost() + Condiment::WhippedCream.price()
    }

    fn description(&self) -> String {
        format!(
            "{}, {}",
            self.beverage.description(),
            Condiment::WhippedCream.label()
        )
    }
}

/// Fluent wrapping: `Espresso.with_milk().with_sugar()`.
pub trait BeverageExt: Beverage + Sized {
    fn with_milk(self) -> Milk<Self> {
        Milk::new(self)
    }

    fn with_sugar(self) -> Sugar<Self> {
        Sugar::new(self)
    }

    fn with_whipped_cream(self) -> WhippedCream<Self> {
        WhippedCream::new(self)
    }
}

impl<B: Beverage> BeverageExt for B {}

// ============================================================================
// Runtime selection
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum BeverageKind {
    Espresso,
    Tea,
    Latte,
    Mocha,
}

impl BeverageKind {
    pub const ALL: [BeverageKind; 4] = [
        BeverageKind::Espresso,
        BeverageKind::Tea,
        BeverageKind::Latte,
        BeverageKind::Mocha,
    ];

    pub fn brew(self) -> Box<dyn Beverage> {
        match self {
            BeverageKind::Espresso => Box::new(Espresso),
            BeverageKind::Tea => Box::new(Tea),
            BeverageKind::Latte => Box::new(Latte),
            BeverageKind::Mocha => Box::new(Mocha),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BeverageKind::Espresso => "Espresso",
            BeverageKind::Tea => "Tea",
            BeverageKind::Latte => "Latte",
            BeverageKind::Mocha => "Mocha",
        }
    }
}

impl fmt::Display for BeverageKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BeverageKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BeverageKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseKindError::new("beverage", s, "Espresso, Tea, Latte, Mocha"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Condiment {
    Milk,
    Sugar,
    WhippedCream,
}

impl Condiment {
    pub const ALL: [Condiment; 3] = [Condiment::Milk, Condiment::Sugar, Condiment::WhippedCream];

    pub fn price(self) -> Price {
        match self {
            Condiment::Milk => Price::from_cents(50),
            Condiment::Sugar => Price::from_cents(20),
            Condiment::WhippedCream => Price::from_cents(70),
        }
    }

    /// Text appended to the description.
    pub fn label(self) -> &'static str {
        match self {
            Condiment::Milk => "Milk",
            Condiment::Sugar => "Sugar",
            Condiment::WhippedCream => "Whipped Cream",
        }
    }

    pub fn wrap(self, beverage: Box<dyn Beverage>) -> Box<dyn Beverage> {
        match self {
            Condiment::Milk => Box::new(Milk::new(beverage)),
            Condiment::Sugar => Box::new(Sugar::new(beverage)),
            Condiment::WhippedCream => Box::new(WhippedCream::new(beverage)),
        }
    }
}

impl fmt::Display for Condiment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condiment {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Milk" => Ok(Condiment::Milk),
            "Sugar" => Ok(Condiment::Sugar),
            "WhippedCream" | "Whipped Cream" => Ok(Condiment::WhippedCream),
            _ => Err(ParseKindError::new("condiment", s, "Milk, Sugar, WhippedCream")),
        }
    }
}

/// Brews `kind` and wraps it with each condiment, first to last.
pub fn prepare(kind: BeverageKind, condiments: &[Condiment]) -> Box<dyn Beverage> {
    condiments
        .iter()
        .fold(kind.brew(), |beverage, condiment| condiment.wrap(beverage))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::sample::select;

    #[test]
    fn test_leaf_costs() {
        assert_eq!(Espresso.cost(), Price::from_cents(200));
        assert_eq!(Tea.cost(), Price::from_cents(150));
        assert_eq!(Latte.cost(), Price::from_cents(300));
        assert_eq!(Mocha.cost(), Price::from_cents(350));
    }

    #[test]
    fn test_leaf_descriptions() {
        assert_eq!(Espresso.description(), "Espresso");
        assert_eq!(Tea.description(), "Tea");
        assert_eq!(Latte.description(), "Latte");
        assert_eq!(Mocha.description(), "Mocha");
    }

    #[test]
    fn test_single_decorators() {
        let milk = Milk::new(Tea);
        assert_eq!(milk.cost(), Price::from_cents(200));
        assert_eq!(milk.description(), "Tea, Milk");

        let sugar = Sugar::new(Tea);
        assert_eq!(sugar.cost(), Price::from_cents(170));
        assert_eq!(sugar.description(), "Tea, Sugar");

        let cream = WhippedCream::new(Mocha);
        assert_eq!(cream.cost(), Price::from_cents(420));
        assert_eq!(cream.description(), "Mocha, Whipped Cream");
    }

    #[test]
    fn test_description_follows_wrap_order() {
        let milk_then_sugar = Sugar::new(Milk::new(Espresso));
        let sugar_then_milk = Milk::new(Sugar::new(Espresso));

        assert_eq!(milk_then_sugar.description(), "Espresso, Milk, Sugar");
        assert_eq!(sugar_then_milk.description(), "Espresso, Sugar, Milk");
        assert_eq!(milk_then_sugar.cost(), sugar_then_milk.cost());
    }

    #[test]
    fn test_full_chain_matches_original_demo() {
        let mut drink: Box<dyn Beverage> = Box::new(Espresso);
        assert_eq!(drink.receipt_line(), "Espresso : $2.00");

        drink = Box::new(Milk::new(drink));
        assert_eq!(drink.receipt_line(), "Espresso, Milk : $2.50");

        drink = Box::new(Sugar::new(drink));
        assert_eq!(drink.receipt_line(), "Espresso, Milk, Sugar : $2.70");

        drink = Box::new(WhippedCream::new(drink));
        assert_eq!(
            drink.receipt_line(),
            "Espresso, Milk, Sugar, Whipped Cream : $3.40"
        );
    }

    #[test]
    fn test_extension_trait_builds_static_chain() {
        let drink = Latte.with_whipped_cream().with_sugar();
        assert_eq!(drink.description(), "Latte, Whipped Cream, Sugar");
        assert_eq!(drink.cost(), Price::from_cents(390));
    }

    #[test]
    fn test_repeated_condiment() {
        let drink = prepare(BeverageKind::Tea, &[Condiment::Sugar, Condiment::Sugar]);
        assert_eq!(drink.description(), "Tea, Sugar, Sugar");
        assert_eq!(drink.cost(), Price::from_cents(190));
    }

    #[test]
    fn test_prepare_without_condiments_is_leaf() {
        let drink = prepare(BeverageKind::Mocha, &[]);
        assert_eq!(drink.receipt_line(), Mocha.receipt_line());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Latte".parse::<BeverageKind>(), Ok(BeverageKind::Latte));
        assert!("Cappuccino".parse::<BeverageKind>().is_err());
        assert_eq!("WhippedCream".parse::<Condiment>(), Ok(Condiment::WhippedCream));
        assert_eq!("Whipped Cream".parse::<Condiment>(), Ok(Condiment::WhippedCream));
        assert!("Honey".parse::<Condiment>().is_err());
    }

    fn base_strategy() -> impl Strategy<Value = BeverageKind> {
        select(BeverageKind::ALL.to_vec())
    }

    fn condiments_strategy() -> impl Strategy<Value = Vec<Condiment>> {
        prop::collection::vec(select(Condiment::ALL.to_vec()), 0..8)
    }

    proptest! {
        #[test]
        fn test_chain_cost_is_base_plus_deltas(
            base in base_strategy(),
            condiments in condiments_strategy(),
        ) {
            let drink = prepare(base, &condiments);
            let expected = base.brew().cost() + condiments.iter().map(|c| c.price()).sum::<Price>();
            prop_assert_eq!(drink.cost(), expected);
        }

        #[test]
        fn test_chain_cost_ignores_order(
            base in base_strategy(),
            (original, shuffled) in condiments_strategy()
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        ) {
            prop_assert_eq!(prepare(base, &original).cost(), prepare(base, &shuffled).cost());
        }

        #[test]
        fn test_chain_description_appends_in_wrap_order(
            base in base_strategy(),
            condiments in condiments_strategy(),
        ) {
            let mut expected = base.name().to_string();
            for condiment in &condiments {
                expected.push_str(", ");
                expected.push_str(condiment.label());
            }
            prop_assert_eq!(prepare(base, &condiments).description(), expected);
        }
    }
}
