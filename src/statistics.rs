use std::collections::HashMap;

use log::info;

use crate::{coffee_type::CoffeeType, container::CoffeeContainer};

/// Contadores de lo que paso mientras se atendian los pedidos
#[derive(Debug, Default)]
pub struct Statistics {
    coffees_by_type: HashMap<CoffeeType, u64>,
    water_used: f64,
    water_refilled: f64,
    breakdowns: u64,
    resets: u64,
    refills: u64,
    skipped: u64,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    pub fn record_coffee(&mut self, coffee: &CoffeeContainer) {
        *self.coffees_by_type.entry(coffee.coffee_type()).or_insert(0) += 1;
        self.water_used += coffee.capacity();
    }

    pub fn record_breakdown(&mut self) {
        self.breakdowns += 1;
    }

    pub fn record_reset(&mut self) {
        self.resets += 1;
    }

    pub fn record_refill(&mut self, volume: f64) {
        self.refills += 1;
        self.water_refilled += volume;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn coffees_made(&self) -> u64 {
        self.coffees_by_type.values().sum()
    }

    pub fn coffees_of(&self, coffee_type: CoffeeType) -> u64 {
        self.coffees_by_type.get(&coffee_type).copied().unwrap_or(0)
    }

    pub fn water_used(&self) -> f64 {
        self.water_used
    }

    pub fn water_refilled(&self) -> f64 {
        self.water_refilled
    }

    pub fn breakdowns(&self) -> u64 {
        self.breakdowns
    }

    pub fn resets(&self) -> u64 {
        self.resets
    }

    pub fn refills(&self) -> u64 {
        self.refills
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn print_statistics(&self) {
        let mut statistics = format!(
            "[STATISTICS] Coffees made={} | Skipped={} | Breakdowns={} | Resets={} | Refills={} ({} L) | Water used={} L |",
            self.coffees_made(),
            self.skipped,
            self.breakdowns,
            self.resets,
            self.refills,
            self.water_refilled,
            self.water_used
        );
        for (coffee_type, made) in self.coffees_by_type.iter() {
            statistics.push_str(&format!(" {:?}={} ", coffee_type, made));
        }
        info!("{}", statistics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{CoffeeCup, CoffeeMug};

    #[test]
    fn should_start_with_everything_in_zero() {
        let statistics = Statistics::new();
        assert_eq!(0, statistics.coffees_made());
        assert_eq!(0.0, statistics.water_used());
        assert_eq!(0, statistics.skipped());
    }

    #[test]
    fn should_count_coffees_by_type() {
        let mut statistics = Statistics::new();
        statistics.record_coffee(&CoffeeCup::new(0.05, CoffeeType::Arabica).into());
        statistics.record_coffee(&CoffeeMug::new(0.25, CoffeeType::Arabica).into());
        statistics.record_coffee(&CoffeeCup::new(0.05, CoffeeType::Moka).into());

        assert_eq!(3, statistics.coffees_made());
        assert_eq!(2, statistics.coffees_of(CoffeeType::Arabica));
        assert_eq!(1, statistics.coffees_of(CoffeeType::Moka));
        assert_eq!(0, statistics.coffees_of(CoffeeType::Robusta));
        assert!((statistics.water_used() - 0.35).abs() < 1e-9);
    }

    #[test]
    fn should_accumulate_refills() {
        let mut statistics = Statistics::new();
        statistics.record_refill(2.0);
        statistics.record_refill(0.5);
        assert_eq!(2, statistics.refills());
        assert_eq!(2.5, statistics.water_refilled());
    }
}
