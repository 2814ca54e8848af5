//! Dispenser de la cafetera. Procesa los pedidos uno detras de otro.
use log::{debug, info};

use crate::{
    coffee_machine::{CoffeeMachine, CoffeeOutcome},
    container::CoffeeContainer,
    errors::CoffeeMachineError,
    order::Order,
    statistics::Statistics,
};

/// Atiende pedidos con una cafetera.
/// Si la cafetera queda fuera de servicio la reinicia (hasta `max_resets` veces por pedido),
/// y si falta agua llena el tanque una vez por pedido, cuando `refill_water` esta activo.
pub struct Dispenser {
    machine: CoffeeMachine,
    statistics: Statistics,
    refill_water: bool,
    max_resets: u32,
}

impl Dispenser {
    pub fn new(machine: CoffeeMachine, refill_water: bool, max_resets: u32) -> Dispenser {
        Dispenser {
            machine,
            statistics: Statistics::new(),
            refill_water,
            max_resets,
        }
    }

    /// Devuelve los cafes servidos. Solo corta antes de terminar si se interrumpe una espera.
    pub fn handle_orders(
        &mut self,
        orders: Vec<Order>,
    ) -> Result<Vec<CoffeeContainer>, CoffeeMachineError> {
        let mut served = Vec::new();
        for order in orders {
            debug!("[DISPENSER] Takes order {}", order.id);
            if let Some(coffee) = self.process_order(&order)? {
                served.push(coffee);
            }
        }
        info!("[DISPENSER] No more orders left");
        Ok(served)
    }

    fn process_order(
        &mut self,
        order: &Order,
    ) -> Result<Option<CoffeeContainer>, CoffeeMachineError> {
        let mut resets = 0;
        let mut refilled = false;
        loop {
            match self.machine.make_coffee(&order.container, order.coffee_type) {
                Ok(CoffeeOutcome::Produced(coffee)) => {
                    info!(
                        "[DISPENSER] Served order {}: {:?} in {} L",
                        order.id,
                        coffee.coffee_type(),
                        coffee.capacity()
                    );
                    self.statistics.record_coffee(&coffee);
                    return Ok(Some(coffee));
                }
                Ok(CoffeeOutcome::MachineDown) => {
                    self.statistics.record_breakdown();
                    if resets >= self.max_resets {
                        info!(
                            "[DISPENSER] Skipped order {}, machine still out of order after {} resets",
                            order.id, resets
                        );
                        self.statistics.record_skipped();
                        return Ok(None);
                    }
                    self.machine.reset();
                    self.statistics.record_reset();
                    resets += 1;
                }
                Err(CoffeeMachineError::InsufficientWater) if self.refill_water && !refilled => {
                    info!(
                        "[DISPENSER] Not enough water for order {}, refilling the tank",
                        order.id
                    );
                    self.refill_tank();
                    refilled = true;
                }
                Err(CoffeeMachineError::Interrupted) => return Err(CoffeeMachineError::Interrupted),
                Err(CoffeeMachineError::LockError) => return Err(CoffeeMachineError::LockError),
                Err(error) => {
                    info!("[DISPENSER] Skipped order {}, {}", order.id, error);
                    self.statistics.record_skipped();
                    return Ok(None);
                }
            }
        }
    }

    fn refill_tank(&mut self) {
        let added = self.machine.fill_tank();
        if added > 0.0 {
            self.statistics.record_refill(added);
        }
    }

    pub fn machine(&self) -> &CoffeeMachine {
        &self.machine
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        coffee_type::CoffeeType,
        container::{CoffeeMug, Container, Cup, Mug},
        failure::FixedGaussian,
    };

    fn machine(draws: Vec<f64>, water: f64) -> CoffeeMachine {
        let mut machine =
            CoffeeMachine::with_random_source(0.0, 1.0, 700.0, Box::new(FixedGaussian::new(draws)))
                .unwrap();
        machine.add_water(water).unwrap();
        machine.plug_in();
        machine
    }

    fn cup_order(id: usize, capacity: f64) -> Order {
        Order::new(id, Cup::new(capacity).into(), CoffeeType::Arabica)
    }

    #[test]
    fn should_serve_every_order_when_nothing_fails() {
        let mut dispenser = Dispenser::new(machine(vec![0.0], 1.0), true, 3);
        let orders = vec![
            cup_order(0, 0.05),
            Order::new(1, Mug::new(0.25).into(), CoffeeType::Robusta),
        ];

        let served = dispenser.handle_orders(orders).unwrap();
        assert_eq!(2, served.len());
        assert_eq!(2, dispenser.machine().coffee_count());
        assert_eq!(1, dispenser.statistics().coffees_of(CoffeeType::Robusta));
        assert_eq!(0, dispenser.statistics().skipped());
    }

    #[test]
    fn should_reset_the_machine_when_it_breaks() {
        let mut dispenser = Dispenser::new(machine(vec![1.2, 0.3], 1.0), true, 3);
        let served = dispenser.handle_orders(vec![cup_order(0, 0.05)]).unwrap();

        assert_eq!(1, served.len());
        assert_eq!(1, dispenser.statistics().breakdowns());
        assert_eq!(1, dispenser.statistics().resets());
        assert!(!dispenser.machine().is_out_of_order());
    }

    #[test]
    fn should_skip_the_order_after_too_many_resets() {
        let mut dispenser = Dispenser::new(machine(vec![-3.0], 1.0), true, 2);
        let served = dispenser.handle_orders(vec![cup_order(0, 0.05)]).unwrap();

        assert_eq!(0, served.len());
        assert_eq!(3, dispenser.statistics().breakdowns());
        assert_eq!(2, dispenser.statistics().resets());
        assert_eq!(1, dispenser.statistics().skipped());
        assert_eq!(0, dispenser.machine().coffee_count());
    }

    #[test]
    fn should_refill_the_tank_when_water_is_missing() {
        let mut dispenser = Dispenser::new(machine(vec![0.0], 0.1), true, 3);
        let served = dispenser.handle_orders(vec![cup_order(0, 0.5)]).unwrap();

        assert_eq!(1, served.len());
        assert_eq!(1, dispenser.statistics().refills());
        assert!((dispenser.statistics().water_refilled() - 0.9).abs() < 1e-9);
        assert!((dispenser.machine().water_tank().volume() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn should_keep_serving_after_refilling_a_small_tank() {
        let mut machine =
            CoffeeMachine::with_random_source(0.0, 0.3, 700.0, Box::new(FixedGaussian::constant(0.0)))
                .unwrap();
        machine.add_water(0.03).unwrap();
        machine.plug_in();
        let mut dispenser = Dispenser::new(machine, true, 3);

        let served = dispenser
            .handle_orders(vec![cup_order(0, 0.05), cup_order(1, 0.05)])
            .unwrap();
        assert_eq!(2, served.len());
        assert_eq!(1, dispenser.statistics().refills());
        assert!((dispenser.machine().water_tank().volume() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn should_skip_the_order_when_refilling_is_off() {
        let mut dispenser = Dispenser::new(machine(vec![0.0], 0.1), false, 3);
        let served = dispenser.handle_orders(vec![cup_order(0, 0.5)]).unwrap();

        assert_eq!(0, served.len());
        assert_eq!(1, dispenser.statistics().skipped());
        assert_eq!(0, dispenser.statistics().refills());
    }

    #[test]
    fn should_skip_a_container_bigger_than_the_tank() {
        let mut dispenser = Dispenser::new(machine(vec![0.0], 0.5), true, 3);
        let served = dispenser
            .handle_orders(vec![cup_order(0, 2.0), cup_order(1, 0.05)])
            .unwrap();

        assert_eq!(1, served.len());
        assert_eq!(1, dispenser.statistics().skipped());
        assert_eq!(1, dispenser.statistics().refills());
    }

    #[test]
    fn should_skip_a_full_container() {
        let mut dispenser = Dispenser::new(machine(vec![0.0], 1.0), true, 3);
        let full: Container = CoffeeContainer::from(CoffeeMug::new(0.05, CoffeeType::Moka)).into();
        let served = dispenser
            .handle_orders(vec![Order::new(0, full, CoffeeType::Moka)])
            .unwrap();

        assert_eq!(0, served.len());
        assert_eq!(1, dispenser.statistics().skipped());
    }

    #[test]
    fn should_stop_when_a_wait_is_interrupted() {
        let machine = machine(vec![0.0], 1.0);
        machine.cancel_token().cancel().unwrap();
        let mut dispenser = Dispenser::new(machine, true, 3);

        assert_eq!(
            Err(CoffeeMachineError::Interrupted),
            dispenser.handle_orders(vec![cup_order(0, 0.05)])
        );
    }
}
