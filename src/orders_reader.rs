//! Lectura del archivo JSON con la configuracion de la cafetera y los pedidos
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::coffee_machine::MachineConfig;
use crate::coffee_type::CoffeeType;
use crate::constants::DEFAULT_MAX_RESETS;
use crate::errors::CoffeeMachineError;
use crate::order::{ContainerKind, Order};

#[derive(Deserialize, Debug, Clone, PartialEq)]
struct JsonOrder {
    container: ContainerKind,
    capacity: f64,
    coffee_type: CoffeeType,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OrdersConfiguration {
    pub machine: MachineConfig,
    /// Agua que se carga en el tanque antes del primer pedido
    #[serde(default)]
    pub initial_water: f64,
    /// Si se llena el tanque cuando falta agua para un pedido
    #[serde(default = "default_refill_water")]
    pub refill_water: bool,
    /// Reinicios permitidos por pedido cuando la cafetera queda fuera de servicio
    #[serde(default = "default_max_resets")]
    pub max_resets: u32,
    orders: Vec<JsonOrder>,
}

fn default_refill_water() -> bool {
    true
}

fn default_max_resets() -> u32 {
    DEFAULT_MAX_RESETS
}

impl OrdersConfiguration {
    /// Pedidos numerados en el orden en que aparecen en el archivo
    pub fn orders(&self) -> Vec<Order> {
        let orders: Vec<Order> = self
            .orders
            .iter()
            .enumerate()
            .map(|(id, order)| {
                let container = order.container.empty_container(order.capacity);
                debug!("[READER] Added order {}", id);
                Order::new(id, container, order.coffee_type)
            })
            .collect();
        info!("[READER] Read {} orders", orders.len());
        orders
    }
}

pub fn read_configuration_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<OrdersConfiguration, CoffeeMachineError> {
    let file = File::open(path.as_ref()).map_err(|error| {
        CoffeeMachineError::FileReaderError(format!("{}: {}", path.as_ref().display(), error))
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|error| CoffeeMachineError::FileReaderError(error.to_string()))
}

pub fn parse_configuration(json: &str) -> Result<OrdersConfiguration, CoffeeMachineError> {
    serde_json::from_str(json).map_err(|error| CoffeeMachineError::FileReaderError(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{Container, Cup, Mug};

    const CONFIGURATION: &str = r#"{
        "machine": {
            "min_volume": 0.0,
            "max_volume": 10.0,
            "pump_flow_liters_per_hour": 700.0,
            "seed": 42
        },
        "initial_water": 2.0,
        "orders": [
            { "container": "CUP", "capacity": 0.05, "coffee_type": "ARABICA" },
            { "container": "MUG", "capacity": 0.3, "coffee_type": "MOKA" }
        ]
    }"#;

    #[test]
    fn should_read_the_machine_and_the_orders() {
        let configuration = parse_configuration(CONFIGURATION).unwrap();
        assert_eq!(Some(42), configuration.machine.seed);
        assert!(!configuration.machine.real_time);
        assert_eq!(1.0, configuration.machine.time_scale);
        assert_eq!(2.0, configuration.initial_water);
        assert!(configuration.refill_water);
        assert_eq!(DEFAULT_MAX_RESETS, configuration.max_resets);

        let orders = configuration.orders();
        assert_eq!(2, orders.len());
        assert_eq!(
            Order::new(0, Container::Cup(Cup::new(0.05)), CoffeeType::Arabica),
            orders[0]
        );
        assert_eq!(
            Order::new(1, Container::Mug(Mug::new(0.3)), CoffeeType::Moka),
            orders[1]
        );
    }

    #[test]
    fn should_fail_with_an_unknown_container() {
        let json = CONFIGURATION.replace("\"MUG\"", "\"BOWL\"");
        assert!(matches!(
            parse_configuration(&json),
            Err(CoffeeMachineError::FileReaderError(_))
        ));
    }

    #[test]
    fn should_fail_when_the_file_does_not_exist() {
        assert!(matches!(
            read_configuration_from_file("does/not/exist.json"),
            Err(CoffeeMachineError::FileReaderError(_))
        ));
    }
}
