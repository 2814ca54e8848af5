use serde::Deserialize;

use crate::{
    coffee_type::CoffeeType,
    container::{Container, Cup, Mug},
};

/// Tipo de contenedor vacio que trae el cliente
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerKind {
    Cup,
    Mug,
}

impl ContainerKind {
    pub fn empty_container(&self, capacity: f64) -> Container {
        match self {
            ContainerKind::Cup => Cup::new(capacity).into(),
            ContainerKind::Mug => Mug::new(capacity).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: usize,
    pub container: Container,
    pub coffee_type: CoffeeType,
}

impl Order {
    pub fn new(id: usize, container: Container, coffee_type: CoffeeType) -> Order {
        Order {
            id,
            container,
            coffee_type,
        }
    }
}
