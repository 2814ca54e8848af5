//! Contenedores vacios (tazas y jarros) y sus versiones con cafe
use crate::coffee_type::CoffeeType;

/// Taza vacia
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cup {
    capacity: f64,
}

impl Cup {
    pub fn new(capacity: f64) -> Cup {
        Cup { capacity }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Devuelve una taza nueva con cafe. La taza vacia no se modifica.
    pub fn fill(&self, coffee_type: CoffeeType) -> CoffeeCup {
        CoffeeCup::new(self.capacity, coffee_type)
    }
}

/// Jarro vacio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mug {
    capacity: f64,
}

impl Mug {
    pub fn new(capacity: f64) -> Mug {
        Mug { capacity }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn fill(&self, coffee_type: CoffeeType) -> CoffeeMug {
        CoffeeMug::new(self.capacity, coffee_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoffeeCup {
    capacity: f64,
    coffee_type: CoffeeType,
}

impl CoffeeCup {
    pub fn new(capacity: f64, coffee_type: CoffeeType) -> CoffeeCup {
        CoffeeCup {
            capacity,
            coffee_type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoffeeMug {
    capacity: f64,
    coffee_type: CoffeeType,
}

impl CoffeeMug {
    pub fn new(capacity: f64, coffee_type: CoffeeType) -> CoffeeMug {
        CoffeeMug {
            capacity,
            coffee_type,
        }
    }
}

/// Contenedor con cafe, nunca esta vacio
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoffeeContainer {
    Cup(CoffeeCup),
    Mug(CoffeeMug),
}

impl CoffeeContainer {
    pub fn capacity(&self) -> f64 {
        match self {
            CoffeeContainer::Cup(cup) => cup.capacity,
            CoffeeContainer::Mug(mug) => mug.capacity,
        }
    }

    pub fn coffee_type(&self) -> CoffeeType {
        match self {
            CoffeeContainer::Cup(cup) => cup.coffee_type,
            CoffeeContainer::Mug(mug) => mug.coffee_type,
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<CoffeeCup> for CoffeeContainer {
    fn from(cup: CoffeeCup) -> Self {
        CoffeeContainer::Cup(cup)
    }
}

impl From<CoffeeMug> for CoffeeContainer {
    fn from(mug: CoffeeMug) -> Self {
        CoffeeContainer::Mug(mug)
    }
}

/// Cualquier contenedor que se le puede pasar a la cafetera.
/// Solo las tazas y jarros vacios se pueden llenar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Container {
    Cup(Cup),
    Mug(Mug),
    Coffee(CoffeeContainer),
}

impl Container {
    pub fn capacity(&self) -> f64 {
        match self {
            Container::Cup(cup) => cup.capacity(),
            Container::Mug(mug) => mug.capacity(),
            Container::Coffee(coffee) => coffee.capacity(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Container::Cup(_) | Container::Mug(_) => true,
            Container::Coffee(coffee) => coffee.is_empty(),
        }
    }

    /// Llena el contenedor con el cafe pedido.
    /// Devuelve `None` si el contenedor ya tenia cafe.
    pub fn fill(&self, coffee_type: CoffeeType) -> Option<CoffeeContainer> {
        match self {
            Container::Cup(cup) => Some(cup.fill(coffee_type).into()),
            Container::Mug(mug) => Some(mug.fill(coffee_type).into()),
            Container::Coffee(_) => None,
        }
    }
}

impl From<Cup> for Container {
    fn from(cup: Cup) -> Self {
        Container::Cup(cup)
    }
}

impl From<Mug> for Container {
    fn from(mug: Mug) -> Self {
        Container::Mug(mug)
    }
}

impl From<CoffeeContainer> for Container {
    fn from(coffee: CoffeeContainer) -> Self {
        Container::Coffee(coffee)
    }
}
