pub mod coffee_machine;
pub mod coffee_type;
pub mod constants;
pub mod container;
pub mod delay;
pub mod dispenser;
pub mod electrical_resistance;
pub mod errors;
pub mod failure;
pub mod order;
pub mod orders_reader;
pub mod statistics;
pub mod water_pump;
pub mod water_tank;
