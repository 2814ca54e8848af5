use std::{env, process};

use coffee_machine::{
    coffee_machine::CoffeeMachine, constants::DEFAULT_ORDERS_FILE, dispenser::Dispenser,
    errors::CoffeeMachineError, orders_reader::read_configuration_from_file,
};
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

fn main() {
    if let Err(error) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start the logger: {}", error);
    }

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ORDERS_FILE.to_string());
    if let Err(error) = run(&path) {
        error!("[MAIN] {}", error);
        process::exit(1);
    }
}

fn run(path: &str) -> Result<(), CoffeeMachineError> {
    let configuration = read_configuration_from_file(path)?;
    let mut machine = CoffeeMachine::from_config(&configuration.machine)?;
    machine.plug_in();
    machine.add_water(configuration.initial_water)?;
    info!("{}", machine);

    let mut dispenser = Dispenser::new(
        machine,
        configuration.refill_water,
        configuration.max_resets,
    );
    let served = dispenser.handle_orders(configuration.orders())?;
    info!("[MAIN] Served {} coffees", served.len());

    dispenser.statistics().print_statistics();
    info!("{}", dispenser.machine());
    Ok(())
}
