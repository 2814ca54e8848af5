//! Cafetera: tanque, bomba y resistencia, mas el estado de enchufe y de falla
use std::fmt;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::{
    coffee_type::CoffeeType,
    constants::{RESISTANCE_POWER_WATTS, SECONDS_PER_HOUR},
    container::{CoffeeContainer, Container},
    delay::{CancelToken, DelayMode, SimulatedDelay},
    electrical_resistance::ElectricalResistance,
    errors::{check_volume, CoffeeMachineError},
    failure::{is_failure, GaussianSource, SeededGaussian},
    water_pump::WaterPump,
    water_tank::WaterTank,
};

/// Parametros de construccion de la cafetera, como vienen del archivo de configuracion
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MachineConfig {
    pub min_volume: f64,
    pub max_volume: f64,
    pub pump_flow_liters_per_hour: f64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub real_time: bool,
    #[serde(default = "default_time_scale")]
    pub time_scale: f64,
}

fn default_time_scale() -> f64 {
    1.0
}

/// Resultado de pedir un cafe cuando no hubo error.
/// `MachineDown` significa que la cafetera quedo fuera de servicio y no sirvio nada.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoffeeOutcome {
    Produced(CoffeeContainer),
    MachineDown,
}

pub struct CoffeeMachine {
    water_tank: WaterTank,
    water_pump: WaterPump,
    electrical_resistance: ElectricalResistance,
    is_plugged: bool,
    is_out_of_order: bool,
    coffee_count: u64,
    random_source: Box<dyn GaussianSource>,
    cancel: CancelToken,
}

impl CoffeeMachine {
    /// Crea la cafetera desenchufada, con el tanque en su volumen minimo.
    /// El caudal de la bomba se recibe en L/h.
    pub fn new(
        min_volume: f64,
        max_volume: f64,
        pump_flow_liters_per_hour: f64,
    ) -> Result<CoffeeMachine, CoffeeMachineError> {
        CoffeeMachine::with_random_source(
            min_volume,
            max_volume,
            pump_flow_liters_per_hour,
            Box::new(SeededGaussian::from_entropy()),
        )
    }

    pub fn with_random_source(
        min_volume: f64,
        max_volume: f64,
        pump_flow_liters_per_hour: f64,
        random_source: Box<dyn GaussianSource>,
    ) -> Result<CoffeeMachine, CoffeeMachineError> {
        CoffeeMachine::build(
            min_volume,
            max_volume,
            pump_flow_liters_per_hour,
            random_source,
            DelayMode::Simulated,
        )
    }

    pub fn from_config(config: &MachineConfig) -> Result<CoffeeMachine, CoffeeMachineError> {
        let random_source: Box<dyn GaussianSource> = match config.seed {
            Some(seed) => Box::new(SeededGaussian::new(seed)),
            None => Box::new(SeededGaussian::from_entropy()),
        };
        let delay_mode = if config.real_time {
            if !config.time_scale.is_finite() || config.time_scale < 0.0 {
                return Err(CoffeeMachineError::InvalidTimeScale(config.time_scale));
            }
            DelayMode::RealTime {
                time_scale: config.time_scale,
            }
        } else {
            DelayMode::Simulated
        };
        CoffeeMachine::build(
            config.min_volume,
            config.max_volume,
            config.pump_flow_liters_per_hour,
            random_source,
            delay_mode,
        )
    }

    fn build(
        min_volume: f64,
        max_volume: f64,
        pump_flow_liters_per_hour: f64,
        random_source: Box<dyn GaussianSource>,
        delay_mode: DelayMode,
    ) -> Result<CoffeeMachine, CoffeeMachineError> {
        let cancel = CancelToken::new();
        let delay = SimulatedDelay::new(delay_mode, cancel.clone());
        Ok(CoffeeMachine {
            water_tank: WaterTank::new(min_volume, min_volume, max_volume)?,
            water_pump: WaterPump::with_delay(
                pump_flow_liters_per_hour / SECONDS_PER_HOUR,
                delay.clone(),
            )?,
            electrical_resistance: ElectricalResistance::with_delay(RESISTANCE_POWER_WATTS, delay),
            is_plugged: false,
            is_out_of_order: false,
            coffee_count: 0,
            random_source,
            cancel,
        })
    }

    pub fn plug_in(&mut self) {
        if !self.is_plugged {
            info!("[MACHINE] Plugged to an electrical plug");
        }
        self.is_plugged = true;
    }

    pub fn reset(&mut self) {
        if self.is_out_of_order {
            info!("[MACHINE] Reset, back in order");
        }
        self.is_out_of_order = false;
    }

    pub fn add_water(&mut self, volume: f64) -> Result<(), CoffeeMachineError> {
        self.water_tank.increase(volume)
    }

    /// Llena el tanque hasta el maximo y devuelve cuanta agua se agrego
    pub fn fill_tank(&mut self) -> f64 {
        self.water_tank.fill_up()
    }

    /// Hace un cafe del tipo pedido en el contenedor dado.
    ///
    /// Falla si la cafetera esta desenchufada, si no hay agua suficiente para llenar el contenedor
    /// o si el contenedor no esta vacio, en ese orden. Cada llamada valida tira de nuevo la falla:
    /// si la cafetera queda fuera de servicio devuelve `MachineDown` sin tocar el tanque ni el contador.
    pub fn make_coffee(
        &mut self,
        container: &Container,
        coffee_type: CoffeeType,
    ) -> Result<CoffeeOutcome, CoffeeMachineError> {
        if !self.is_plugged {
            return Err(CoffeeMachineError::MachineNotPlugged);
        }

        let capacity = container.capacity();
        check_volume(capacity)?;
        if self.water_tank.volume() < capacity {
            return Err(CoffeeMachineError::InsufficientWater);
        }

        if !container.is_empty() {
            return Err(CoffeeMachineError::ContainerNotEmpty);
        }

        self.water_tank.check_decrease(capacity)?;

        self.coffee_machine_failure();
        if self.is_out_of_order {
            warn!("[MACHINE] The machine is out of order. Please reset the coffee machine");
            return Ok(CoffeeOutcome::MachineDown);
        }

        self.electrical_resistance.heat_water(capacity)?;
        self.water_pump.pump_water(capacity, &mut self.water_tank)?;

        let coffee = container
            .fill(coffee_type)
            .ok_or(CoffeeMachineError::ContainerNotEmpty)?;
        self.coffee_count += 1;
        debug!(
            "[MACHINE] Made {:?} in a {} L container, {} coffees so far",
            coffee_type, capacity, self.coffee_count
        );
        Ok(CoffeeOutcome::Produced(coffee))
    }

    /// Tira un numero con distribucion normal estandar; la cafetera queda fuera de servicio
    /// si su valor absoluto es mayor o igual a 1
    pub fn coffee_machine_failure(&mut self) {
        let draw = self.random_source.next_gaussian();
        self.is_out_of_order = is_failure(draw);
    }

    pub fn water_tank(&self) -> &WaterTank {
        &self.water_tank
    }

    pub fn water_pump(&self) -> &WaterPump {
        &self.water_pump
    }

    pub fn electrical_resistance(&self) -> &ElectricalResistance {
        &self.electrical_resistance
    }

    pub fn is_plugged(&self) -> bool {
        self.is_plugged
    }

    pub fn is_out_of_order(&self) -> bool {
        self.is_out_of_order
    }

    pub fn set_out_of_order(&mut self, out_of_order: bool) {
        self.is_out_of_order = out_of_order;
    }

    pub fn coffee_count(&self) -> u64 {
        self.coffee_count
    }

    pub fn set_coffee_count(&mut self, coffee_count: u64) {
        self.coffee_count = coffee_count;
    }

    pub fn set_random_source(&mut self, random_source: Box<dyn GaussianSource>) {
        self.random_source = random_source;
    }

    /// Token compartido por la bomba y la resistencia para interrumpir sus esperas
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }
}

impl fmt::Display for CoffeeMachine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Your coffee machine has :")?;
        writeln!(f, "- water tank : {}", self.water_tank)?;
        writeln!(f, "- water pump : {}", self.water_pump)?;
        writeln!(f, "- electrical resistance : {}", self.electrical_resistance)?;
        writeln!(f, "- is plugged : {}", self.is_plugged)?;
        write!(f, "and made {} coffees", self.coffee_count)
    }
}
