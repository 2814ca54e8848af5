//! Resistencia que calienta el agua antes de pasarla por el cafe
use std::fmt;

use log::debug;

use crate::{
    constants::{HEATING_TEMPERATURE_RISE, MS_PER_SECOND, WATER_SPECIFIC_HEAT},
    delay::SimulatedDelay,
    errors::{check_volume, CoffeeMachineError},
};

#[derive(Debug, Clone)]
pub struct ElectricalResistance {
    /// Potencia en watts
    power: f64,
    delay: SimulatedDelay,
}

impl ElectricalResistance {
    pub fn new(power: f64) -> ElectricalResistance {
        ElectricalResistance::with_delay(power, SimulatedDelay::simulated())
    }

    pub fn with_delay(power: f64, delay: SimulatedDelay) -> ElectricalResistance {
        ElectricalResistance { power, delay }
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    /// Tiempo en ms para calentar `volume` litros: energia necesaria sobre potencia
    pub fn heating_duration(&self, volume: f64) -> f64 {
        volume * WATER_SPECIFIC_HEAT * HEATING_TEMPERATURE_RISE / self.power * MS_PER_SECOND
    }

    pub fn heat_water(&self, volume: f64) -> Result<f64, CoffeeMachineError> {
        check_volume(volume)?;
        let duration = self.delay.wait(self.heating_duration(volume))?;
        debug!("[RESISTANCE] Heated {} L in {:.2} ms", volume, duration);
        Ok(duration)
    }
}

impl fmt::Display for ElectricalResistance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} W", self.power)
    }
}
