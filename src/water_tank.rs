//! Tanque de agua de la cafetera
use std::fmt;

use log::debug;

use crate::errors::{check_volume, CoffeeMachineError};

/// Tanque con volumen actual, minimo y maximo, en litros.
/// Siempre se cumple `min_volume <= volume <= max_volume`: las operaciones que lo romperian se rechazan.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterTank {
    volume: f64,
    min_volume: f64,
    max_volume: f64,
}

impl WaterTank {
    pub fn new(
        initial_volume: f64,
        min_volume: f64,
        max_volume: f64,
    ) -> Result<WaterTank, CoffeeMachineError> {
        let valid_bounds = min_volume.is_finite()
            && max_volume.is_finite()
            && 0.0 <= min_volume
            && min_volume <= max_volume;
        if !valid_bounds {
            return Err(CoffeeMachineError::InvalidTankBounds {
                min: min_volume,
                max: max_volume,
            });
        }
        check_volume(initial_volume)?;
        if initial_volume < min_volume || max_volume < initial_volume {
            return Err(CoffeeMachineError::InvalidVolume(initial_volume));
        }
        Ok(WaterTank {
            volume: initial_volume,
            min_volume,
            max_volume,
        })
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn min_volume(&self) -> f64 {
        self.min_volume
    }

    pub fn max_volume(&self) -> f64 {
        self.max_volume
    }

    /// Cuanta agua entra hasta llenar el tanque
    pub fn free_volume(&self) -> f64 {
        self.max_volume - self.volume
    }

    /// Llena el tanque hasta el maximo y devuelve cuanto se agrego
    pub fn fill_up(&mut self) -> f64 {
        let added = self.free_volume();
        self.volume = self.max_volume;
        debug!("[TANK] Filled up with {} L", added);
        added
    }

    pub fn increase(&mut self, volume: f64) -> Result<(), CoffeeMachineError> {
        check_volume(volume)?;
        let new_volume = self.volume + volume;
        if new_volume > self.max_volume {
            return Err(self.bounds_violation(volume));
        }
        self.volume = new_volume;
        debug!("[TANK] Added {} L, there is {} L", volume, self.volume);
        Ok(())
    }

    /// Devuelve el volumen que quedaria al sacar `volume` litros, sin sacarlos
    pub fn check_decrease(&self, volume: f64) -> Result<f64, CoffeeMachineError> {
        check_volume(volume)?;
        let new_volume = self.volume - volume;
        if new_volume < self.min_volume {
            return Err(self.bounds_violation(volume));
        }
        Ok(new_volume)
    }

    pub fn decrease(&mut self, volume: f64) -> Result<(), CoffeeMachineError> {
        self.volume = self.check_decrease(volume)?;
        debug!("[TANK] Removed {} L, there is {} L", volume, self.volume);
        Ok(())
    }

    fn bounds_violation(&self, requested: f64) -> CoffeeMachineError {
        CoffeeMachineError::TankBoundsViolation {
            requested,
            current: self.volume,
            min: self.min_volume,
            max: self.max_volume,
        }
    }
}

impl fmt::Display for WaterTank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} L (min {} L, max {} L)",
            self.volume, self.min_volume, self.max_volume
        )
    }
}
