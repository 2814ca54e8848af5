//! Bomba que saca agua del tanque
use std::fmt;

use log::debug;

use crate::{
    constants::{MS_PER_SECOND, PUMP_DURATION_FACTOR},
    delay::SimulatedDelay,
    errors::{check_volume, CoffeeMachineError},
    water_tank::WaterTank,
};

#[derive(Debug, Clone)]
pub struct WaterPump {
    /// Caudal en L/s
    flow_rate: f64,
    delay: SimulatedDelay,
}

impl WaterPump {
    pub fn new(flow_rate: f64) -> Result<WaterPump, CoffeeMachineError> {
        WaterPump::with_delay(flow_rate, SimulatedDelay::simulated())
    }

    pub fn with_delay(
        flow_rate: f64,
        delay: SimulatedDelay,
    ) -> Result<WaterPump, CoffeeMachineError> {
        if !flow_rate.is_finite() || flow_rate <= 0.0 {
            return Err(CoffeeMachineError::InvalidFlowRate(flow_rate));
        }
        Ok(WaterPump { flow_rate, delay })
    }

    pub fn flow_rate(&self) -> f64 {
        self.flow_rate
    }

    /// Duracion del bombeo en ms: `(volumen / caudal) * 1000 * 2`
    pub fn pumping_duration(&self, volume: f64) -> f64 {
        (volume / self.flow_rate) * MS_PER_SECOND * PUMP_DURATION_FACTOR
    }

    /// Saca `volume` litros del tanque y devuelve cuanto tardo, en ms.
    /// Si falla, el tanque queda como estaba.
    pub fn pump_water(
        &self,
        volume: f64,
        tank: &mut WaterTank,
    ) -> Result<f64, CoffeeMachineError> {
        check_volume(volume)?;
        if tank.volume() < volume {
            return Err(CoffeeMachineError::InsufficientWater);
        }
        tank.check_decrease(volume)?;

        let duration = self.delay.wait(self.pumping_duration(volume))?;
        tank.decrease(volume)?;
        debug!("[PUMP] Pumped {} L in {:.2} ms", volume, duration);
        Ok(duration)
    }
}

impl fmt::Display for WaterPump {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} L/s", self.flow_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pump_duration(volume: f64, pumping_capacity: f64) -> f64 {
        (volume / pumping_capacity) * 1000.0 * 2.0
    }

    #[test]
    fn should_pump_water_from_the_tank() {
        let pumping_capacity = 5.5;
        let volume = 10.0;
        let water_pump = WaterPump::new(pumping_capacity).unwrap();
        let mut water_tank = WaterTank::new(30.0, 0.0, 60.0).unwrap();

        assert_eq!(
            Ok(pump_duration(volume, pumping_capacity)),
            water_pump.pump_water(volume, &mut water_tank)
        );
        assert!((water_pump.pumping_duration(volume) - 3636.36).abs() < 0.01);
        assert_eq!(20.0, water_tank.volume());
    }

    #[test]
    fn should_fail_without_enough_water_in_the_tank() {
        let water_pump = WaterPump::new(5.5).unwrap();
        let mut water_tank = WaterTank::new(5.0, 0.0, 60.0).unwrap();
        assert_eq!(
            Err(CoffeeMachineError::InsufficientWater),
            water_pump.pump_water(10.0, &mut water_tank)
        );
        assert_eq!(5.0, water_tank.volume());
    }

    #[test]
    fn should_not_pump_below_the_min_volume() {
        let water_pump = WaterPump::new(5.5).unwrap();
        let mut water_tank = WaterTank::new(5.0, 2.0, 60.0).unwrap();
        assert!(matches!(
            water_pump.pump_water(4.0, &mut water_tank),
            Err(CoffeeMachineError::TankBoundsViolation { .. })
        ));
        assert_eq!(5.0, water_tank.volume());
    }

    #[test]
    fn should_leave_the_tank_untouched_when_interrupted() {
        let delay = SimulatedDelay::simulated();
        delay.cancel_token().cancel().unwrap();
        let water_pump = WaterPump::with_delay(5.5, delay).unwrap();
        let mut water_tank = WaterTank::new(30.0, 0.0, 60.0).unwrap();

        assert_eq!(
            Err(CoffeeMachineError::Interrupted),
            water_pump.pump_water(10.0, &mut water_tank)
        );
        assert_eq!(30.0, water_tank.volume());
    }

    #[test]
    fn should_reject_a_non_positive_flow_rate() {
        assert!(matches!(
            WaterPump::new(0.0),
            Err(CoffeeMachineError::InvalidFlowRate(_))
        ));
        assert!(WaterPump::new(-1.0).is_err());
    }
}
