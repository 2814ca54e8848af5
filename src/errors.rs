//! Errores que puede devolver la cafetera y sus componentes
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CoffeeMachineError {
    MachineNotPlugged,
    InsufficientWater,
    ContainerNotEmpty,
    Interrupted,
    TankBoundsViolation {
        requested: f64,
        current: f64,
        min: f64,
        max: f64,
    },
    InvalidTankBounds {
        min: f64,
        max: f64,
    },
    InvalidVolume(f64),
    InvalidFlowRate(f64),
    InvalidTimeScale(f64),
    LockError,
    FileReaderError(String),
}

impl fmt::Display for CoffeeMachineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoffeeMachineError::MachineNotPlugged => {
                write!(f, "You must plug your coffee machine to an electrical plug.")
            }
            CoffeeMachineError::InsufficientWater => {
                write!(f, "You must add more water in the water tank.")
            }
            CoffeeMachineError::ContainerNotEmpty => write!(f, "The container given is not empty."),
            CoffeeMachineError::Interrupted => write!(f, "The simulated wait was interrupted."),
            CoffeeMachineError::TankBoundsViolation {
                requested,
                current,
                min,
                max,
            } => write!(
                f,
                "Moving {} L from {} L would leave the water tank bounds [{}, {}].",
                requested, current, min, max
            ),
            CoffeeMachineError::InvalidTankBounds { min, max } => {
                write!(f, "Invalid water tank bounds [{}, {}].", min, max)
            }
            CoffeeMachineError::InvalidVolume(volume) => write!(f, "Invalid volume {} L.", volume),
            CoffeeMachineError::InvalidFlowRate(rate) => {
                write!(f, "Invalid pump flow rate {} L/s.", rate)
            }
            CoffeeMachineError::InvalidTimeScale(scale) => {
                write!(f, "Invalid time scale {}.", scale)
            }
            CoffeeMachineError::LockError => write!(f, "A lock was poisoned."),
            CoffeeMachineError::FileReaderError(cause) => {
                write!(f, "Could not read the orders file: {}", cause)
            }
        }
    }
}

impl std::error::Error for CoffeeMachineError {}

impl<T> From<std::sync::PoisonError<T>> for CoffeeMachineError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        CoffeeMachineError::LockError
    }
}

/// Un volumen valido es finito y no negativo
pub(crate) fn check_volume(volume: f64) -> Result<(), CoffeeMachineError> {
    if !volume.is_finite() || volume < 0.0 {
        return Err(CoffeeMachineError::InvalidVolume(volume));
    }
    Ok(())
}
