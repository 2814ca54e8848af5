//! Esperas simuladas de la bomba y la resistencia.
//! Por defecto solo se calcula la duracion; en modo real se espera en una variable condicional
//! que se puede despertar para cancelar.
use std::{
    sync::{Arc, Condvar, Mutex},
    time::Duration,
};

use log::debug;

use crate::{constants::MS_PER_SECOND, errors::CoffeeMachineError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DelayMode {
    Simulated,
    /// Espera de verdad, `time_scale` veces la duracion calculada
    RealTime { time_scale: f64 },
}

/// Permite interrumpir las esperas. Todos los clones comparten el mismo estado.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    state: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) -> Result<(), CoffeeMachineError> {
        let (lock, cond) = &*self.state;
        *lock.lock()? = true;
        cond.notify_all();
        Ok(())
    }

    pub fn clear(&self) -> Result<(), CoffeeMachineError> {
        let (lock, _) = &*self.state;
        *lock.lock()? = false;
        Ok(())
    }

    pub fn is_cancelled(&self) -> Result<bool, CoffeeMachineError> {
        let (lock, _) = &*self.state;
        let cancelled = *lock.lock()?;
        Ok(cancelled)
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedDelay {
    mode: DelayMode,
    cancel: CancelToken,
}

impl SimulatedDelay {
    pub fn new(mode: DelayMode, cancel: CancelToken) -> SimulatedDelay {
        SimulatedDelay { mode, cancel }
    }

    pub fn simulated() -> SimulatedDelay {
        SimulatedDelay::new(DelayMode::Simulated, CancelToken::new())
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Espera `duration_ms` milisegundos (o nada, en modo simulado) y devuelve esa duracion.
    /// Falla con `Interrupted` si el token esta cancelado antes o durante la espera.
    pub fn wait(&self, duration_ms: f64) -> Result<f64, CoffeeMachineError> {
        let (lock, cond) = &*self.cancel.state;
        let cancelled = lock.lock()?;
        if *cancelled {
            return Err(CoffeeMachineError::Interrupted);
        }

        if let DelayMode::RealTime { time_scale } = self.mode {
            let seconds = duration_ms * time_scale / MS_PER_SECOND;
            if seconds.is_finite() && seconds > 0.0 {
                let timeout = Duration::try_from_secs_f64(seconds)
                    .map_err(|_| CoffeeMachineError::InvalidTimeScale(time_scale))?;
                debug!("[DELAY] Waiting {:.3} s", seconds);
                let (cancelled, _) =
                    cond.wait_timeout_while(cancelled, timeout, |cancelled| !*cancelled)?;
                if *cancelled {
                    return Err(CoffeeMachineError::Interrupted);
                }
            }
        }
        Ok(duration_ms)
    }
}
