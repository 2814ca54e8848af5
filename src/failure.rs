//! Fuentes de numeros aleatorios con distribucion normal estandar, usadas para simular fallas
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

use crate::constants::FAILURE_THRESHOLD;

pub trait GaussianSource {
    fn next_gaussian(&mut self) -> f64;
}

/// Generador pseudoaleatorio con semilla
pub struct SeededGaussian {
    rng: StdRng,
}

impl SeededGaussian {
    pub fn new(seed: u64) -> SeededGaussian {
        SeededGaussian {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> SeededGaussian {
        SeededGaussian {
            rng: StdRng::from_entropy(),
        }
    }
}

impl GaussianSource for SeededGaussian {
    fn next_gaussian(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }
}

/// Devuelve siempre la misma secuencia, en ciclo. Sirve para forzar o evitar fallas.
pub struct FixedGaussian {
    values: Vec<f64>,
    next: usize,
}

impl FixedGaussian {
    pub fn new(values: Vec<f64>) -> FixedGaussian {
        FixedGaussian { values, next: 0 }
    }

    pub fn constant(value: f64) -> FixedGaussian {
        FixedGaussian::new(vec![value])
    }
}

impl GaussianSource for FixedGaussian {
    fn next_gaussian(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// La cafetera se rompe si la tirada queda a una desviacion estandar o mas de la media (~32%)
pub fn is_failure(draw: f64) -> bool {
    draw.abs() >= FAILURE_THRESHOLD
}
