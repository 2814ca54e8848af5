//! Parametros fisicos y de configuracion de la cafetera

/// Potencia de la resistencia electrica de la cafetera, en watts
pub const RESISTANCE_POWER_WATTS: f64 = 1000.0;

/// Segundos en una hora, para pasar el caudal de la bomba de L/h a L/s
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Milisegundos en un segundo
pub const MS_PER_SECOND: f64 = 1000.0;

/// La bomba tarda el doble de lo que indica su caudal nominal
pub const PUMP_DURATION_FACTOR: f64 = 2.0;

/// Calor especifico del agua, en J/(kg·K). Un litro de agua pesa un kilo.
pub const WATER_SPECIFIC_HEAT: f64 = 4185.0;

/// Cuantos grados se calienta el agua antes de pasar por el cafe
pub const HEATING_TEMPERATURE_RISE: f64 = 70.0;

/// Valor absoluto a partir del cual una tirada normal estandar rompe la cafetera
pub const FAILURE_THRESHOLD: f64 = 1.0;

/// Cantidad de veces que se reinicia la cafetera para una misma orden
pub const DEFAULT_MAX_RESETS: u32 = 3;

/// Archivo de configuracion que se lee si no se pasa ninguno por linea de comandos
pub const DEFAULT_ORDERS_FILE: &str = "orders.json";
