use serde::Deserialize;

/// Variedad de cafe. Se copia tal cual al contenedor que devuelve la cafetera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoffeeType {
    Arabica,
    Bahia,
    Moka,
    Robusta,
}
