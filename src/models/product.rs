use serde::{Deserialize, Serialize};

/// Producto del catálogo (GET /api/products)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
}

impl Product {
    /// Cantidad válida para el input del card: mínimo 1, máximo el stock
    pub fn clamp_quantity(&self, raw: &str) -> u32 {
        let requested = raw.trim().parse::<u32>().ok().filter(|q| *q > 0).unwrap_or(1);
        if self.stock > 0 {
            requested.min(self.stock)
        } else {
            requested
        }
    }
}
