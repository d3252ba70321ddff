use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single species entry in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Alien {
    pub species: String,
    pub habitat: String,
    /// Lifespan in years.
    pub lifespan: f64,
    pub size: String,
    pub weight: f64,
}

impl Alien {
    pub fn new(
        species: impl Into<String>,
        habitat: impl Into<String>,
        lifespan: f64,
        size: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            species: species.into(),
            habitat: habitat.into(),
            lifespan,
            size: size.into(),
            weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let alien = Alien::new("Zentar", "Jungle", 120.0, "Large", 300.0);
        let value = serde_json::to_value(&alien).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "species": "Zentar",
                "habitat": "Jungle",
                "lifespan": 120.0,
                "size": "Large",
                "weight": 300.0,
            })
        );
    }
}
