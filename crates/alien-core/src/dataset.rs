//! The built-in species table served by the API.

use crate::alien::Alien;

/// Rows of the built-in table: species, habitat, lifespan, size, weight.
const BUILTIN: [(&str, &str, f64, &str, f64); 10] = [
    ("Zentar", "Jungle", 120.0, "Large", 300.0),
    ("Gorlax", "Desert", 85.0, "Medium", 150.0),
    ("Vexor", "Ocean", 95.0, "Small", 50.0),
    ("Plutoid", "Mountain", 150.0, "Medium", 180.0),
    ("Zyphor", "Jungle", 200.0, "Large", 500.0),
    ("Xeltron", "Desert", 75.0, "Small", 40.0),
    ("Mentar", "Jungle", 110.0, "Medium", 280.0),
    ("Draknor", "Ocean", 90.0, "Small", 140.0),
    ("Seltrix", "Desert", 130.0, "Large", 320.0),
    ("Quorin", "Mountain", 180.0, "Medium", 400.0),
];

/// Build the built-in records in declaration order.
pub fn builtin_aliens() -> Vec<Alien> {
    BUILTIN
        .iter()
        .map(|&(species, habitat, lifespan, size, weight)| {
            Alien::new(species, habitat, lifespan, size, weight)
        })
        .collect()
}
