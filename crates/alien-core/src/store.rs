use crate::alien::Alien;
use crate::dataset::builtin_aliens;
use crate::error::{CoreError, Result};

// ---------------------------------------------------------------------------
// SpeciesStore
// ---------------------------------------------------------------------------

/// Read-only access to an ordered collection of species records.
///
/// Implementations must return the same slice for the lifetime of the
/// store; declaration order is the order every listing reports.
pub trait SpeciesStore: Send + Sync {
    fn records(&self) -> &[Alien];
}

/// In-memory store over a fixed, validated record list.
#[derive(Clone, Debug)]
pub struct InMemorySpeciesStore {
    records: Vec<Alien>,
}

impl InMemorySpeciesStore {
    /// Create a store from caller-supplied records.
    ///
    /// Rejects an empty list and any record whose lifespan or weight is
    /// negative or not finite. Duplicate species are kept as given.
    pub fn new(records: Vec<Alien>) -> Result<Self> {
        if records.is_empty() {
            return Err(CoreError::EmptyDataset);
        }
        for alien in &records {
            check_measure(alien, "lifespan", alien.lifespan)?;
            check_measure(alien, "weight", alien.weight)?;
        }
        Ok(Self { records })
    }

    /// The built-in ten-species table.
    pub fn builtin() -> Self {
        Self {
            records: builtin_aliens(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SpeciesStore for InMemorySpeciesStore {
    fn records(&self) -> &[Alien] {
        &self.records
    }
}

fn check_measure(alien: &Alien, field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidRecord {
            species: alien.species.clone(),
            field,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_store() {
        let store = InMemorySpeciesStore::builtin();
        assert_eq!(store.len(), 10);
        assert_eq!(store.records()[0].species, "Zentar");
        assert_eq!(store.records()[9].species, "Quorin");
    }

    #[test]
    fn test_empty_rejected() {
        let err = InMemorySpeciesStore::new(Vec::new()).unwrap_err();
        assert_eq!(err, CoreError::EmptyDataset);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let records = vec![Alien::new("Blip", "Void", 10.0, "Tiny", -1.0)];
        match InMemorySpeciesStore::new(records) {
            Err(CoreError::InvalidRecord { species, field, .. }) => {
                assert_eq!(species, "Blip");
                assert_eq!(field, "weight");
            }
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_lifespan_rejected() {
        let records = vec![Alien::new("Blip", "Void", f64::NAN, "Tiny", 1.0)];
        assert!(matches!(
            InMemorySpeciesStore::new(records),
            Err(CoreError::InvalidRecord {
                field: "lifespan",
                ..
            })
        ));
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let records = vec![
            Alien::new("Blip", "Void", 1.0, "Tiny", 1.0),
            Alien::new("BLIP", "Nebula", 2.0, "Huge", 2.0),
        ];
        let store = InMemorySpeciesStore::new(records).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[1].habitat, "Nebula");
    }
}
