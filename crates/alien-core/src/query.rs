//! Read operations over a species store
//!
//! Every lookup and filter compares text through [`eq_ignore_case`], so the
//! by-species route and the habitat/size filters agree on what "the same
//! name" means.

use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, trace};

use crate::alien::Alien;
use crate::error::{CoreError, Result};
use crate::store::{InMemorySpeciesStore, SpeciesStore};

/// Case-insensitive equality using the Unicode lowercase mapping.
///
/// Independent of the process locale and does not allocate.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Optional habitat and size predicates, combined with AND.
///
/// An empty string counts as "not provided".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlienFilter {
    pub habitat: Option<String>,
    pub size: Option<String>,
}

impl AlienFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from decoded query-string pairs.
    ///
    /// A repeated key keeps its last value; unknown keys are ignored. Never
    /// fails, whatever the input.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filter = Self::new();
        for (key, value) in pairs {
            match key.as_ref() {
                "habitat" => filter.habitat = Some(value.into()),
                "size" => filter.size = Some(value.into()),
                _ => {}
            }
        }
        filter
    }

    pub fn with_habitat(mut self, habitat: impl Into<String>) -> Self {
        self.habitat = Some(habitat.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn habitat(&self) -> Option<&str> {
        self.habitat.as_deref().filter(|h| !h.is_empty())
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref().filter(|s| !s.is_empty())
    }

    pub fn matches(&self, alien: &Alien) -> bool {
        self.habitat().is_none_or(|h| eq_ignore_case(&alien.habitat, h))
            && self.size().is_none_or(|s| eq_ignore_case(&alien.size, s))
    }
}

/// Query service over an immutable store.
///
/// Cloning is cheap: clones share the same store.
pub struct QueryService<S = InMemorySpeciesStore> {
    store: Arc<S>,
}

impl<S> Clone for QueryService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl QueryService<InMemorySpeciesStore> {
    /// Service over the built-in ten-species table.
    pub fn builtin() -> Self {
        Self {
            store: Arc::new(InMemorySpeciesStore::builtin()),
        }
    }
}

impl<S: SpeciesStore> QueryService<S> {
    /// Wrap a store. The store must hold at least one record.
    pub fn new(store: S) -> Result<Self> {
        Self::from_shared(Arc::new(store))
    }

    pub fn from_shared(store: Arc<S>) -> Result<Self> {
        if store.records().is_empty() {
            return Err(CoreError::EmptyDataset);
        }
        Ok(Self { store })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All records in declaration order.
    pub fn all(&self) -> &[Alien] {
        self.store.records()
    }

    /// A uniformly random record drawn from the thread RNG.
    pub fn random(&self) -> &Alien {
        self.random_with(&mut rand::rng())
    }

    /// A uniformly random record drawn from `rng`.
    pub fn random_with<R: Rng>(&self, rng: &mut R) -> &Alien {
        let records = self.all();
        // Non-empty: checked when the service was constructed.
        let alien = &records[rng.random_range(0..records.len())];
        trace!(species = %alien.species, "picked random alien");
        alien
    }

    /// Species names in declaration order.
    pub fn species(&self) -> Vec<String> {
        self.all().iter().map(|a| a.species.clone()).collect()
    }

    /// Distinct habitats. Callers must not depend on the order.
    pub fn habitats(&self) -> Vec<String> {
        distinct(self.all().iter().map(|a| a.habitat.as_str()))
    }

    /// Distinct sizes. Callers must not depend on the order.
    pub fn sizes(&self) -> Vec<String> {
        distinct(self.all().iter().map(|a| a.size.as_str()))
    }

    /// First record whose species matches `name`, ignoring case.
    pub fn by_species(&self, name: &str) -> Result<&Alien> {
        match self.all().iter().find(|a| eq_ignore_case(&a.species, name)) {
            Some(alien) => Ok(alien),
            None => {
                debug!(species = name, "species lookup missed");
                Err(CoreError::SpeciesNotFound)
            }
        }
    }

    /// Records passing `filter`, in declaration order.
    pub fn filtered(&self, filter: &AlienFilter) -> Vec<Alien> {
        self.all()
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("Zentar", "zENTAR"));
        assert!(eq_ignore_case("", ""));
        assert!(!eq_ignore_case("Zentar", "Zentars"));
        assert!(!eq_ignore_case("Zentar", "Zentor"));
        assert!(eq_ignore_case("ÉCLAIR", "éclair"));
    }

    #[test]
    fn test_filter_empty_strings_are_absent() {
        let filter = AlienFilter::new().with_habitat("").with_size("");
        assert_eq!(filter.habitat(), None);
        assert_eq!(filter.size(), None);
        assert!(filter.matches(&Alien::new("X", "Y", 1.0, "Z", 1.0)));
    }

    #[test]
    fn test_filter_matches() {
        let alien = Alien::new("Vexor", "Ocean", 95.0, "Small", 50.0);
        assert!(AlienFilter::new().with_habitat("ocean").matches(&alien));
        assert!(AlienFilter::new().with_size("SMALL").matches(&alien));
        assert!(
            !AlienFilter::new()
                .with_habitat("Ocean")
                .with_size("Large")
                .matches(&alien)
        );
    }

    #[test]
    fn test_from_pairs_last_value_wins() {
        let filter = AlienFilter::from_pairs([
            ("habitat", "Ocean"),
            ("colour", "green"),
            ("habitat", "Jungle"),
            ("size", "Large"),
        ]);
        assert_eq!(
            filter,
            AlienFilter::new().with_habitat("Jungle").with_size("Large")
        );
    }

    #[test]
    fn test_from_pairs_trailing_empty_clears() {
        let filter = AlienFilter::from_pairs([("size", "Large"), ("size", "")]);
        assert_eq!(filter.size(), None);

        let none: Vec<(String, String)> = Vec::new();
        assert_eq!(AlienFilter::from_pairs(none), AlienFilter::new());
    }

    #[test]
    fn test_distinct_keeps_first_occurrence() {
        let out = distinct(["b", "a", "b", "c", "a"].into_iter());
        assert_eq!(out, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_new_rejects_empty_store() {
        struct Empty;
        impl SpeciesStore for Empty {
            fn records(&self) -> &[Alien] {
                &[]
            }
        }
        assert!(matches!(
            QueryService::new(Empty),
            Err(CoreError::EmptyDataset)
        ));
    }
}
