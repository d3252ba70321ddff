//! Alien species catalog
//!
//! An immutable, ordered table of [`Alien`] records and the
//! [`QueryService`] that answers lookups over it.
//!
//! ```
//! use alien_core::{AlienFilter, QueryService};
//!
//! let service = QueryService::builtin();
//! let jungle = service.filtered(&AlienFilter::new().with_habitat("jungle"));
//! assert_eq!(jungle.len(), 3);
//! assert_eq!(service.by_species("ZENTAR").unwrap().habitat, "Jungle");
//! ```

pub mod alien;
pub mod dataset;
pub mod error;
pub mod query;
pub mod store;

pub use alien::Alien;
pub use dataset::builtin_aliens;
pub use error::{CoreError, Result};
pub use query::{AlienFilter, QueryService, eq_ignore_case};
pub use store::{InMemorySpeciesStore, SpeciesStore};
