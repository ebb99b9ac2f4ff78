//! Plant catalog storage.
//!
//! The catalog is an ordered, read-only list of plant records. An embedded
//! catalog is compiled into the binary, and custom catalogs can be loaded
//! from JSON files with the same layout.
//!
//! ## Example
//!
//! ```rust,no_run
//! use plant_finder::PlantCatalog;
//! use plant_finder::core::PlantId;
//!
//! let catalog = PlantCatalog::load_embedded().unwrap();
//!
//! for plant in catalog.plants() {
//!     println!("{} ({})", plant.name, plant.id);
//! }
//!
//! let aster = catalog.get(&PlantId::new("new-england-aster"));
//! ```

pub mod store;
