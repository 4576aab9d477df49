//! Core data model for packing rectangular items into fixed-size drawers.
//!
//! Contains the entities ([`entities::Dimension`], [`entities::Container`], [`entities::Catalog`], [`entities::Layout`], ...),
//! the dense [`occupancy::OccupancyGrid`] used for collision queries,
//! import/export of the external JSON representation and SVG rendering of layouts.

/// Entities to model rectangular packing problems
pub mod entities;

/// Dense occupancy bookkeeping of a single container
pub mod occupancy;

/// Axis-aligned integer geometry
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::PackError;
#[doc(inline)]
pub use error::Result;
