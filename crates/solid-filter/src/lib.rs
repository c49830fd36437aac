//! Solid Filter - Specification-pattern filtering for Rust collections.
//!
//! The crate separates *what* makes an item interesting from *how* a
//! collection is walked:
//!
//! - [`Specification`] answers "does this candidate qualify?"
//! - [`Filter`] walks a slice and yields the candidates a specification accepts
//!
//! New criteria are added by writing a new [`Specification`] or by composing
//! existing ones with [`And`], [`Or`], [`Not`], [`AllOf`] and [`AnyOf`].
//! Neither [`Filter`] nor the existing specifications change when a criterion
//! is added.
//!
//! # Quick Start
//!
//! ```rust
//! use solid_filter::{Filter, Specification};
//! use solid_filter::vehicle::{
//!     Brand, BrandSpecification, Color, ColorSpecification, Vehicle, VehicleType,
//! };
//!
//! let lot = vec![
//!     Vehicle::new(Brand::Ford, VehicleType::Suv, Color::Blue, 2.5),
//!     Vehicle::new(Brand::Chevrolet, VehicleType::Truck, Color::Purple, 7.5),
//!     Vehicle::new(Brand::Ford, VehicleType::Crossover, Color::Orange, 0.0),
//! ];
//!
//! let fords = Filter.collect(&lot, &BrandSpecification::new(Brand::Ford));
//! assert_eq!(fords.len(), 2);
//!
//! let spec = ColorSpecification::new(Color::Purple).and(BrandSpecification::new(Brand::Chevrolet));
//! let matches: Vec<_> = Filter.apply(&lot, &spec).collect();
//! assert_eq!(matches, vec![&lot[1]]);
//! ```
//!
//! # Composition Semantics
//!
//! | Combinator | Satisfied when |
//! |------------|----------------|
//! | `And(a, b)` | `a` and `b` are satisfied |
//! | `Or(a, b)` | `a` or `b` is satisfied |
//! | `Not(a)` | `a` is not satisfied |
//! | `AllOf[..]` | every child is satisfied (empty = satisfied) |
//! | `AnyOf[..]` | at least one child is satisfied (empty = not satisfied) |

mod composite;
mod error;
mod filter;
mod spec;
pub mod vehicle;

// Re-export public API
pub use composite::{AllOf, And, AnyOf, BoxedSpecification, Not, Or};
pub use error::{FilterError, Result};
pub use filter::{Filter, Matches};
pub use spec::{from_fn, AlwaysFalse, AlwaysTrue, FnSpecification, Specification};
