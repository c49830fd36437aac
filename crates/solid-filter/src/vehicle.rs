//! Vehicle domain used by the dealership scenario.
//!
//! Each filterable attribute of [`Vehicle`] gets its own [`Specification`].
//! Adding a criterion means adding a type here, never editing
//! [`Filter`](crate::Filter) or an existing specification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;
use crate::spec::Specification;

macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $arg:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the display label.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = FilterError;

            /// Parses a label, ignoring ASCII case.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| FilterError::invalid($arg, format!("unknown value '{}'", wanted)))
            }
        }
    };
}

attribute_enum! {
    /// Vehicle manufacturer.
    Brand, "brand" {
        Ford => "Ford",
        Toyota => "Toyota",
        Nissan => "Nissan",
        Dodge => "Dodge",
        Chevrolet => "Chevrolet",
    }
}

attribute_enum! {
    /// Body category.
    VehicleType, "kind" {
        Suv => "SUV",
        Sedan => "Sedan",
        Pickup => "Pickup",
        Crossover => "Crossover",
        Truck => "Truck",
    }
}

attribute_enum! {
    /// Paint color.
    Color, "color" {
        Blue => "Blue",
        White => "White",
        Red => "Red",
        Black => "Black",
        Orange => "Orange",
        Purple => "Purple",
    }
}

/// A vehicle on the lot.
///
/// Immutable once built: attributes are read through accessors only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    brand: Brand,
    kind: VehicleType,
    color: Color,
    engine_volume: f64,
}

impl Vehicle {
    /// Creates a vehicle. `engine_volume` is in litres; `0.0` means electric.
    pub fn new(brand: Brand, kind: VehicleType, color: Color, engine_volume: f64) -> Self {
        Vehicle {
            brand,
            kind,
            color,
            engine_volume,
        }
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    pub fn kind(&self) -> VehicleType {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn engine_volume(&self) -> f64 {
        self.engine_volume
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {:.1} L)",
            self.brand, self.kind, self.color, self.engine_volume
        )
    }
}

/// Matches vehicles of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        ColorSpecification { color }
    }
}

impl Specification<Vehicle> for ColorSpecification {
    fn is_satisfied_by(&self, candidate: &Vehicle) -> bool {
        candidate.color == self.color
    }
}

/// Matches vehicles of one brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandSpecification {
    brand: Brand,
}

impl BrandSpecification {
    pub fn new(brand: Brand) -> Self {
        BrandSpecification { brand }
    }
}

impl Specification<Vehicle> for BrandSpecification {
    fn is_satisfied_by(&self, candidate: &Vehicle) -> bool {
        candidate.brand == self.brand
    }
}

/// Matches vehicles of one body category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleTypeSpecification {
    kind: VehicleType,
}

impl VehicleTypeSpecification {
    pub fn new(kind: VehicleType) -> Self {
        VehicleTypeSpecification { kind }
    }
}

impl Specification<Vehicle> for VehicleTypeSpecification {
    fn is_satisfied_by(&self, candidate: &Vehicle) -> bool {
        candidate.kind == self.kind
    }
}

/// Matches vehicles whose engine volume lies in an inclusive range.
///
/// ```
/// use solid_filter::Specification;
/// use solid_filter::vehicle::{Brand, Color, EngineVolumeSpecification, Vehicle, VehicleType};
///
/// let truck = Vehicle::new(Brand::Dodge, VehicleType::Pickup, Color::Black, 5.5);
/// assert!(EngineVolumeSpecification::at_least(5.0).is_satisfied_by(&truck));
/// assert!(!EngineVolumeSpecification::new(1.0, 2.5).is_satisfied_by(&truck));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineVolumeSpecification {
    min: f64,
    max: f64,
}

impl EngineVolumeSpecification {
    /// Matches `min <= volume <= max`.
    pub fn new(min: f64, max: f64) -> Self {
        EngineVolumeSpecification { min, max }
    }

    pub fn at_least(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    pub fn at_most(max: f64) -> Self {
        Self::new(f64::NEG_INFINITY, max)
    }
}

impl Specification<Vehicle> for EngineVolumeSpecification {
    fn is_satisfied_by(&self, candidate: &Vehicle) -> bool {
        (self.min..=self.max).contains(&candidate.engine_volume)
    }
}
