use solid_filter::vehicle::{
    Brand, BrandSpecification, Color, ColorSpecification, EngineVolumeSpecification, Vehicle,
    VehicleType, VehicleTypeSpecification,
};
use solid_filter::{AllOf, Filter};
use tracing::debug;

use crate::cli::{OutputFormat, VehiclesArgs};

/// The lot used by the walkthrough.
pub fn sample_dealership() -> Vec<Vehicle> {
    vec![
        Vehicle::new(Brand::Ford, VehicleType::Suv, Color::Blue, 2.5),
        Vehicle::new(Brand::Toyota, VehicleType::Sedan, Color::White, 2.0),
        Vehicle::new(Brand::Nissan, VehicleType::Sedan, Color::Red, 1.6),
        Vehicle::new(Brand::Dodge, VehicleType::Pickup, Color::Black, 5.5),
        Vehicle::new(Brand::Ford, VehicleType::Crossover, Color::Orange, 0.0),
        Vehicle::new(Brand::Chevrolet, VehicleType::Truck, Color::Purple, 7.5),
    ]
}

/// Builds the conjunction of the requested criteria, or `None` if there are none.
pub fn criteria(args: &VehiclesArgs) -> Option<AllOf<Vehicle>> {
    let mut spec: AllOf<Vehicle> = AllOf::new();
    if let Some(brand) = args.brand {
        spec.push(Box::new(BrandSpecification::new(brand)));
    }
    if let Some(color) = args.color {
        spec.push(Box::new(ColorSpecification::new(color)));
    }
    if let Some(kind) = args.kind {
        spec.push(Box::new(VehicleTypeSpecification::new(kind)));
    }
    if args.min_volume.is_some() || args.max_volume.is_some() {
        spec.push(Box::new(EngineVolumeSpecification::new(
            args.min_volume.unwrap_or(f64::NEG_INFINITY),
            args.max_volume.unwrap_or(f64::INFINITY),
        )));
    }

    (!spec.is_empty()).then_some(spec)
}

pub fn run(args: &VehiclesArgs) -> anyhow::Result<String> {
    let lot = sample_dealership();
    let spec = criteria(args);
    debug!(criteria = spec.as_ref().map_or(0, AllOf::len), "filtering dealership");

    let found: Vec<&Vehicle> = Filter.try_apply(Some(lot.as_slice()), spec.as_ref())?.collect();
    debug!(matched = found.len(), of = lot.len(), "filter complete");

    match args.format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&found)?)),
        OutputFormat::Text if found.is_empty() => Ok("No matching vehicles.\n".to_string()),
        OutputFormat::Text => Ok(found.iter().map(|v| format!("- {v}\n")).collect()),
    }
}
