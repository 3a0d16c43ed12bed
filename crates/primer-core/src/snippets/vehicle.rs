//! Vehicle / Car records.
//!
//! `Car` embeds a `Vehicle` instead of extending it. Formatting lives in free
//! functions; `AsRef<Vehicle>` lets `vehicle_info` accept either record.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub make: String,
    pub year: u16,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: u16) -> Self {
        Self {
            make: make.into(),
            year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub vehicle: Vehicle,
    pub model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: u16, model: impl Into<String>) -> Self {
        Self {
            vehicle: Vehicle::new(make, year),
            model: model.into(),
        }
    }
}

impl AsRef<Vehicle> for Vehicle {
    fn as_ref(&self) -> &Vehicle {
        self
    }
}

impl AsRef<Vehicle> for Car {
    fn as_ref(&self) -> &Vehicle {
        &self.vehicle
    }
}

/// `Make: {make}, Year: {year}`
pub fn vehicle_info(vehicle: &impl AsRef<Vehicle>) -> String {
    let vehicle = vehicle.as_ref();
    format!("Make: {}, Year: {}", vehicle.make, vehicle.year)
}

/// `Model: {model}`
pub fn car_model(car: &Car) -> String {
    format!("Model: {}", car.model)
}
