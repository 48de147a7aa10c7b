//! Vehicle attribute definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MODEL_OPTIONS: &[&str] = &["kia", "nissan", "hyundai", "mercedes-benz", "toyota"];
pub const MOTOR_TYPE_OPTIONS: &[&str] = &["petrol", "gas", "petrol and gas"];
pub const WHEEL_OPTIONS: &[&str] = &["left", "right"];
pub const COLOR_OPTIONS: &[&str] = &[
    "black", "white", "silver", "blue", "gray", "other", "brown", "red", "green", "orange",
    "cherry", "skyblue", "clove", "beige",
];
pub const BODY_TYPE_OPTIONS: &[&str] = &["sedan", "suv", "Universal", "Coupe", "hatchback"];
pub const STATUS_OPTIONS: &[&str] = &["excellent", "normal", "good", "crashed", "new"];

/// Errors from string-keyed access to the attribute set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

/// How a field's value is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form numeric text
    Numeric,
    /// One of a fixed list of options
    Choice(&'static [&'static str]),
}

/// The closed set of vehicle attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeName {
    Model,
    Year,
    MotorType,
    Running,
    Wheel,
    Color,
    BodyType,
    Status,
    MotorVolume,
}

impl AttributeName {
    /// All attributes in form order
    pub const ALL: [AttributeName; 9] = [
        Self::Model,
        Self::Year,
        Self::MotorType,
        Self::Running,
        Self::Wheel,
        Self::Color,
        Self::BodyType,
        Self::Status,
        Self::MotorVolume,
    ];

    /// camelCase key
    pub fn key(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Year => "year",
            Self::MotorType => "motorType",
            Self::Running => "running",
            Self::Wheel => "wheel",
            Self::Color => "color",
            Self::BodyType => "bodyType",
            Self::Status => "status",
            Self::MotorVolume => "motorVolume",
        }
    }

    /// Member name in the estimation service's request body
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::MotorType => "motor_type",
            Self::BodyType => "type",
            Self::MotorVolume => "motor_volume",
            other => other.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Model => "Model",
            Self::Year => "Year",
            Self::MotorType => "Motor Type",
            Self::Running => "Running (km/miles)",
            Self::Wheel => "Wheel Type",
            Self::Color => "Color",
            Self::BodyType => "Type",
            Self::Status => "Status",
            Self::MotorVolume => "Motor Volume",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Year | Self::Running | Self::MotorVolume => FieldKind::Numeric,
            Self::Model => FieldKind::Choice(MODEL_OPTIONS),
            Self::MotorType => FieldKind::Choice(MOTOR_TYPE_OPTIONS),
            Self::Wheel => FieldKind::Choice(WHEEL_OPTIONS),
            Self::Color => FieldKind::Choice(COLOR_OPTIONS),
            Self::BodyType => FieldKind::Choice(BODY_TYPE_OPTIONS),
            Self::Status => FieldKind::Choice(STATUS_OPTIONS),
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AttributeName {
    type Err = FormError;

    /// Accepts both the camelCase key and the service's wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.key() == s || name.wire_name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// The fixed-shape record of vehicle attributes.
///
/// Serializes with the estimation service's member names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    pub model: String,
    pub year: String,
    pub motor_type: String,
    pub running: String,
    pub wheel: String,
    pub color: String,
    #[serde(rename = "type")]
    pub body_type: String,
    pub status: String,
    pub motor_volume: String,
}

impl AttributeSet {
    pub fn get(&self, name: AttributeName) -> &str {
        match name {
            AttributeName::Model => &self.model,
            AttributeName::Year => &self.year,
            AttributeName::MotorType => &self.motor_type,
            AttributeName::Running => &self.running,
            AttributeName::Wheel => &self.wheel,
            AttributeName::Color => &self.color,
            AttributeName::BodyType => &self.body_type,
            AttributeName::Status => &self.status,
            AttributeName::MotorVolume => &self.motor_volume,
        }
    }

    fn slot_mut(&mut self, name: AttributeName) -> &mut String {
        match name {
            AttributeName::Model => &mut self.model,
            AttributeName::Year => &mut self.year,
            AttributeName::MotorType => &mut self.motor_type,
            AttributeName::Running => &mut self.running,
            AttributeName::Wheel => &mut self.wheel,
            AttributeName::Color => &mut self.color,
            AttributeName::BodyType => &mut self.body_type,
            AttributeName::Status => &mut self.status,
            AttributeName::MotorVolume => &mut self.motor_volume,
        }
    }

    pub fn set(&mut self, name: AttributeName, value: impl Into<String>) {
        *self.slot_mut(name) = value.into();
    }

    /// Iterate over (name, value) pairs in form order
    pub fn iter(&self) -> impl Iterator<Item = (AttributeName, &str)> + '_ {
        AttributeName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }
}
