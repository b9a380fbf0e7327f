//! Point force fields
//!
//! A field is a signed point mass. Positive (or zero) mass attracts
//! particles, negative mass repels them.

use serde::{Deserialize, Serialize};

use super::vector::Vector;

/// Attract/repel classification derived from a field's mass sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    Attract,
    Repel,
}

impl Polarity {
    pub fn from_mass(mass: f64) -> Self {
        if mass < 0.0 { Polarity::Repel } else { Polarity::Attract }
    }
}

/// Serialized form of a field (polarity is always derived, never stored)
#[derive(Serialize, Deserialize)]
struct FieldDef {
    position: Vector,
    mass: f64,
}

/// A signed point mass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FieldDef", into = "FieldDef")]
pub struct Field {
    pub position: Vector,
    mass: f64,
    polarity: Polarity,
}

impl Field {
    pub fn new(position: Vector, mass: f64) -> Self {
        Self {
            position,
            mass,
            polarity: Polarity::from_mass(mass),
        }
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Change the mass, reclassifying polarity
    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
        self.polarity = Polarity::from_mass(mass);
    }

    /// Reposition the field (e.g. to follow a pointer between ticks)
    pub fn move_to(&mut self, position: Vector) {
        self.position = position;
    }
}

impl From<FieldDef> for Field {
    fn from(def: FieldDef) -> Self {
        Field::new(def.position, def.mass)
    }
}

impl From<Field> for FieldDef {
    fn from(field: Field) -> Self {
        FieldDef {
            position: field.position,
            mass: field.mass,
        }
    }
}
