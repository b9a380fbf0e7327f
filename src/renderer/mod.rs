//! Read-only draw list for host renderers
//!
//! Turns a [`Simulation`] into colored triangle-list vertices: particles as
//! small squares, then fields and emitters as circular markers. Uploading and
//! presenting the vertices is left to the host.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use glam::{DVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::{OBJECT_SIZE, PARTICLE_SIZE};
use crate::sim::{Polarity, Simulation, vector};

/// Marker circle tessellation
const MARKER_SEGMENTS: u32 = 16;

/// Sizes used when drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Side length of each particle square
    pub particle_size: f64,
    /// Radius of field and emitter markers
    pub object_size: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            particle_size: PARTICLE_SIZE,
            object_size: OBJECT_SIZE,
        }
    }
}

/// Marker color for a field
pub fn field_color(polarity: Polarity) -> [f32; 4] {
    match polarity {
        Polarity::Attract => colors::FIELD_ATTRACT,
        Polarity::Repel => colors::FIELD_REPEL,
    }
}

/// Vertices for one frame, in draw order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    /// Color to clear the surface with before drawing
    pub clear_color: [f32; 4],
    pub particles: Vec<Vertex>,
    pub markers: Vec<Vertex>,
}

impl DrawList {
    /// Total vertex count
    pub fn len(&self) -> usize {
        self.particles.len() + self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Particles first, markers drawn on top
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.particles.iter().chain(self.markers.iter())
    }

    /// Raw bytes of the particle vertices, ready for a vertex buffer
    pub fn particle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.particles)
    }

    /// Raw bytes of the marker vertices
    pub fn marker_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.markers)
    }
}

#[inline]
fn to_screen(v: DVec2) -> Vec2 {
    v.as_vec2()
}

/// Build the draw list for the current simulation state
///
/// Particles with non-finite positions are never drawn.
pub fn build_frame(sim: &Simulation, style: &RenderStyle) -> DrawList {
    let mut list = DrawList {
        clear_color: colors::BACKGROUND,
        particles: Vec::with_capacity(sim.particles().len() * 6),
        markers: Vec::new(),
    };

    let size = style.particle_size as f32;
    for particle in sim.particles() {
        if !vector::is_finite(particle.pos) {
            continue;
        }
        shapes::square(&mut list.particles, to_screen(particle.pos), size, colors::PARTICLE);
    }

    let radius = style.object_size as f32;
    for field in sim.fields() {
        shapes::circle(
            &mut list.markers,
            to_screen(field.position),
            radius,
            field_color(field.polarity()),
            MARKER_SEGMENTS,
        );
    }
    for emitter in sim.emitters() {
        shapes::circle(
            &mut list.markers,
            to_screen(emitter.position),
            radius,
            colors::EMITTER,
            MARKER_SEGMENTS,
        );
    }

    list
}
