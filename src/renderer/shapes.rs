//! Shape generation for 2D primitives
//!
//! Everything is emitted as a plain triangle list in world pixels (y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::rotate_about;

/// Two triangles covering the quad `a b c d` (in winding order)
pub fn quad(corners: [Vec2; 4], color: [f32; 4]) -> Vec<Vertex> {
    let [a, b, c, d] = corners;
    [a, b, c, c, d, a]
        .into_iter()
        .map(|p| Vertex::at(p, color))
        .collect()
}

/// Axis-aligned filled rectangle from its top-left corner
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    quad(
        [
            min,
            Vec2::new(min.x + size.x, min.y),
            min + size,
            Vec2::new(min.x, min.y + size.y),
        ],
        color,
    )
}

/// Rectangle of `size` centred on `center`, turned by `degrees`
pub fn rotated_rect(center: Vec2, size: Vec2, degrees: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = size / 2.0;
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|c| rotate_about(center + c, center, degrees));
    quad(corners, color)
}

/// Four-pointed gem shape, `radius` from centre to each tip
pub fn diamond(center: Vec2, radius: f32, degrees: f32, color: [f32; 4]) -> Vec<Vertex> {
    let corners = [
        Vec2::new(0.0, -radius),
        Vec2::new(radius * 0.7, 0.0),
        Vec2::new(0.0, radius),
        Vec2::new(-radius * 0.7, 0.0),
    ]
    .map(|c| rotate_about(center + c, center, degrees));
    quad(corners, color)
}

pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![Vertex::at(a, color), Vertex::at(b, color), Vertex::at(c, color)]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}
