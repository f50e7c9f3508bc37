//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(pos: Vec2, color: [f32; 4]) -> Self {
        Self::new(pos.x, pos.y, color)
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::from(self.position)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
    pub const STAR: [f32; 4] = [0.85, 0.85, 1.0, 1.0];
    pub const LAND: [f32; 4] = [0.45, 0.33, 0.22, 1.0];
    pub const PAD_GREEN: [f32; 4] = [0.2, 0.85, 0.3, 1.0];
    pub const PAD_YELLOW: [f32; 4] = [0.95, 0.85, 0.2, 1.0];
    pub const PAD_BLUE: [f32; 4] = [0.25, 0.5, 1.0, 1.0];
    pub const GEM: [f32; 4] = [0.95, 0.15, 0.35, 1.0];
    pub const UTE_BODY: [f32; 4] = [0.85, 0.85, 0.9, 1.0];
    pub const UTE_ROCKET: [f32; 4] = [1.0, 0.6, 0.15, 1.0];
    pub const EXPLOSION: [f32; 4] = [1.0, 0.3, 0.1, 1.0];
    pub const RUBY_STANDING: [f32; 4] = [0.8, 0.2, 0.25, 1.0];
    pub const RUBY_JUMP: [f32; 4] = [1.0, 0.45, 0.5, 1.0];
    pub const NOSE: [f32; 4] = [0.1, 0.1, 0.15, 1.0];
}
