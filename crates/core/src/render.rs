//! FrameRenderer: samples the torus surface and rasterizes one frame.
//!
//! The surface is walked on a (theta, phi) grid. Theta goes around the tube
//! cross-section, phi around the axis of revolution. Each sample is rotated
//! about the x-axis by `A` and the z-axis by `B`, pushed `k2` units away from
//! the viewer, perspective-projected, and composited through the depth
//! buffer. Brightness comes from the surface normal dotted with a light at
//! object-space direction `(0, 1, -1)`.
//!
//! This module is pure (no I/O). The same angles and scene always give the
//! same grid.

use std::f64::consts::TAU;

use crate::config::{luminance_scale, Scene};
use crate::depth::DepthBuffer;
use crate::grid::GlyphGrid;
use crate::types::Angles;

/// Sines and cosines of the two rotation angles, computed once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationTrig {
    pub sin_a: f64,
    pub cos_a: f64,
    pub sin_b: f64,
    pub cos_b: f64,
}

impl RotationTrig {
    pub fn new(angles: Angles) -> Self {
        Self {
            sin_a: angles.a.sin(),
            cos_a: angles.a.cos(),
            sin_b: angles.b.sin(),
            cos_b: angles.b.cos(),
        }
    }
}

/// Surface normal dotted with the light direction, in `[-sqrt(2), sqrt(2)]`.
///
/// Non-positive values face away from the light.
#[inline]
pub fn luminance(
    rot: &RotationTrig,
    sin_theta: f64,
    cos_theta: f64,
    sin_phi: f64,
    cos_phi: f64,
) -> f64 {
    cos_phi * cos_theta * rot.sin_b - rot.cos_a * cos_theta * sin_phi - rot.sin_a * sin_theta
        + rot.cos_b * (rot.cos_a * sin_theta - cos_theta * rot.sin_a * sin_phi)
}

/// Quantize luminance to a ramp index, clamped to `0..ramp_len`.
///
/// `ramp_len` must be at least 1.
pub fn ramp_index(l: f64, ramp_len: usize) -> usize {
    glyph_index(l, luminance_scale(ramp_len), ramp_len)
}

#[inline(always)]
fn glyph_index(l: f64, scale: f64, ramp_len: usize) -> usize {
    // `as` saturates: negatives and NaN land on 0.
    let idx = (l * scale).round() as usize;
    idx.min(ramp_len - 1)
}

/// Counters for the last rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Surface samples visited.
    pub samples: u32,
    /// Samples facing the light.
    pub lit: u32,
    /// Lit samples that won their cell's depth test.
    pub depth_wins: u32,
    /// Lit samples projected outside the grid.
    pub dropped: u32,
}

/// Reusable renderer owning the depth buffer and output grid.
///
/// Buffers are sized once from the scene and reset with a fill pass at the
/// start of every frame, so [`FrameRenderer::render`] does not allocate.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    scene: Scene,
    depth: DepthBuffer,
    grid: GlyphGrid,
    stats: FrameStats,
}

impl FrameRenderer {
    pub fn new(scene: Scene) -> Self {
        let depth = DepthBuffer::new(scene.width(), scene.height());
        let grid = GlyphGrid::new(scene.width(), scene.height(), scene.blank());
        Self {
            scene,
            depth,
            grid,
            stats: FrameStats::default(),
        }
    }

    /// Grid from the most recent [`FrameRenderer::render`] call.
    pub fn grid(&self) -> &GlyphGrid {
        &self.grid
    }

    pub fn depth(&self) -> &DepthBuffer {
        &self.depth
    }

    pub fn last_stats(&self) -> FrameStats {
        self.stats
    }

    /// Rasterize the torus at `angles`.
    pub fn render(&mut self, angles: Angles) -> &GlyphGrid {
        let scene = &self.scene;
        self.depth.reset();
        self.grid.clear(scene.blank());

        let rot = RotationTrig::new(angles);
        let ramp = scene.ramp();
        let scale = scene.luminance_scale();
        let (r1, r2, k1, k2) = (scene.r1(), scene.r2(), scene.k1(), scene.k2());
        let width = scene.width() as f64;
        let height = scene.height() as f64;
        let half_w = width / 2.0;
        let half_h = height / 2.0;

        let mut stats = FrameStats::default();

        let mut theta = 0.0_f64;
        while theta < TAU {
            let cos_theta = theta.cos();
            let sin_theta = theta.sin();

            // Point on the tube cross-section before revolution.
            let circle_x = r2 + r1 * cos_theta;
            let circle_y = r1 * sin_theta;

            let mut phi = 0.0_f64;
            while phi < TAU {
                let cos_phi = phi.cos();
                let sin_phi = phi.sin();
                stats.samples += 1;

                let x = circle_x * (rot.cos_b * cos_phi + rot.sin_a * rot.sin_b * sin_phi)
                    - circle_y * rot.cos_a * rot.sin_b;
                let y = circle_x * (rot.sin_b * cos_phi - rot.sin_a * rot.cos_b * sin_phi)
                    + circle_y * rot.cos_a * rot.cos_b;
                let z = k2 + rot.cos_a * circle_x * sin_phi + circle_y * rot.sin_a;
                let inv_z = 1.0 / z;

                let l = luminance(&rot, sin_theta, cos_theta, sin_phi, cos_phi);
                if l > 0.0 {
                    stats.lit += 1;

                    // Screen rows grow downward, hence the flipped y.
                    let xp = (half_w + k1 * inv_z * x).floor();
                    let yp = (half_h - k1 * inv_z * y).floor();

                    if xp < 0.0 || yp < 0.0 || xp >= width || yp >= height {
                        stats.dropped += 1;
                    } else {
                        let (xp, yp) = (xp as u16, yp as u16);
                        if self.depth.test_and_set(xp, yp, inv_z) {
                            stats.depth_wins += 1;
                            self.grid
                                .set(xp, yp, ramp[glyph_index(l, scale, ramp.len())]);
                        }
                    }
                }

                phi += scene.phi_spacing();
            }
            theta += scene.theta_spacing();
        }

        if stats.dropped > 0 {
            log::debug!(
                "{} of {} lit samples projected outside the {}x{} grid; k1 may be too large",
                stats.dropped,
                stats.lit,
                scene.width(),
                scene.height()
            );
        }

        self.stats = stats;
        &self.grid
    }
}

/// Render one frame into a fresh grid.
pub fn render_frame(angles: Angles, scene: &Scene) -> GlyphGrid {
    let mut renderer = FrameRenderer::new(scene.clone());
    renderer.render(angles);
    renderer.grid
}
