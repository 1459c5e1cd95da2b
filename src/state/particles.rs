// Animated node mesh drawn behind the hero section
use eframe::egui;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::style::{NODE_COUNT, NODE_LIT_CHANCE, NODE_LIT_MS, NODE_SPEED};

/// Small xorshift generator. Statistical quality does not matter here, the
/// nodes only have to look scattered.
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        // zero is a fixed point of the shift sequence
        Self { state: seed | 1 }
    }

    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9e37_79b9_7f4a_7c15);
        Self::new(nanos)
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Uniform in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

pub struct Node {
    pub pos: egui::Pos2,
    vel: egui::Vec2,
    lit_until: Option<Instant>,
}

impl Node {
    pub fn lit(&self, now: Instant) -> bool {
        self.lit_until.map(|t| now < t).unwrap_or(false)
    }
}

/// Drifting nodes that bounce around a box and occasionally light up.
/// Velocities are in pixels per frame at 60fps, scaled by the real frame
/// time when stepping.
pub struct ParticleField {
    nodes: Vec<Node>,
    rng: XorShift64,
    bounds: egui::Vec2,
    last_tick: Option<Instant>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            rng: XorShift64::from_clock(),
            bounds: egui::Vec2::ZERO,
            last_tick: None,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn scatter(&mut self, bounds: egui::Vec2) {
        self.bounds = bounds;
        self.nodes.clear();
        for _ in 0..NODE_COUNT {
            let pos = egui::pos2(
                self.rng.next_f32() * bounds.x,
                self.rng.next_f32() * bounds.y,
            );
            let vel = egui::vec2(
                (self.rng.next_f32() - 0.5) * NODE_SPEED,
                (self.rng.next_f32() - 0.5) * NODE_SPEED,
            );
            self.nodes.push(Node {
                pos,
                vel,
                lit_until: None,
            });
        }
    }

    /// Advance the simulation to `now` inside a box of `bounds`.
    /// A resize re-scatters instead of stretching the field.
    pub fn step(&mut self, now: Instant, bounds: egui::Vec2) {
        if bounds.x <= 0.0 || bounds.y <= 0.0 {
            return;
        }
        if self.nodes.is_empty() || (bounds - self.bounds).length() > 1.0 {
            self.scatter(bounds);
            self.last_tick = Some(now);
            return;
        }

        let dt = match self.last_tick {
            Some(last) => now.duration_since(last).as_secs_f32().min(0.1),
            None => 0.0,
        };
        self.last_tick = Some(now);
        let frames = dt * 60.0;

        for node in &mut self.nodes {
            node.pos += node.vel * frames;

            if node.pos.x < 0.0 || node.pos.x > bounds.x {
                node.vel.x = -node.vel.x;
                node.pos.x = node.pos.x.clamp(0.0, bounds.x);
            }
            if node.pos.y < 0.0 || node.pos.y > bounds.y {
                node.vel.y = -node.vel.y;
                node.pos.y = node.pos.y.clamp(0.0, bounds.y);
            }

            if self.rng.next_f32() < NODE_LIT_CHANCE {
                node.lit_until = Some(now + Duration::from_millis(NODE_LIT_MS));
            }
            if let Some(until) = node.lit_until {
                if now >= until {
                    node.lit_until = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_stays_in_unit_range() {
        let mut rng = XorShift64::new(42);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_rng_zero_seed_is_lifted() {
        let mut rng = XorShift64::new(0);
        assert_ne!(rng.next_u64(), 0);
        assert_ne!(rng.next_u64(), rng.next_u64());
    }

    #[test]
    fn test_nodes_stay_inside_bounds() {
        let bounds = egui::vec2(400.0, 300.0);
        let mut field = ParticleField::new();
        let t0 = Instant::now();
        field.step(t0, bounds);
        assert_eq!(field.nodes().len(), NODE_COUNT);

        for i in 1..200 {
            field.step(t0 + Duration::from_millis(i * 16), bounds);
        }
        for node in field.nodes() {
            assert!(node.pos.x >= 0.0 && node.pos.x <= bounds.x);
            assert!(node.pos.y >= 0.0 && node.pos.y <= bounds.y);
        }
    }

    #[test]
    fn test_resize_rescatters() {
        let mut field = ParticleField::new();
        let t0 = Instant::now();
        field.step(t0, egui::vec2(400.0, 300.0));
        field.step(t0 + Duration::from_millis(16), egui::vec2(800.0, 300.0));
        assert_eq!(field.nodes().len(), NODE_COUNT);
        // wide box makes positions past the old width possible again
        assert!(field.nodes().iter().all(|n| n.pos.x <= 800.0));
    }

    #[test]
    fn test_zero_bounds_is_ignored() {
        let mut field = ParticleField::new();
        field.step(Instant::now(), egui::Vec2::ZERO);
        assert!(field.nodes().is_empty());
    }
}
