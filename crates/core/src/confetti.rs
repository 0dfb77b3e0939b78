//! Confetti particle simulation for quiz celebrations.
//!
//! A launch creates a fresh batch of particles that fall and sway for a fixed
//! frame budget. Rendering goes through [`Surface`] so the simulation does not
//! depend on how or when frames are scheduled.

use rand::Rng;

pub const PARTICLE_COUNT: usize = 150;
pub const FRAME_BUDGET: u32 = 180;
pub const SPAWN_Y: f64 = -20.0;
pub const PALETTE: [&str; 6] = [
    "#7c3aed", "#ec4899", "#f59e0b", "#10b981", "#3b82f6", "#f97316",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Rect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fall_speed: f64,
    pub color: &'static str,
    /// Drawn in `[-10, 10)` at launch. Drift uses a fixed amplitude, so `step` never reads it.
    pub sway: f64,
    pub tilt_angle: f64,
    pub tilt_increment: f64,
    pub shape: Shape,
}

impl Particle {
    fn spawn<R: Rng + ?Sized>(width: f64, rng: &mut R) -> Self {
        Self {
            x: rng.random::<f64>() * width.max(0.0),
            y: SPAWN_Y,
            radius: rng.random::<f64>() * 8.0 + 4.0,
            fall_speed: rng.random::<f64>() * 3.0 + 1.0,
            color: PALETTE[rng.random_range(0..PALETTE.len())],
            sway: rng.random::<f64>() * 20.0 - 10.0,
            tilt_angle: 0.0,
            tilt_increment: rng.random::<f64>() * 0.07 + 0.05,
            shape: if rng.random_bool(0.5) {
                Shape::Circle
            } else {
                Shape::Rect
            },
        }
    }

    /// Draw instruction for the particle's current position.
    #[must_use]
    pub fn sprite(&self) -> Sprite {
        match self.shape {
            Shape::Circle => Sprite::Circle {
                cx: self.x,
                cy: self.y,
                r: self.radius,
                color: self.color,
            },
            Shape::Rect => Sprite::Rect {
                cx: self.x,
                cy: self.y,
                width: self.radius * 2.0,
                height: self.radius * 4.0,
                rotation: self.tilt_angle,
                color: self.color,
            },
        }
    }
}

/// A single draw instruction. Rects are centered on `(cx, cy)` and rotated by
/// `rotation` radians around that center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sprite {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        color: &'static str,
    },
    Rect {
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        rotation: f64,
        color: &'static str,
    },
}

/// A drawing target sized to the viewport.
pub trait Surface {
    fn clear(&mut self);
    fn draw(&mut self, sprite: Sprite);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Running,
    Finished,
}

/// Advance every particle by one frame and return the next frame counter.
#[must_use]
pub fn step(mut particles: Vec<Particle>, frame: u32) -> (Vec<Particle>, u32) {
    let phase = f64::from(frame) * 0.01;
    for p in &mut particles {
        p.y += p.fall_speed;
        p.x += (phase + p.tilt_angle).sin() * 2.0;
        p.tilt_angle += p.tilt_increment;
    }
    (particles, frame + 1)
}

/// One celebration run.
#[derive(Debug, Clone, PartialEq)]
pub struct Confetti {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    frame: u32,
}

impl Confetti {
    /// Allocate a fresh batch of `PARTICLE_COUNT` particles across `width`.
    pub fn launch<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(width, rng))
            .collect();
        Self {
            width,
            height,
            particles,
            frame: 0,
        }
    }

    /// Draw the current frame, then advance the simulation.
    ///
    /// The tick that exhausts the frame budget clears the surface and drops
    /// the particles. Ticks after that do nothing.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> FrameStatus {
        if self.is_finished() {
            return FrameStatus::Finished;
        }

        surface.clear();
        for particle in &self.particles {
            surface.draw(particle.sprite());
        }

        let particles = std::mem::take(&mut self.particles);
        let (particles, frame) = step(particles, self.frame);
        self.frame = frame;

        if self.is_finished() {
            surface.clear();
            return FrameStatus::Finished;
        }
        self.particles = particles;
        FrameStatus::Running
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.frame >= FRAME_BUDGET
    }

    #[must_use]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}
