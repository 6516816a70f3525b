//! Starfield particle animator
//!
//! A fixed-size field of drifting, twinkling points. The whole particle set
//! is regenerated on every resize; nothing survives a resize.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::config::StarfieldConfig;
use super::surface::{DrawSurface, Rgba};

/// Opacity band the twinkle reflects inside
pub const MIN_OPACITY: f64 = 0.2;
pub const MAX_OPACITY: f64 = 1.0;

/// Twinkle rate range (opacity change per frame)
pub const MIN_TWINKLE_RATE: f64 = 0.005;
pub const MAX_TWINKLE_RATE: f64 = 0.025;

/// Slowest drift, the configured speed is added on top
pub const BASE_DRIFT: f64 = 0.1;

/// Halo radius relative to the core radius
const GLOW_SCALE: f64 = 2.5;
/// Halo alpha relative to the core opacity
const GLOW_ALPHA: f64 = 0.2;

/// A single star
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
    /// Downward drift per frame
    pub speed: f64,
    pub twinkle_rate: f64,
    /// +1.0 or -1.0
    pub twinkle_dir: f64,
}

impl Particle {
    fn random<R: Rng>(rng: &mut R, width: f64, height: f64, config: &StarfieldConfig) -> Self {
        Self {
            x: uniform(rng, 0.0, width),
            y: uniform(rng, 0.0, height),
            radius: uniform(rng, config.min_size, config.max_size),
            opacity: rng.gen::<f64>(),
            speed: uniform(rng, BASE_DRIFT, BASE_DRIFT + config.speed),
            twinkle_rate: uniform(rng, MIN_TWINKLE_RATE, MAX_TWINKLE_RATE),
            twinkle_dir: if rng.gen::<bool>() { 1.0 } else { -1.0 },
        }
    }

    /// Advance opacity one step. Leaving the band points the direction back
    /// into it; the out-of-band value stands for the current frame.
    fn twinkle(&mut self) {
        self.opacity += self.twinkle_rate * self.twinkle_dir;
        if self.opacity > MAX_OPACITY {
            self.twinkle_dir = -1.0;
        } else if self.opacity < MIN_OPACITY {
            self.twinkle_dir = 1.0;
        }
    }

    /// Advance position one step, wrapping to the top past `height`
    fn drift<R: Rng>(&mut self, rng: &mut R, width: f64, height: f64) {
        self.y += self.speed;
        if self.y > height {
            self.y = 0.0;
            self.x = uniform(rng, 0.0, width);
        }
    }
}

/// Uniform sample over `[lo, hi)`. Degenerate ranges return `lo`.
fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return lo;
    }
    lo + rng.gen::<f64>() * (hi - lo)
}

/// Owns the particle set and the frame loop state
pub struct Starfield {
    config: StarfieldConfig,
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: SmallRng,
    /// Checked on every tick; cleared by `stop` or reduced motion
    running: bool,
    frames: u64,
}

impl Starfield {
    pub fn new(config: StarfieldConfig, rng: SmallRng) -> Self {
        Self {
            config,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng,
            running: false,
            frames: 0,
        }
    }

    /// Seeded from OS / browser entropy
    pub fn from_entropy(config: StarfieldConfig) -> Self {
        Self::new(config, SmallRng::from_entropy())
    }

    /// Take a new surface size and regenerate every particle
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        debug!(width = self.width, height = self.height, "Starfield resized");
        self.populate();
    }

    /// Replace the particle set with `count` fresh particles
    pub fn populate(&mut self) {
        let (width, height) = (self.width, self.height);
        let config = &self.config;
        let rng = &mut self.rng;

        self.particles = (0..config.count)
            .map(|_| Particle::random(rng, width, height, config))
            .collect();

        trace!(count = self.particles.len(), "Starfield populated");
    }

    /// Advance every particle one frame and render it
    pub fn step_and_draw<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            p.twinkle();
            p.drift(&mut self.rng, width, height);
        }
        self.draw(surface);
    }

    /// Render the current state without advancing it
    pub fn draw<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.width, self.height);

        let color = self.config.color;
        for p in &self.particles {
            if p.radius > self.config.glow_threshold {
                surface.fill_circle(
                    p.x,
                    p.y,
                    p.radius * GLOW_SCALE,
                    Rgba::new(color, p.opacity * GLOW_ALPHA),
                );
            }
            surface.fill_circle(p.x, p.y, p.radius, Rgba::new(color, p.opacity));
        }

        self.frames += 1;
    }

    /// Begin animating. Returns whether the host should schedule frames.
    ///
    /// With `reduced_motion` a single static frame is drawn and the loop
    /// never starts.
    pub fn start<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, reduced_motion: bool) -> bool {
        if reduced_motion {
            debug!("Reduced motion preferred, drawing a single static frame");
            self.running = false;
            self.draw(surface);
            return false;
        }
        self.running = true;
        true
    }

    /// One scheduled frame. Returns whether to schedule the next one.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.running {
            return false;
        }
        self.step_and_draw(surface);
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Frames rendered so far, static ones included
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::RecordingSurface;

    fn field(seed: u64) -> Starfield {
        Starfield::new(StarfieldConfig::default(), SmallRng::seed_from_u64(seed))
    }

    #[test]
    fn test_populate_within_bounds() {
        let mut sf = field(1);
        sf.resize(800.0, 600.0);

        let config = StarfieldConfig::default();
        assert_eq!(sf.particles().len(), 150);
        for p in sf.particles() {
            assert!(p.x >= 0.0 && p.x < 800.0, "x out of bounds: {}", p.x);
            assert!(p.y >= 0.0 && p.y < 600.0, "y out of bounds: {}", p.y);
            assert!(p.radius >= config.min_size && p.radius <= config.max_size);
            assert!(p.opacity >= 0.0 && p.opacity <= 1.0);
            assert!(p.speed >= BASE_DRIFT && p.speed <= BASE_DRIFT + config.speed);
            assert!(p.twinkle_rate >= MIN_TWINKLE_RATE && p.twinkle_rate <= MAX_TWINKLE_RATE);
            assert!(p.twinkle_dir == 1.0 || p.twinkle_dir == -1.0);
        }
    }

    #[test]
    fn test_resize_regenerates_all_particles() {
        let mut sf = field(2);
        sf.resize(800.0, 600.0);
        let before = sf.particles().to_vec();

        sf.resize(400.0, 300.0);
        assert_eq!(sf.particles().len(), 150);
        assert_eq!(sf.size(), (400.0, 300.0));
        for p in sf.particles() {
            assert!(!before.contains(p), "particle survived resize");
            assert!(p.x < 400.0 && p.y < 300.0);
        }
    }

    #[test]
    fn test_zero_sized_surface() {
        let mut sf = field(3);
        sf.resize(0.0, 0.0);
        assert_eq!(sf.particles().len(), 150);

        let mut surface = RecordingSurface::new();
        sf.step_and_draw(&mut surface);
        for p in sf.particles() {
            assert_eq!(p.x, 0.0);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_twinkle_reflects_at_upper_bound() {
        let mut p = Particle {
            x: 0.0,
            y: 0.0,
            radius: 1.0,
            opacity: 0.99,
            speed: 0.1,
            twinkle_rate: 0.02,
            twinkle_dir: 1.0,
        };

        p.twinkle();
        // Out of band for exactly this frame, not clamped
        assert!((p.opacity - 1.01).abs() < 1e-9);
        assert_eq!(p.twinkle_dir, -1.0);

        p.twinkle();
        assert!((p.opacity - 0.99).abs() < 1e-9);
        assert_eq!(p.twinkle_dir, -1.0);
    }

    #[test]
    fn test_twinkle_reflects_at_lower_bound() {
        let mut p = Particle {
            x: 0.0,
            y: 0.0,
            radius: 1.0,
            opacity: 0.21,
            speed: 0.1,
            twinkle_rate: 0.02,
            twinkle_dir: -1.0,
        };

        p.twinkle();
        assert!(p.opacity < MIN_OPACITY);
        assert_eq!(p.twinkle_dir, 1.0);

        p.twinkle();
        assert!(p.opacity >= MIN_OPACITY);
    }

    #[test]
    fn test_opacity_bounce_property() {
        let mut sf = field(4);
        sf.resize(800.0, 600.0);
        let mut surface = RecordingSurface::new();

        // Long enough for particles seeded below the band to climb into it
        for _ in 0..200 {
            sf.step_and_draw(&mut surface);
        }

        let in_band = |o: f64| (MIN_OPACITY..=MAX_OPACITY).contains(&o);
        let mut prev: Vec<bool> = sf.particles().iter().map(|p| in_band(p.opacity)).collect();

        for _ in 0..1000 {
            sf.step_and_draw(&mut surface);
            for (i, p) in sf.particles().iter().enumerate() {
                assert!(p.opacity >= MIN_OPACITY - MAX_TWINKLE_RATE);
                assert!(p.opacity <= MAX_OPACITY + MAX_TWINKLE_RATE);
                let now = in_band(p.opacity);
                assert!(prev[i] || now, "particle {} out of band for two frames", i);
                prev[i] = now;
            }
        }
    }

    #[test]
    fn test_startup_climb_into_band_is_bounded() {
        // A particle seeded below the band may take one step further down
        // before reflecting, then climbs at no less than MIN_TWINKLE_RATE.
        // One extra frame covers rounding in the accumulated steps.
        let bound = (MIN_OPACITY / MIN_TWINKLE_RATE).ceil() as usize + 3;
        let mut surface = RecordingSurface::new();

        for seed in 0..20 {
            let mut sf = field(seed);
            sf.resize(800.0, 600.0);
            let count = sf.particles().len();

            let mut entered: Vec<Option<usize>> = sf
                .particles()
                .iter()
                .map(|p| (p.opacity >= MIN_OPACITY).then_some(0))
                .collect();

            for frame in 1..=bound {
                sf.step_and_draw(&mut surface);
                for (i, p) in sf.particles().iter().enumerate() {
                    assert!(p.opacity >= -MAX_TWINKLE_RATE, "seed {} particle {}", seed, i);
                    if entered[i].is_none() && p.opacity >= MIN_OPACITY {
                        entered[i] = Some(frame);
                    }
                }
            }

            let late = entered.iter().filter(|e| e.is_none()).count();
            assert_eq!(late, 0, "seed {}: {} of {} particles still below band after {} frames",
                seed, late, count, bound);
        }
    }

    #[test]
    fn test_drift_wraps_to_top() {
        let mut sf = field(5);
        sf.resize(800.0, 600.0);
        let mut surface = RecordingSurface::new();

        let mut wrapped = 0;
        for _ in 0..3000 {
            let before: Vec<f64> = sf.particles().iter().map(|p| p.y).collect();
            sf.step_and_draw(&mut surface);
            for (p, y0) in sf.particles().iter().zip(before) {
                assert!(p.y >= 0.0 && p.y <= 600.0);
                assert!(p.x >= 0.0 && p.x < 800.0);
                if p.y < y0 {
                    assert_eq!(p.y, 0.0);
                    wrapped += 1;
                }
            }
        }
        assert!(wrapped > 0, "no particle wrapped");
    }

    #[test]
    fn test_glow_for_large_particles() {
        let mut sf = field(6);
        sf.resize(800.0, 600.0);
        let mut surface = RecordingSurface::new();
        sf.draw(&mut surface);

        let large = sf
            .particles()
            .iter()
            .filter(|p| p.radius > sf.config().glow_threshold)
            .count();
        assert!(large > 0);
        assert_eq!(surface.circles.len(), 150 + large);

        // Halo comes first, larger and fainter than its core
        let halo = surface
            .circles
            .windows(2)
            .find(|w| w[0].x == w[1].x && w[0].y == w[1].y && w[0].radius > w[1].radius)
            .expect("no halo drawn");
        assert!(halo[0].color.alpha < halo[1].color.alpha || halo[1].color.alpha == 0.0);
    }

    #[test]
    fn test_reduced_motion_renders_once() {
        let mut sf = field(7);
        sf.resize(800.0, 600.0);
        let mut surface = RecordingSurface::new();

        assert!(!sf.start(&mut surface, true));
        assert_eq!(surface.frames, 1);
        assert!(!sf.is_running());

        // A stray tick must not render
        assert!(!sf.tick(&mut surface));
        assert_eq!(surface.frames, 1);
        assert_eq!(sf.frame_count(), 1);
    }

    #[test]
    fn test_reduced_motion_static_frame_per_resize() {
        let mut sf = field(10);
        sf.resize(800.0, 600.0);
        let mut surface = RecordingSurface::new();
        assert!(!sf.start(&mut surface, true));

        // The canvas is wiped by a resize, so the host redraws once per resize
        for (i, (w, h)) in [(1024.0, 768.0), (640.0, 480.0)].into_iter().enumerate() {
            sf.resize(w, h);
            sf.draw(&mut surface);
            assert_eq!(surface.frames, i + 2);
            assert!(!sf.is_running());
            assert!(!sf.tick(&mut surface));
            assert_eq!(surface.frames, i + 2);
        }
    }

    #[test]
    fn test_running_loop_start_stop() {
        let mut sf = field(8);
        sf.resize(800.0, 600.0);
        let mut surface = RecordingSurface::new();

        assert!(sf.start(&mut surface, false));
        assert_eq!(surface.frames, 0);

        for _ in 0..10 {
            assert!(sf.tick(&mut surface));
        }
        assert_eq!(surface.frames, 10);

        sf.stop();
        assert!(!sf.tick(&mut surface));
        assert_eq!(surface.frames, 10);
    }

    #[test]
    fn test_same_seed_same_field() {
        let mut a = field(9);
        let mut b = field(9);
        a.resize(320.0, 240.0);
        b.resize(320.0, 240.0);
        assert_eq!(a.particles(), b.particles());
    }
}
