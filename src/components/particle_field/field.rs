//! Ambient particle simulation behind the hero section.
//!
//! The field owns a fixed-size pool of particles that drift with a constant
//! velocity, bounce off the viewport edges, and slowly shrink to a floor
//! radius. The pool is never edited piecemeal: it is built in one batch and
//! rebuilt wholesale whenever the viewport changes size.

use rand::Rng;

use super::theme::{Color, ParticleStyle};

/// Accessibility preference read from `prefers-reduced-motion`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
	#[default]
	NoPreference,
	Reduce,
}

/// A single floating particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub color: Color,
}

impl Particle {
	fn random(style: &ParticleStyle, width: f64, height: f64, rng: &mut impl Rng) -> Self {
		let color = if rng.random::<f64>() < style.accent_ratio {
			style.accent_color
		} else {
			style.neutral_color
		};
		Self {
			x: uniform(rng, 0.0, width),
			y: uniform(rng, 0.0, height),
			vx: uniform(rng, -style.speed, style.speed),
			vy: uniform(rng, -style.speed, style.speed),
			radius: uniform(rng, style.radius_min, style.radius_max),
			color,
		}
	}
}

/// Sample from `[lo, hi)`; degenerates to `lo` for empty ranges instead of panicking.
fn uniform(rng: &mut impl Rng, lo: f64, hi: f64) -> f64 {
	lo + rng.random::<f64>() * (hi - lo).max(0.0)
}

/// Reflect `pos` back into `[0, limit]`, pointing `vel` inward.
fn bounce(pos: &mut f64, vel: &mut f64, limit: f64) {
	if *pos < 0.0 {
		*pos = 0.0;
		*vel = vel.abs();
	} else if *pos > limit {
		*pos = limit;
		*vel = -vel.abs();
	}
}

/// Manages the ambient background particles.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	style: ParticleStyle,
	motion: MotionPreference,
	width: f64,
	height: f64,
}

impl ParticleField {
	pub fn new(
		style: &ParticleStyle,
		width: f64,
		height: f64,
		motion: MotionPreference,
		rng: &mut impl Rng,
	) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			style: style.clone(),
			motion,
			width,
			height,
		};
		field.populate(rng);
		field
	}

	/// Number of particles a batch allocates under the current motion preference.
	pub fn target_count(&self) -> usize {
		match self.motion {
			MotionPreference::Reduce => 0,
			MotionPreference::NoPreference => self.style.count,
		}
	}

	/// Whether a frame loop has anything to draw.
	pub fn is_animated(&self) -> bool {
		!self.particles.is_empty()
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	fn populate(&mut self, rng: &mut impl Rng) {
		let count = self.target_count();
		self.particles.clear();
		self.particles.reserve(count);
		for _ in 0..count {
			self.particles
				.push(Particle::random(&self.style, self.width, self.height, rng));
		}
	}

	/// Advance every particle by one display frame.
	pub fn step(&mut self) {
		let (decay, floor) = (self.style.decay, self.style.radius_floor);
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.radius > floor {
				p.radius = (p.radius - decay).max(floor);
			}

			bounce(&mut p.x, &mut p.vx, self.width);
			bounce(&mut p.y, &mut p.vy, self.height);
		}
	}

	/// Throw the pool away and rebuild it for new bounds.
	pub fn reinitialize(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
		self.width = width;
		self.height = height;
		self.populate(rng);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn field(width: f64, height: f64, seed: u64) -> ParticleField {
		let mut rng = SmallRng::seed_from_u64(seed);
		ParticleField::new(
			&ParticleStyle::default(),
			width,
			height,
			MotionPreference::NoPreference,
			&mut rng,
		)
	}

	#[test]
	fn allocates_seventy_particles_by_default() {
		let f = field(1280.0, 720.0, 1);
		assert_eq!(f.particles.len(), 70);
		assert!(f.is_animated());
	}

	#[test]
	fn initial_values_respect_style_ranges() {
		let style = ParticleStyle::default();
		let f = field(800.0, 600.0, 7);
		for p in &f.particles {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((1.0..3.0).contains(&p.radius));
			assert!((-0.5..0.5).contains(&p.vx));
			assert!((-0.5..0.5).contains(&p.vy));
			assert!(p.color == style.neutral_color || p.color == style.accent_color);
		}
	}

	#[test]
	fn colors_lean_toward_neutral() {
		let style = ParticleStyle {
			count: 2000,
			..ParticleStyle::default()
		};
		let mut rng = SmallRng::seed_from_u64(99);
		let f = ParticleField::new(&style, 100.0, 100.0, MotionPreference::NoPreference, &mut rng);
		let accents = f
			.particles
			.iter()
			.filter(|p| p.color == style.accent_color)
			.count();
		// ~10% expected; wide margin keeps the test seed-independent.
		assert!(accents > 100 && accents < 350, "accents = {accents}");
	}

	#[test]
	fn reduced_motion_allocates_nothing() {
		let mut rng = SmallRng::seed_from_u64(3);
		let mut f = ParticleField::new(
			&ParticleStyle::default(),
			1024.0,
			768.0,
			MotionPreference::Reduce,
			&mut rng,
		);
		assert!(f.particles.is_empty());
		assert!(!f.is_animated());

		f.reinitialize(640.0, 480.0, &mut rng);
		assert!(f.particles.is_empty());
	}

	#[test]
	fn positions_stay_within_bounds() {
		for (w, h) in [(1.0, 1.0), (37.5, 900.0), (320.0, 240.0), (1920.0, 1080.0)] {
			let mut f = field(w, h, 42);
			for _ in 0..5_000 {
				f.step();
				for p in &f.particles {
					assert!((0.0..=w).contains(&p.x), "x = {} outside 0..={w}", p.x);
					assert!((0.0..=h).contains(&p.y), "y = {} outside 0..={h}", p.y);
				}
			}
		}
	}

	#[test]
	fn zero_sized_viewport_pins_particles_to_origin() {
		let mut f = field(0.0, 0.0, 5);
		f.step();
		for p in &f.particles {
			assert_eq!((p.x, p.y), (0.0, 0.0));
		}
	}

	#[test]
	fn radius_shrinks_monotonically_to_floor() {
		let mut f = field(500.0, 500.0, 11);
		let mut previous: Vec<f64> = f.particles.iter().map(|p| p.radius).collect();
		for _ in 0..400 {
			f.step();
			for (p, prev) in f.particles.iter().zip(&previous) {
				assert!(p.radius <= *prev);
				assert!(p.radius >= 0.2);
			}
			previous = f.particles.iter().map(|p| p.radius).collect();
		}
		// 400 frames at 0.01 is enough to bring even a 3.0 radius to the floor.
		assert!(f.particles.iter().all(|p| p.radius == 0.2));
	}

	#[test]
	fn velocity_magnitude_is_preserved_by_bounces() {
		let mut f = field(50.0, 50.0, 8);
		let speeds: Vec<(f64, f64)> = f.particles.iter().map(|p| (p.vx.abs(), p.vy.abs())).collect();
		for _ in 0..1_000 {
			f.step();
		}
		for (p, (vx, vy)) in f.particles.iter().zip(speeds) {
			assert_eq!(p.vx.abs(), vx);
			assert_eq!(p.vy.abs(), vy);
		}
	}

	#[test]
	fn reinitialize_rebuilds_pool_for_new_bounds() {
		let mut rng = SmallRng::seed_from_u64(21);
		let mut f = ParticleField::new(
			&ParticleStyle::default(),
			2000.0,
			2000.0,
			MotionPreference::NoPreference,
			&mut rng,
		);
		for _ in 0..300 {
			f.step();
		}
		f.reinitialize(100.0, 50.0, &mut rng);
		assert_eq!(f.particles.len(), 70);
		assert_eq!((f.width(), f.height()), (100.0, 50.0));
		for p in &f.particles {
			assert!(p.x < 100.0 && p.y < 50.0);
			// Fresh particles start at full size again.
			assert!(p.radius >= 1.0);
		}
	}

	#[test]
	fn degenerate_style_ranges_do_not_panic() {
		let style = ParticleStyle {
			radius_min: 2.0,
			radius_max: 2.0,
			speed: 0.0,
			..ParticleStyle::default()
		};
		let mut rng = SmallRng::seed_from_u64(0);
		let mut f = ParticleField::new(&style, 10.0, 10.0, MotionPreference::NoPreference, &mut rng);
		f.step();
		assert!(f.particles.iter().all(|p| p.vx == 0.0 && p.vy == 0.0));
	}
}
