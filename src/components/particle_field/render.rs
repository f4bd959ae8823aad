//! Canvas rendering for the particle field.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;

/// Clears the surface and draws every particle as a filled circle.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	for p in &field.particles {
		ctx.set_fill_style_str(&p.color.to_css());
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}
