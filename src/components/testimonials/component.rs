//! Leptos component for the auto-advancing testimonial carousel.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use super::carousel::{Carousel, Testimonial};

/// Milliseconds between automatic slide changes.
const AUTO_ADVANCE_MS: u32 = 7_000;

/// Sliding carousel of client quotes with arrows and dot navigation.
///
/// Advances on its own every seven seconds; manual navigation restarts the
/// countdown. Renders nothing when there are no testimonials.
#[component]
pub fn Testimonials(#[prop(into)] items: Vec<Testimonial>) -> impl IntoView {
	if items.is_empty() {
		return ().into_any();
	}

	let count = items.len();
	let carousel = RwSignal::new(Carousel::new(count));
	let ticker = StoredValue::new_local(None::<Interval>);

	let restart = move || {
		ticker.set_value(Some(Interval::new(AUTO_ADVANCE_MS, move || {
			carousel.try_update(Carousel::next);
		})));
	};
	restart();
	on_cleanup(move || {
		ticker.try_update_value(|t| t.take());
	});

	let navigate = move |step: fn(&mut Carousel)| {
		carousel.update(step);
		restart();
	};

	let slides = items
		.into_iter()
		.map(|t| {
			view! {
				<div class="testimonials__slide">
					<p class="testimonials__quote">"\u{201c}" {t.quote} "\u{201d}"</p>
					<h3 class="testimonials__author">{t.author}</h3>
					<p class="testimonials__company">{t.company}</p>
				</div>
			}
		})
		.collect::<Vec<_>>();

	let dots = (0..count)
		.map(|i| {
			view! {
				<button
					class="testimonials__dot"
					class:testimonials__dot--active=move || carousel.with(|c| c.current() == i)
					aria-label=format!("Go to testimonial {}", i + 1)
					on:click=move |_| {
						carousel.update(|c| c.go_to(i));
						restart();
					}
				></button>
			}
		})
		.collect::<Vec<_>>();

	view! {
		<div class="testimonials">
			<div class="testimonials__viewport">
				<div
					class="testimonials__track"
					style:transform=move || {
						format!("translateX(-{}%)", carousel.with(Carousel::current) * 100)
					}
				>
					{slides}
				</div>
			</div>
			<button
				class="testimonials__arrow testimonials__arrow--prev"
				aria-label="Previous testimonial"
				on:click=move |_| navigate(Carousel::prev)
			>
				"‹"
			</button>
			<button
				class="testimonials__arrow testimonials__arrow--next"
				aria-label="Next testimonial"
				on:click=move |_| navigate(Carousel::next)
			>
				"›"
			</button>
			<div class="testimonials__dots">{dots}</div>
		</div>
	}
	.into_any()
}
