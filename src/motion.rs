//! Timing and geometry helpers for the animated parts of the site.
//!
//! Everything here is pure so the components only wire values into
//! styles and timers.

use std::f64::consts::PI;

use crate::config::{HERO_FADE_DISTANCE, HERO_MIN_SCALE};

/// Ring radius in the counter's 200x200 view box (200 - 25 stroke) / 2.
pub const RING_RADIUS: f64 = 87.5;
pub const RING_STROKE: f64 = 25.0;

pub fn ring_circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

/// `stroke-dashoffset` for a ring filled to `progress` percent.
pub fn ring_dash_offset(progress: u32) -> f64 {
    let circumference = ring_circumference();
    circumference - f64::from(progress) / 100.0 * circumference
}

/// Value shown at `step` of a count-up of `steps` steps towards `target`.
pub fn step_value(target: u32, step: u32, steps: u32) -> u32 {
    if steps == 0 {
        return target;
    }
    let increment = f64::from(target) / f64::from(steps);
    let value = (increment * f64::from(step)).round() as u32;
    value.min(target)
}

/// Milliseconds between ticks when spreading `steps` ticks over `duration_ms`.
pub fn step_interval(duration_ms: u32, steps: u32) -> u32 {
    if steps == 0 {
        duration_ms
    } else {
        duration_ms / steps
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadlineToken {
    Word(String),
    Space(String),
}

/// Splits a headline into words and single whitespace characters.
pub fn headline_tokens(text: &str) -> Vec<HeadlineToken> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !word.is_empty() {
                tokens.push(HeadlineToken::Word(std::mem::take(&mut word)));
            }
            tokens.push(HeadlineToken::Space(ch.to_string()));
        } else {
            word.push(ch);
        }
    }
    if !word.is_empty() {
        tokens.push(HeadlineToken::Word(word));
    }
    tokens
}

/// Entry delay in seconds for character `char_index` of token `token_index`.
pub fn headline_char_delay(token_index: usize, char_index: usize) -> f64 {
    0.2 + (token_index + char_index) as f64 * 0.03
}

fn fade_fraction(scroll_y: f64) -> f64 {
    (scroll_y / HERO_FADE_DISTANCE).clamp(0.0, 1.0)
}

pub fn hero_opacity(scroll_y: f64) -> f64 {
    1.0 - fade_fraction(scroll_y)
}

pub fn hero_scale(scroll_y: f64) -> f64 {
    1.0 - fade_fraction(scroll_y) * (1.0 - HERO_MIN_SCALE)
}

/// Fraction of the document scrolled, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Keyframes that slide a strip left by one full copy of its items.
pub fn marquee_keyframes(name: &str, item_count: usize, stride_px: u32) -> String {
    let distance = item_count as u64 * u64::from(stride_px);
    format!(
        "@keyframes {name} {{ 0% {{ transform: translateX(0); }} 100% {{ transform: translateX(-{distance}px); }} }}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_steps_reach_target_exactly() {
        assert_eq!(step_value(50, 0, 60), 0);
        assert_eq!(step_value(50, 1, 60), 1);
        assert_eq!(step_value(50, 30, 60), 25);
        assert_eq!(step_value(50, 60, 60), 50);
        assert_eq!(step_value(27, 60, 60), 27);
        assert_eq!(step_value(27, 75, 60), 27);
        assert_eq!(step_value(40, 5, 0), 40);
    }

    #[test]
    fn counter_steps_never_decrease() {
        let mut last = 0;
        for step in 0..=60 {
            let value = step_value(27, step, 60);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn step_intervals_match_phase_lengths() {
        assert_eq!(step_interval(1500, 60), 25);
        assert_eq!(step_interval(1200, 60), 20);
    }

    #[test]
    fn dash_offset_spans_full_ring() {
        let circumference = ring_circumference();
        assert!((ring_dash_offset(0) - circumference).abs() < 1e-9);
        assert!(ring_dash_offset(100).abs() < 1e-9);
        assert!((ring_dash_offset(50) - circumference / 2.0).abs() < 1e-9);
    }

    #[test]
    fn headline_keeps_spaces_as_tokens() {
        let tokens = headline_tokens("Harnessing the power");
        assert_eq!(
            tokens,
            vec![
                HeadlineToken::Word("Harnessing".into()),
                HeadlineToken::Space(" ".into()),
                HeadlineToken::Word("the".into()),
                HeadlineToken::Space(" ".into()),
                HeadlineToken::Word("power".into()),
            ]
        );
        assert!(headline_tokens("").is_empty());
    }

    #[test]
    fn char_delays_stagger_by_token_and_position() {
        assert!((headline_char_delay(0, 0) - 0.2).abs() < 1e-9);
        assert!((headline_char_delay(2, 3) - 0.35).abs() < 1e-9);
    }

    #[test]
    fn hero_fades_over_first_three_hundred_pixels() {
        assert_eq!(hero_opacity(0.0), 1.0);
        assert!((hero_opacity(150.0) - 0.5).abs() < 1e-9);
        assert_eq!(hero_opacity(900.0), 0.0);
        assert_eq!(hero_scale(0.0), 1.0);
        assert!((hero_scale(300.0) - 0.95).abs() < 1e-9);
        assert!((hero_scale(-40.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn scroll_progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert!((scroll_progress(1000.0, 3000.0, 1000.0) - 0.5).abs() < 1e-9);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn marquee_moves_one_copy_of_the_strip() {
        let css = marquee_keyframes("scroll-left", 8, 196);
        assert!(css.starts_with("@keyframes scroll-left {"));
        assert!(css.contains("translateX(-1568px)"));
        assert!(marquee_keyframes("scroll-videos", 6, 404).contains("translateX(-2424px)"));
    }
}
