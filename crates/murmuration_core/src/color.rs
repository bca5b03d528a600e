//! Heading angle to RGB.
//!
//! A fully saturated, full-value hue wheel: the circle is cut into six 60°
//! sectors and each channel is either off, on, or ramping linearly inside a
//! sector. The ramps meet at the sector seams, so the mapping is continuous
//! all the way round.

use murmuration_data::Rgb;
use std::f32::consts::{FRAC_PI_3, PI, TAU};

const SECTORS: usize = 6;
const MAX_CHANNEL: f32 = 255.0;

/// Maps a heading angle (radians, any range) to a color.
#[must_use]
pub fn heading_to_rgb(angle: f32) -> Rgb {
    let angle = angle.rem_euclid(TAU);
    let section = angle / FRAC_PI_3;
    // `angle` may round up to TAU, which would land one past the last sector
    let index = (section as usize).min(SECTORS - 1);
    let frac = (section - index as f32).clamp(0.0, 1.0);

    let falling = (MAX_CHANNEL * (1.0 - frac)).round() as u8;
    let rising = (MAX_CHANNEL * frac).round() as u8;
    let ramp = [u8::MAX, falling, 0, 0, rising, u8::MAX];

    Rgb::new(
        ramp[index],
        ramp[(index + 4) % SECTORS],
        ramp[(index + 2) % SECTORS],
    )
}

/// Color for a screen-space heading vector.
///
/// The angle is measured from screen-down (`+y`) toward screen-right and
/// offset by half a turn, so upward motion is red, rightward violet,
/// downward cyan and leftward yellow-green.
#[inline]
#[must_use]
pub fn heading_vector_to_rgb(hx: f32, hy: f32) -> Rgb {
    heading_to_rgb(hx.atan2(hy) + PI)
}
