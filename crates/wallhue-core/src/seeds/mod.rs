//! Seed color selection
//!
//! Scores every histogram color by chroma plus hue prominence and greedily
//! picks up to three hue-diverse representatives. Pure function over its
//! input; selection order is primary, secondary, tertiary.


use crate::color::{argb_to_lch, Lch};
use crate::histogram::ColorHistogram;

/// Maximum number of seed colors returned.
pub const MAX_SEED_COLORS: usize = 3;

/// Minimum circular hue distance, in degrees, between any two seeds.
pub const MIN_HUE_SEPARATION: f32 = 15.0;

/// Half-width, in degrees, of the hue window used for prominence.
const HUE_WINDOW: i32 = 15;

/// Select up to three seed colors representing the histogram.
///
/// Each color is scored as `chroma + 100 * hueProportion`, where the hue
/// proportion is the population fraction whose hue falls within 15 degrees
/// of the color's own hue. Candidates are walked in descending score order
/// and accepted only when their hue stays at least [`MIN_HUE_SEPARATION`]
/// degrees away from every already-accepted seed.
///
/// Equal scores are broken by ascending numeric color value. An empty
/// histogram, or one whose populations sum to zero, yields an empty list.
pub fn select_seeds(histogram: &ColorHistogram) -> Vec<u32> {
    let total = histogram.total_population();
    if total == 0 {
        return Vec::new();
    }

    // Perceptual coordinates, in ascending color order. Keeping this order
    // and sorting stably below fixes the tie-break for equal scores.
    let candidates: Vec<(u32, Lch)> = histogram
        .iter()
        .map(|(color, _)| (color, argb_to_lch(color)))
        .collect();

    let proportions = hue_proportions(&candidates, histogram, total);

    let mut scored: Vec<(u32, Lch, f32)> = candidates
        .into_iter()
        .map(|(color, lch)| {
            let prominence = hue_window_proportion(&proportions, lch.hue);
            (color, lch, lch.chroma + prominence * 100.0)
        })
        .collect();
    scored.sort_by(|a, b| b.2.total_cmp(&a.2));

    let mut seeds = Vec::with_capacity(MAX_SEED_COLORS);
    let mut seed_hues: Vec<f32> = Vec::with_capacity(MAX_SEED_COLORS);
    for (color, lch, _score) in scored {
        if seeds.len() == MAX_SEED_COLORS {
            break;
        }
        let hue_diverse = seed_hues
            .iter()
            .all(|&accepted| hue_distance(lch.hue, accepted) >= MIN_HUE_SEPARATION);
        if hue_diverse {
            seeds.push(color);
            seed_hues.push(lch.hue);
        }
    }
    seeds
}

/// Circular distance between two hues, in degrees (0 to 180).
fn hue_distance(a: f32, b: f32) -> f32 {
    180.0 - ((a - b).abs() - 180.0).abs()
}

/// Population fraction per integer hue degree.
fn hue_proportions(
    candidates: &[(u32, Lch)],
    histogram: &ColorHistogram,
    total: u64,
) -> [f32; 360] {
    let mut proportions = [0.0f32; 360];
    for (color, lch) in candidates {
        let population = histogram.population(*color);
        let bucket = wrap_degrees(lch.hue.round() as i32);
        proportions[bucket] += population as f32 / total as f32;
    }
    proportions
}

/// Sum of hue proportions in the window `[hue - 15, hue + 15)`, wrapping
/// circularly at 0/360.
fn hue_window_proportion(proportions: &[f32; 360], hue: f32) -> f32 {
    let center = hue.round() as i32;
    let mut sum = 0.0;
    for degree in (center - HUE_WINDOW)..(center + HUE_WINDOW) {
        sum += proportions[wrap_degrees(degree)];
    }
    sum
}

/// Wrap a degree value into [0, 360).
fn wrap_degrees(degrees: i32) -> usize {
    (((degrees % 360) + 360) % 360) as usize
}
