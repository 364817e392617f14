//! Randomized list ordering with staggered entry animation.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Delay step between consecutive link items, in seconds.
pub const LINK_STAGGER_S: f64 = 0.1;
/// Delay step between consecutive streamer profiles, in seconds.
pub const PROFILE_STAGGER_S: f64 = 0.2;

/// In-place Fisher–Yates shuffle: walk `i` down from the last index and swap
/// with a uniform `j` in `0..=i`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// An item placed at its shuffled position with its animation delay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Staggered<T> {
    pub item: T,
    pub delay_s: f64,
}

/// Shuffle `items` and assign each an `index * step_s` animation delay.
pub fn staggered_order<T, R: Rng + ?Sized>(
    mut items: Vec<T>,
    step_s: f64,
    rng: &mut R,
) -> Vec<Staggered<T>> {
    fisher_yates(&mut items, rng);
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Staggered {
            item,
            delay_s: index as f64 * step_s,
        })
        .collect()
}
