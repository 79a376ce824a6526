//! Order randomization for the portfolio grid

use rand::Rng;

/// Return a uniformly shuffled copy of `items` (Fisher-Yates)
///
/// The input is left untouched. Pass a seeded RNG for reproducible output.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
