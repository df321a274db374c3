use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly permute `items` in place (Fisher-Yates).
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Return a shuffled copy, leaving the source order untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(&mut out, rng);
    out
}
