//! Constructive Person/Place alternation.
//!
//! This is a heuristic, not a solver: it produces a best-effort ordering that
//! opens on a Place and alternates categories where the partition sizes allow.
//! When it cannot apply, callers fall back to a plain shuffle.
use crate::clue::{Category, Clue};
use crate::shuffle::shuffle;
use rand::Rng;

/// Build an alternating ordering of the randomizable pool.
///
/// Returns `None` when the pool has no Place clues (a Place opening is
/// impossible) or fewer than two typed clues.
pub fn build_alternating<R: Rng + ?Sized>(pool: &[Clue], rng: &mut R) -> Option<Vec<Clue>> {
    let mut people: Vec<Clue> = Vec::new();
    let mut places: Vec<Clue> = Vec::new();
    let mut untyped: Vec<Clue> = Vec::new();
    for clue in pool {
        match clue.category {
            Some(Category::Person) => people.push(clue.clone()),
            Some(Category::Place) => places.push(clue.clone()),
            None => untyped.push(clue.clone()),
        }
    }

    if places.is_empty() {
        return None;
    }
    if people.len() + places.len() < 2 {
        return None;
    }

    shuffle(&mut people, rng);
    shuffle(&mut places, rng);
    shuffle(&mut untyped, rng);

    let mut result = interleave(people, places);
    prefer_place_second_to_last(&mut result);

    for clue in untyped {
        let pos = rng.gen_range(1..=result.len());
        result.insert(pos, clue);
    }
    Some(result)
}

/// Alternate Place/Person starting with a Place, draining whichever side
/// outlasts the other.
fn interleave(people: Vec<Clue>, places: Vec<Clue>) -> Vec<Clue> {
    let total = people.len() + places.len();
    let mut people = people.into_iter();
    let mut places = places.into_iter();
    let mut result = Vec::with_capacity(total);
    let mut want = Category::Place;
    while result.len() < total {
        let next = match want {
            Category::Place => places.next().or_else(|| people.next()),
            Category::Person => people.next().or_else(|| places.next()),
        };
        let Some(clue) = next else {
            break;
        };
        want = match clue.category {
            Some(Category::Place) => Category::Person,
            _ => Category::Place,
        };
        result.push(clue);
    }
    result
}

/// Swap the first non-opening Place into the second-to-last slot when that
/// slot holds a Person.
fn prefer_place_second_to_last(result: &mut [Clue]) {
    if result.len() < 2 {
        return;
    }
    let target = result.len() - 2;
    if !result[target].is(Category::Person) {
        return;
    }
    if let Some(idx) = (1..target).find(|&idx| result[idx].is(Category::Place)) {
        result.swap(idx, target);
    }
}
