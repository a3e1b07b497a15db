use rand::{Rng, RngCore};

/// Draw a value from `[min, max)`.
///
/// A degenerate or inverted range returns `min`, so fixed-value configs
/// (`min == max`) are legal rather than a panic.
pub fn roll_range(rng: &mut dyn RngCore, min: i32, max: i32) -> i32 {
    if min >= max { min } else { rng.random_range(min..max) }
}

/// Short prose for a force pool, used in location status blocks.
pub fn forces_to_string(strength: i32) -> String {
    let word = match strength {
        i32::MIN..=0 => "routed",
        1..=3 => "shattered",
        4..=6 => "battered",
        7..=9 => "committed",
        10..=14 => "strong",
        _ => "overwhelming",
    };
    format!("{word} ({strength})")
}
