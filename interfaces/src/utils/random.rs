use rand::{rngs::StdRng, SeedableRng as _};

/// Source of randomness for one run: repeat counts and question picks.
/// Tests seed their own `StdRng` and hand it to the run instead.
pub fn default_rng() -> StdRng {
    StdRng::from_entropy()
}
