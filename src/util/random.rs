use rand::{rngs::OsRng, RngCore};

use crate::constants::Seed;

/// Draws a fresh master seed from the operating system.
pub fn generate_seed() -> Seed {
    let mut seed = Seed::default();
    OsRng.fill_bytes(&mut seed);
    seed
}
