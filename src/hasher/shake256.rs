use sha3::{
    digest::{ExtendableOutput, ExtendableOutputReset, Update, XofReader},
    Shake256,
};

use crate::constants::HashValue;

use super::HashChain;

/**
 * Extension of [`sha3::Shake256`] with a fixed 32 byte output, which can be passed into the library,
 * as it implements the [`HashChain`] trait.
 * */
#[allow(non_camel_case_types)]
#[derive(Default, Clone)]
pub struct Shake256_256 {
    hasher: Shake256,
}

impl HashChain for Shake256_256 {
    const OUTPUT_SIZE: u16 = 32;

    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn chain(self, data: &[u8]) -> Self {
        Shake256_256 {
            hasher: self.hasher.chain(data),
        }
    }

    fn finalize(self) -> HashValue {
        let mut digest = [0u8; Self::OUTPUT_SIZE as usize];
        self.hasher.finalize_xof().read(&mut digest);
        HashValue::from(digest)
    }

    fn finalize_reset(&mut self) -> HashValue {
        let mut digest = [0u8; Self::OUTPUT_SIZE as usize];
        self.hasher.finalize_xof_reset().read(&mut digest);
        HashValue::from(digest)
    }
}

impl core::fmt::Debug for Shake256_256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Shake256_256")
    }
}

// Hasher state is irrelevant when comparing parameter sets.
impl PartialEq for Shake256_256 {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}
