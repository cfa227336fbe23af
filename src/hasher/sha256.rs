use digest::Digest;
use sha2::Sha256;

use crate::constants::HashValue;

use super::HashChain;

/**
 * Standard software implementation for [`HashChain`] based on [`sha2::Sha256`].
 * */
#[allow(non_camel_case_types)]
#[derive(Default, Clone)]
pub struct Sha256_256 {
    hasher: Sha256,
}

impl HashChain for Sha256_256 {
    const OUTPUT_SIZE: u16 = 32;

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.hasher, data);
    }

    fn chain(self, data: &[u8]) -> Self {
        Sha256_256 {
            hasher: Digest::chain_update(self.hasher, data),
        }
    }

    fn finalize(self) -> HashValue {
        let mut digest = HashValue::new();
        digest.extend_from_slice(self.hasher.finalize().as_slice());
        digest
    }

    fn finalize_reset(&mut self) -> HashValue {
        let mut digest = HashValue::new();
        digest.extend_from_slice(self.hasher.finalize_reset().as_slice());
        digest
    }
}

impl core::fmt::Debug for Sha256_256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Sha256_256")
    }
}

// Hasher state is irrelevant when comparing parameter sets.
impl PartialEq for Sha256_256 {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}
