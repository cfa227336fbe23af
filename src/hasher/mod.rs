use core::fmt::Debug;

use crate::constants::{winternitz_chain::*, HashValue};

pub mod sha256;
pub mod shake256;

pub struct HashChainData([u8; ITER_MAX_LEN]);

/**
 *
 * This trait is used inside the library to generate hashes. Standard software implementations exist as
 * [`sha256::Sha256_256`] and [`shake256::Shake256_256`].
 * It can be used to outsource calculations to hardware accelerators.
 *
 *
 * Requires PartialEq, although it makes no sense to compare two hashers.
 * But with that we can derive PartialEq for the parameter and signature types.
 * */
pub trait HashChain: Debug + Default + Clone + PartialEq + Send + Sync {
    const OUTPUT_SIZE: u16;

    fn update(&mut self, data: &[u8]);
    fn chain(self, data: &[u8]) -> Self;
    fn finalize(self) -> HashValue;
    fn finalize_reset(&mut self) -> HashValue;

    fn prepare_hash_chain_data(
        lms_tree_identifier: &[u8],
        lms_leaf_identifier: &[u8],
    ) -> HashChainData {
        let mut hash_chain_data = HashChainData([0u8; ITER_MAX_LEN]);
        hash_chain_data.0[ITER_I..ITER_Q].copy_from_slice(lms_tree_identifier);
        hash_chain_data.0[ITER_Q..ITER_K].copy_from_slice(lms_leaf_identifier);
        hash_chain_data
    }

    fn do_hash_chain(
        &mut self,
        hash_chain_data: &mut HashChainData,
        hash_chain_id: u16,
        initial_value: &[u8],
        from: usize,
        to: usize,
    ) -> HashValue {
        let temp = &mut hash_chain_data.0[..iter_len(Self::OUTPUT_SIZE as usize)];

        temp[ITER_K..ITER_J].copy_from_slice(&hash_chain_id.to_be_bytes());
        temp[ITER_PREV..].copy_from_slice(initial_value);

        self.do_actual_hash_chain(temp, from, to);

        let mut result = HashValue::new();
        result.extend_from_slice(&temp[ITER_PREV..]);
        result
    }

    fn do_actual_hash_chain(&mut self, temp: &mut [u8], from: usize, to: usize) {
        for j in from..to {
            temp[ITER_J] = j as u8;
            // We assume that the hasher is fresh initialized on the first round
            self.update(temp);
            let temp_hash = self.finalize_reset();
            temp[ITER_PREV..].copy_from_slice(temp_hash.as_slice());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{sha256::Sha256_256, shake256::Shake256_256, HashChain};

    macro_rules! generate_test {
        ($name:ident, $hasher:ty) => {
            #[test]
            fn $name() {
                let mut hasher = <$hasher>::default();
                hasher.update(b"merkle");
                hasher.update(b" tree");
                let streamed = hasher.finalize_reset();

                let chained = <$hasher>::default().chain(b"merkle tree").finalize();

                assert_eq!(streamed.len(), <$hasher>::OUTPUT_SIZE as usize);
                assert_eq!(streamed, chained);

                // finalize_reset must leave a fresh hasher behind
                hasher.update(b"merkle tree");
                assert_eq!(hasher.finalize(), chained);
            }
        };
    }

    generate_test!(sha256_streaming_matches_chain, Sha256_256);
    generate_test!(shake256_streaming_matches_chain, Shake256_256);

    #[test]
    fn hash_chain_is_composable() {
        let initial = [7u8; 32];
        let mut hasher = Sha256_256::default();

        let mut data = Sha256_256::prepare_hash_chain_data(&[1u8; 16], &[0, 0, 0, 3]);
        let full = hasher.do_hash_chain(&mut data, 5, &initial, 0, 4);

        let mut data = Sha256_256::prepare_hash_chain_data(&[1u8; 16], &[0, 0, 0, 3]);
        let half = hasher.do_hash_chain(&mut data, 5, &initial, 0, 2);
        let mut data = Sha256_256::prepare_hash_chain_data(&[1u8; 16], &[0, 0, 0, 3]);
        let rest = hasher.do_hash_chain(&mut data, 5, half.as_slice(), 2, 4);

        assert_eq!(full, rest);
        assert_ne!(full.as_slice(), &initial[..]);
    }
}
