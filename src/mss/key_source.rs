use zeroize::Zeroize;

use crate::{
    constants::{
        HashValue, LmsTreeIdentifier, Seed, D_TOPSEED, ILEN, SEED_LEN,
        SEED_SIGNATURE_RANDOMIZER_SEED, TOPSEED_D, TOPSEED_LEN, TOPSEED_SEED, TOPSEED_WHICH,
    },
    hasher::HashChain,
    lm_ots::{definitions::LmotsPrivateKey, generate_private_key, parameters::LmotsParameter},
    util::{seed_derive::SeedDerive, ustr::u32str},
};

/// Sequential source of the one-time keys of a single tree.
///
/// The working seed and the tree identifier are derived from the master seed
/// the same way the HSS reference implementation derives its top level tree.
/// `round` is the leaf whose key `next` hands out; every other key can be
/// derived by index without touching the round.
pub struct LeafKeySource<H: HashChain> {
    seed: Seed,
    lms_tree_identifier: LmsTreeIdentifier,
    lmots_parameter: LmotsParameter<H>,
    round: u32,
}

impl<H: HashChain> LeafKeySource<H> {
    pub fn new(master_seed: &Seed, lmots_parameter: LmotsParameter<H>) -> Self {
        let mut key_source = LeafKeySource {
            seed: Seed::default(),
            lms_tree_identifier: LmsTreeIdentifier::default(),
            lmots_parameter,
            round: 0,
        };
        key_source.init(master_seed, 0);
        key_source
    }

    /// Rederives the working seed and tree identifier from `master_seed` and
    /// resumes at leaf `round`.
    pub fn init(&mut self, master_seed: &Seed, round: u32) {
        let mut hash_preimage = [0u8; TOPSEED_LEN];

        hash_preimage[TOPSEED_D..TOPSEED_D + 2].copy_from_slice(&D_TOPSEED.to_be_bytes());
        hash_preimage[TOPSEED_SEED..TOPSEED_SEED + SEED_LEN].copy_from_slice(master_seed);

        let mut hasher = H::default();

        hasher.update(&hash_preimage);
        let mut top_seed = hasher.finalize_reset();
        hash_preimage[TOPSEED_SEED..TOPSEED_SEED + SEED_LEN].copy_from_slice(top_seed.as_slice());
        top_seed.as_mut_slice().zeroize();

        hash_preimage[TOPSEED_WHICH] = 0x01;
        hasher.update(&hash_preimage);
        let mut seed = hasher.finalize_reset();
        self.seed.copy_from_slice(seed.as_slice());
        seed.as_mut_slice().zeroize();

        hash_preimage[TOPSEED_WHICH] = 0x02;
        hasher.update(&hash_preimage);
        self.lms_tree_identifier
            .copy_from_slice(&hasher.finalize_reset()[..ILEN]);

        hash_preimage.zeroize();

        self.round = round;
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn lms_tree_identifier(&self) -> &LmsTreeIdentifier {
        &self.lms_tree_identifier
    }

    pub fn lmots_parameter(&self) -> LmotsParameter<H> {
        self.lmots_parameter
    }

    /// Hands out the key of the current round and moves on to the next leaf.
    pub fn next(&mut self) -> LmotsPrivateKey<H> {
        let private_key = self.derive(self.round);
        self.round += 1;
        private_key
    }

    pub fn derive(&self, round: u32) -> LmotsPrivateKey<H> {
        generate_private_key(
            self.lms_tree_identifier,
            u32str(round),
            &self.seed,
            self.lmots_parameter,
        )
    }

    pub fn signature_randomizer(&self, round: u32) -> HashValue {
        let mut derive = SeedDerive::new(&self.seed, &self.lms_tree_identifier);

        derive.set_lms_leaf_identifier(round);
        derive.set_child_seed(SEED_SIGNATURE_RANDOMIZER_SEED);

        derive.seed_derive::<H>(false)
    }
}

impl<H: HashChain> Drop for LeafKeySource<H> {
    fn drop(&mut self) {
        self.seed.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        hasher::sha256::Sha256_256, lm_ots::parameters::LmotsAlgorithm, util::ustr::str32u,
    };

    use super::LeafKeySource;

    fn key_source(seed: u8) -> LeafKeySource<Sha256_256> {
        let parameter = LmotsAlgorithm::LmotsW4.construct_parameter().unwrap();
        LeafKeySource::new(&[seed; 32], parameter)
    }

    #[test]
    fn next_follows_index_derivation() {
        let mut keys = key_source(1);

        for round in 0..4 {
            assert_eq!(keys.round(), round);
            let expected = keys.derive(round);
            let private_key = keys.next();

            assert_eq!(private_key.public_key, expected.public_key);
            assert_eq!(str32u(&private_key.lms_leaf_identifier), round);
        }
        assert_eq!(keys.round(), 4);
    }

    #[test]
    fn init_resumes_at_round() {
        let mut keys = key_source(1);
        let tree_identifier = *keys.lms_tree_identifier();
        let third = keys.derive(3);

        keys.init(&[1u8; 32], 3);

        assert_eq!(keys.round(), 3);
        assert_eq!(*keys.lms_tree_identifier(), tree_identifier);
        assert_eq!(keys.next().public_key, third.public_key);
    }

    #[test]
    fn derivation_depends_on_master_seed() {
        let first = key_source(1);
        let second = key_source(2);

        assert_ne!(first.lms_tree_identifier(), second.lms_tree_identifier());
        assert_ne!(first.derive(0).public_key.key, second.derive(0).public_key.key);
        assert_ne!(first.signature_randomizer(0), second.signature_randomizer(0));
        assert_ne!(first.signature_randomizer(0), first.signature_randomizer(1));
        assert_eq!(first.signature_randomizer(5).len(), 32);
    }
}
