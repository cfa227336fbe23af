use tinyvec::ArrayVec;

use crate::{
    constants::{HashValue, LmsLeafIdentifier, LmsTreeIdentifier, Seed, D_PBLC},
    hasher::HashChain,
    util::{seed_derive::SeedDerive, ustr::str32u},
};

use super::definitions::{LmotsPrivateKey, LmotsPublicKey};
use super::parameters::LmotsParameter;

pub fn generate_private_key<H: HashChain>(
    lms_tree_identifier: LmsTreeIdentifier,
    lms_leaf_identifier: LmsLeafIdentifier,
    seed: &Seed,
    lmots_parameter: LmotsParameter<H>,
) -> LmotsPrivateKey<H> {
    let mut key = ArrayVec::new();

    let mut seed_derive = SeedDerive::new(seed, &lms_tree_identifier);
    seed_derive.set_lms_leaf_identifier(str32u(&lms_leaf_identifier));
    seed_derive.set_child_seed(0);

    for _ in 0..lmots_parameter.get_hash_chain_count() {
        key.push(seed_derive.seed_derive::<H>(true));
    }

    let public_key = generate_public_key(
        &lms_tree_identifier,
        &lms_leaf_identifier,
        key.as_slice(),
        lmots_parameter,
    );

    LmotsPrivateKey {
        lms_tree_identifier,
        lms_leaf_identifier,
        key,
        public_key,
        lmots_parameter,
    }
}

fn generate_public_key<H: HashChain>(
    lms_tree_identifier: &LmsTreeIdentifier,
    lms_leaf_identifier: &LmsLeafIdentifier,
    key: &[HashValue],
    lmots_parameter: LmotsParameter<H>,
) -> LmotsPublicKey<H> {
    let max_hash_chain_length = lmots_parameter.get_max_hash_chain_length();

    let mut hasher = lmots_parameter.get_hasher();

    hasher.update(lms_tree_identifier);
    hasher.update(lms_leaf_identifier);
    hasher.update(&D_PBLC);

    let mut chain_hasher = lmots_parameter.get_hasher();
    let mut hash_chain_data = H::prepare_hash_chain_data(lms_tree_identifier, lms_leaf_identifier);

    for (i, chain_start) in key.iter().enumerate() {
        let chain_end = chain_hasher.do_hash_chain(
            &mut hash_chain_data,
            i as u16,
            chain_start.as_slice(),
            0,
            max_hash_chain_length,
        );
        hasher.update(chain_end.as_slice());
    }

    LmotsPublicKey {
        lms_tree_identifier: *lms_tree_identifier,
        lms_leaf_identifier: *lms_leaf_identifier,
        key: hasher.finalize(),
        lmots_parameter,
    }
}
