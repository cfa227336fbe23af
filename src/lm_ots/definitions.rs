use tinyvec::ArrayVec;
use zeroize::Zeroize;

use crate::{
    constants::{HashValue, LmsLeafIdentifier, LmsTreeIdentifier, MAX_HASH_CHAIN_COUNT},
    hasher::HashChain,
};

use super::parameters::LmotsParameter;

#[derive(Debug, Clone, PartialEq)]
pub struct LmotsPrivateKey<H: HashChain> {
    pub lms_tree_identifier: LmsTreeIdentifier,
    pub lms_leaf_identifier: LmsLeafIdentifier,
    pub key: ArrayVec<[HashValue; MAX_HASH_CHAIN_COUNT]>, // [x[0], x[1], x[2], ..., x[p-1]]
    pub public_key: LmotsPublicKey<H>,
    pub lmots_parameter: LmotsParameter<H>,
}

impl<H: HashChain> Drop for LmotsPrivateKey<H> {
    fn drop(&mut self) {
        for chain_start in self.key.iter_mut() {
            chain_start.as_mut_slice().zeroize();
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LmotsPublicKey<H: HashChain> {
    pub lms_tree_identifier: LmsTreeIdentifier,
    pub lms_leaf_identifier: LmsLeafIdentifier,
    pub key: HashValue,
    pub lmots_parameter: LmotsParameter<H>,
}
