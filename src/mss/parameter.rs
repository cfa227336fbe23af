use crate::{
    constants::{MAX_TREE_HEIGHT, MIN_TREE_HEIGHT},
    error::Error,
    hasher::HashChain,
    lm_ots::parameters::{LmotsAlgorithm, LmotsParameter},
};

/**
 * Specify `Winternitz Parameter` ([`LmotsAlgorithm`]) and `Tree Height` of a Merkle tree.
 * The tree signs `2^tree_height` messages. Passed to the [`crate::keygen`] function.
 * */
#[derive(Debug, Clone, PartialEq)]
pub struct MssParameter<H: HashChain> {
    lmots_parameter: LmotsParameter<H>,
    tree_height: u32,
}

impl<H: HashChain> Copy for MssParameter<H> {}

impl<H: HashChain> MssParameter<H> {
    pub fn new(lmots_algorithm: LmotsAlgorithm, tree_height: u32) -> Result<Self, Error> {
        let lmots_parameter = lmots_algorithm
            .construct_parameter()
            .ok_or(Error::InvalidLmotsAlgorithm)?;

        if !(MIN_TREE_HEIGHT..=MAX_TREE_HEIGHT as u32).contains(&tree_height) {
            return Err(Error::InvalidTreeHeight(tree_height));
        }

        Ok(MssParameter {
            lmots_parameter,
            tree_height,
        })
    }

    pub fn get_lmots_parameter(&self) -> &LmotsParameter<H> {
        &self.lmots_parameter
    }

    pub fn get_tree_height(&self) -> u32 {
        self.tree_height
    }
}
