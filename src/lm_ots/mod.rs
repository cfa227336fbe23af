use crate::{
    constants::{HashValue, D_LEAF},
    hasher::HashChain,
};

use self::definitions::LmotsPublicKey;

pub mod definitions;
pub mod keygen;
pub mod parameters;
pub mod signing;
pub mod verify;

pub use self::keygen::generate_private_key;

/// Leaf value of the Merkle tree: `H(I || q || D_LEAF || K)`.
pub fn hash_public_key<H: HashChain>(public_key: &LmotsPublicKey<H>) -> HashValue {
    public_key
        .lmots_parameter
        .get_hasher()
        .chain(&public_key.lms_tree_identifier)
        .chain(&public_key.lms_leaf_identifier)
        .chain(&D_LEAF)
        .chain(public_key.key.as_slice())
        .finalize()
}
