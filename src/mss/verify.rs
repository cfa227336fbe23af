use subtle::ConstantTimeEq;

use crate::{
    hasher::HashChain,
    lm_ots::{hash_public_key, verify::verify_signature},
    util::ustr::str32u,
};

use super::{definitions::MssPublicKey, signing::MerkleSignature};

pub fn verify<H: HashChain>(
    public_key: &MssPublicKey<H>,
    message: &[u8],
    signature: &MerkleSignature<H>,
) -> bool {
    let lmots_public_key = &signature.lmots_public_key;

    if public_key.tree_height >= u32::BITS
        || signature.leaf as u64 >= 1u64 << public_key.tree_height
        || signature.auth_path.len() != public_key.tree_height as usize
    {
        return false;
    }

    if str32u(&lmots_public_key.lms_leaf_identifier) != signature.leaf
        || lmots_public_key.lms_tree_identifier != public_key.lms_tree_identifier
        || lmots_public_key.lmots_parameter != public_key.lmots_parameter
    {
        return false;
    }

    if !verify_signature(&signature.lmots_signature, lmots_public_key, message) {
        return false;
    }

    let mut node = hash_public_key(lmots_public_key);
    let mut index = signature.leaf;

    for sibling in signature.auth_path.iter() {
        let hasher = H::default();

        node = if index & 1 == 1 {
            hasher.chain(sibling.as_slice()).chain(node.as_slice())
        } else {
            hasher.chain(node.as_slice()).chain(sibling.as_slice())
        }
        .finalize();

        index >>= 1;
    }

    node.as_slice().ct_eq(public_key.key.as_slice()).into()
}

#[cfg(test)]
mod tests {
    use crate::{
        hasher::sha256::Sha256_256,
        lm_ots::parameters::LmotsAlgorithm,
        mss::{keygen, parameter::MssParameter},
    };

    use super::verify;

    #[test]
    fn rejects_mismatching_records() {
        let parameter =
            MssParameter::<Sha256_256>::new(LmotsAlgorithm::LmotsW8, 3).unwrap();
        let (mut agent, public_key) = keygen(&parameter, &[9u8; 32]).unwrap();

        agent.try_sign(b"zero").unwrap();
        let signature = agent.try_sign(b"one").unwrap();
        assert!(verify(&public_key, b"one", &signature));

        let mut wrong_leaf = signature.clone();
        wrong_leaf.leaf = 0;
        assert!(!verify(&public_key, b"one", &wrong_leaf));

        let mut short_path = signature.clone();
        short_path.auth_path.pop();
        assert!(!verify(&public_key, b"one", &short_path));

        let mut long_path = signature.clone();
        long_path.auth_path.push(signature.auth_path[0]);
        assert!(!verify(&public_key, b"one", &long_path));

        let mut out_of_range = public_key.clone();
        out_of_range.tree_height = 0;
        assert!(!verify(&out_of_range, b"one", &signature));

        let mut other_root = public_key.clone();
        other_root.key[0] ^= 1;
        assert!(!verify(&other_root, b"one", &signature));

        let mut other_tree = public_key;
        other_tree.lms_tree_identifier[0] ^= 1;
        assert!(!verify(&other_tree, b"one", &signature));
    }
}
