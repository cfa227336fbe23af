use subtle::ConstantTimeEq;

use crate::{
    constants::{HashValue, D_MESG, D_PBLC},
    hasher::HashChain,
    util::coef::coef,
};

use super::{definitions::LmotsPublicKey, signing::LmotsSignature};

pub fn verify_signature<H: HashChain>(
    signature: &LmotsSignature<H>,
    public_key: &LmotsPublicKey<H>,
    message: &[u8],
) -> bool {
    let lmots_parameter = public_key.lmots_parameter;

    if signature.lmots_parameter != lmots_parameter {
        return false;
    }

    let output_size = lmots_parameter.get_hash_function_output_size();
    if signature.signature_data.len() != lmots_parameter.get_hash_chain_count() as usize
        || signature.signature_randomizer.len() != output_size
        || signature.signature_data.iter().any(|y| y.len() != output_size)
        || public_key.key.len() != output_size
    {
        return false;
    }

    let public_key_candidate = generate_public_key_candidate(signature, public_key, message);

    public_key_candidate
        .as_slice()
        .ct_eq(public_key.key.as_slice())
        .into()
}

fn generate_public_key_candidate<H: HashChain>(
    signature: &LmotsSignature<H>,
    public_key: &LmotsPublicKey<H>,
    message: &[u8],
) -> HashValue {
    let lmots_parameter = signature.lmots_parameter;
    let lms_tree_identifier = &public_key.lms_tree_identifier;
    let lms_leaf_identifier = &public_key.lms_leaf_identifier;

    let mut hasher = lmots_parameter.get_hasher();

    hasher.update(lms_tree_identifier);
    hasher.update(lms_leaf_identifier);
    hasher.update(&D_MESG);
    hasher.update(signature.signature_randomizer.as_slice());
    hasher.update(message);

    let message_hash = hasher.finalize_reset();
    let message_hash_with_checksum = lmots_parameter.append_checksum_to(message_hash.as_slice());

    let max_w = lmots_parameter.get_max_hash_chain_length();
    let mut hash_chain_data = H::prepare_hash_chain_data(lms_tree_identifier, lms_leaf_identifier);
    let mut chain_hasher = lmots_parameter.get_hasher();

    hasher.update(lms_tree_identifier);
    hasher.update(lms_leaf_identifier);
    hasher.update(&D_PBLC);

    for (i, initial) in signature.signature_data.iter().enumerate() {
        let a = coef(
            message_hash_with_checksum.as_slice(),
            i as u16,
            lmots_parameter.get_winternitz(),
        ) as usize;

        let z = chain_hasher.do_hash_chain(
            &mut hash_chain_data,
            i as u16,
            initial.as_slice(),
            a,
            max_w,
        );
        hasher.update(z.as_slice());
    }

    hasher.finalize()
}
