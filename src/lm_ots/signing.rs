use tinyvec::ArrayVec;

use crate::{
    constants::{HashValue, MAX_HASH_CHAIN_COUNT, D_MESG},
    error::Error,
    hasher::HashChain,
    util::coef::coef,
};

use super::definitions::LmotsPrivateKey;
use super::parameters::LmotsParameter;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LmotsSignature<H: HashChain> {
    pub signature_randomizer: HashValue,
    pub signature_data: ArrayVec<[HashValue; MAX_HASH_CHAIN_COUNT]>,
    pub lmots_parameter: LmotsParameter<H>,
}

impl<H: HashChain> LmotsSignature<H> {
    fn calculate_message_hash(
        private_key: &LmotsPrivateKey<H>,
        signature_randomizer: &[u8],
        message: &[u8],
    ) -> HashValue {
        let mut hasher = private_key.lmots_parameter.get_hasher();

        hasher.update(&private_key.lms_tree_identifier);
        hasher.update(&private_key.lms_leaf_identifier);
        hasher.update(&D_MESG);
        hasher.update(signature_randomizer);
        hasher.update(message);

        hasher.finalize()
    }

    fn calculate_signature(
        private_key: &LmotsPrivateKey<H>,
        message_hash_with_checksum: &[u8],
    ) -> ArrayVec<[HashValue; MAX_HASH_CHAIN_COUNT]> {
        let lmots_parameter = private_key.lmots_parameter;

        let mut hasher = lmots_parameter.get_hasher();
        let mut hash_chain_data = H::prepare_hash_chain_data(
            &private_key.lms_tree_identifier,
            &private_key.lms_leaf_identifier,
        );

        let mut signature_data = ArrayVec::new();

        for i in 0..lmots_parameter.get_hash_chain_count() {
            let a = coef(
                message_hash_with_checksum,
                i,
                lmots_parameter.get_winternitz(),
            ) as usize;
            let initial = private_key.key[i as usize];
            let result = hasher.do_hash_chain(&mut hash_chain_data, i, initial.as_slice(), 0, a);

            signature_data.push(result);
        }

        signature_data
    }

    pub fn sign(
        private_key: &LmotsPrivateKey<H>,
        signature_randomizer: &[u8],
        message: &[u8],
    ) -> Result<Self, Error> {
        let lmots_parameter = private_key.lmots_parameter;

        if private_key.key.len() != lmots_parameter.get_hash_chain_count() as usize {
            return Err(Error::SigningFailed(
                "private key does not match the LM-OTS parameter",
            ));
        }

        let output_size = lmots_parameter.get_hash_function_output_size();
        if signature_randomizer.len() != output_size
            || private_key.key.iter().any(|x| x.len() != output_size)
        {
            return Err(Error::SigningFailed("key material has the wrong length"));
        }

        let message_hash =
            LmotsSignature::<H>::calculate_message_hash(private_key, signature_randomizer, message);
        let message_hash_with_checksum =
            lmots_parameter.append_checksum_to(message_hash.as_slice());

        let signature_data = LmotsSignature::<H>::calculate_signature(
            private_key,
            message_hash_with_checksum.as_slice(),
        );

        let mut randomizer = HashValue::new();
        randomizer.extend_from_slice(signature_randomizer);

        Ok(LmotsSignature {
            signature_randomizer: randomizer,
            signature_data,
            lmots_parameter,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::Error, hasher::sha256::Sha256_256, lm_ots::keygen::generate_private_key,
        lm_ots::parameters::LmotsAlgorithm,
    };

    use super::LmotsSignature;

    #[test]
    fn signing_rejects_corrupted_key_material() {
        let parameter = LmotsAlgorithm::LmotsW4
            .construct_parameter::<Sha256_256>()
            .unwrap();
        let mut private_key = generate_private_key([1u8; 16], [0u8; 4], &[2u8; 32], parameter);

        assert!(matches!(
            LmotsSignature::sign(&private_key, &[0u8; 31], b"message"),
            Err(Error::SigningFailed(_))
        ));

        private_key.key.pop();
        assert!(matches!(
            LmotsSignature::sign(&private_key, &[0u8; 32], b"message"),
            Err(Error::SigningFailed(_))
        ));
    }

    #[test]
    fn signing_is_deterministic_for_fixed_randomizer() {
        let parameter = LmotsAlgorithm::LmotsW2
            .construct_parameter::<Sha256_256>()
            .unwrap();
        let private_key = generate_private_key([1u8; 16], [0, 0, 0, 7], &[2u8; 32], parameter);

        let first = LmotsSignature::sign(&private_key, &[5u8; 32], b"message").unwrap();
        let second = LmotsSignature::sign(&private_key, &[5u8; 32], b"message").unwrap();
        let other = LmotsSignature::sign(&private_key, &[6u8; 32], b"message").unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
        assert_eq!(first.signature_data.len(), 133);
    }
}
