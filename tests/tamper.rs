use proptest::prelude::*;

use hbs_mss::{
    keygen, sign, verify, LmotsAlgorithm, MerkleSignature, MssParameter, MssPublicKey, Sha256_256,
};

const TREE_HEIGHT: u32 = 2;

fn signed(
    message: &[u8],
    leaf: u32,
) -> (MssPublicKey<Sha256_256>, MerkleSignature<Sha256_256>) {
    let parameter = MssParameter::new(LmotsAlgorithm::LmotsW4, TREE_HEIGHT).unwrap();
    let (mut agent, public_key) = keygen(&parameter, &[0x5a; 32]).unwrap();

    for _ in 0..leaf {
        sign(&mut agent, b"skipped").unwrap();
    }
    let signature = sign(&mut agent, message).unwrap();

    (public_key, signature)
}

fn flip(bytes: &mut [u8], bit: usize) {
    let bit = bit % (bytes.len() * 8);
    bytes[bit / 8] ^= 1 << (bit % 8);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn flipped_message_bit_is_rejected(
        message in proptest::collection::vec(any::<u8>(), 1..64),
        leaf in 0u32..4,
        bit in any::<usize>(),
    ) {
        let (public_key, signature) = signed(&message, leaf);
        prop_assert!(verify(&public_key, &message, &signature));

        let mut tampered = message.clone();
        flip(&mut tampered, bit);
        prop_assert!(!verify(&public_key, &tampered, &signature));
    }

    #[test]
    fn flipped_one_time_public_key_bit_is_rejected(leaf in 0u32..4, bit in any::<usize>()) {
        let (public_key, mut signature) = signed(b"message", leaf);

        flip(signature.lmots_public_key.key.as_mut_slice(), bit);
        prop_assert!(!verify(&public_key, b"message", &signature));
    }

    #[test]
    fn flipped_one_time_signature_bit_is_rejected(
        leaf in 0u32..4,
        chain in any::<usize>(),
        bit in any::<usize>(),
    ) {
        let (public_key, mut signature) = signed(b"message", leaf);

        let signature_data = &mut signature.lmots_signature.signature_data;
        let chain = chain % signature_data.len();
        flip(signature_data[chain].as_mut_slice(), bit);
        prop_assert!(!verify(&public_key, b"message", &signature));
    }

    #[test]
    fn flipped_randomizer_bit_is_rejected(leaf in 0u32..4, bit in any::<usize>()) {
        let (public_key, mut signature) = signed(b"message", leaf);

        flip(signature.lmots_signature.signature_randomizer.as_mut_slice(), bit);
        prop_assert!(!verify(&public_key, b"message", &signature));
    }

    #[test]
    fn flipped_path_bit_is_rejected(
        leaf in 0u32..4,
        height in 0usize..TREE_HEIGHT as usize,
        bit in any::<usize>(),
    ) {
        let (public_key, mut signature) = signed(b"message", leaf);

        flip(signature.auth_path[height].as_mut_slice(), bit);
        prop_assert!(!verify(&public_key, b"message", &signature));
    }

    #[test]
    fn changed_leaf_index_is_rejected(leaf in 0u32..4, other in 0u32..8) {
        prop_assume!(leaf != other);
        let (public_key, mut signature) = signed(b"message", leaf);

        signature.leaf = other;
        prop_assert!(!verify(&public_key, b"message", &signature));
    }
}
