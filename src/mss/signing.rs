use tinyvec::ArrayVec;

use crate::{
    constants::{HashValue, MAX_TREE_HEIGHT},
    error::Error,
    hasher::HashChain,
    lm_ots::{definitions::LmotsPublicKey, signing::LmotsSignature},
    util::verbose,
};

use super::definitions::MerkleAgent;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct MerkleSignature<H: HashChain> {
    pub leaf: u32,
    pub lmots_public_key: LmotsPublicKey<H>,
    pub lmots_signature: LmotsSignature<H>,
    pub auth_path: ArrayVec<[HashValue; MAX_TREE_HEIGHT]>,
}

/// Signs `message` with the next unused leaf of `agent`.
///
/// The one-time key is consumed as soon as it is drawn: the agent moves on to
/// the following leaf even if the one-time signature can not be produced.
pub fn sign<H: HashChain>(
    agent: &mut MerkleAgent<H>,
    message: &[u8],
) -> Result<MerkleSignature<H>, Error> {
    if agent.remaining_signatures() == 0 {
        verbose!("refusing to sign with an exhausted tree");
        return Err(Error::KeyExhausted {
            leaves: agent.number_of_leaves(),
        });
    }

    let key_source = agent.key_source();
    let leaf = key_source.round();
    let private_key = key_source.next();
    let signature_randomizer = key_source.signature_randomizer(leaf);

    let lmots_signature =
        LmotsSignature::sign(&private_key, signature_randomizer.as_slice(), message);

    let mut auth_path = ArrayVec::new();
    auth_path.extend_from_slice(agent.auth_path());

    agent.traverse()?;

    verbose!("signed with leaf {}", leaf);

    Ok(MerkleSignature {
        leaf,
        lmots_public_key: private_key.public_key.clone(),
        lmots_signature: lmots_signature?,
        auth_path,
    })
}
