use crate::{constants::Seed, error::Error, hasher::HashChain};

use self::{
    definitions::{MerkleAgent, MssPublicKey},
    parameter::MssParameter,
};

pub mod definitions;
pub mod key_source;
pub mod parameter;
pub mod signing;
pub mod tree_hash;
pub mod verify;

pub use self::signing::sign;
pub use self::verify::verify;

/// Builds a signing agent for a fresh tree and returns it with its public key.
pub fn keygen<H: HashChain>(
    parameter: &MssParameter<H>,
    seed: &Seed,
) -> Result<(MerkleAgent<H>, MssPublicKey<H>), Error> {
    let agent = MerkleAgent::new(parameter, seed)?;
    let public_key = agent.public_key();

    Ok((agent, public_key))
}

#[cfg(test)]
mod tests {
    use crate::{hasher::sha256::Sha256_256, lm_ots::parameters::LmotsAlgorithm};

    use super::{keygen, parameter::MssParameter};

    #[test]
    fn keygen_is_deterministic() {
        let parameter = MssParameter::<Sha256_256>::new(LmotsAlgorithm::LmotsW4, 3).unwrap();

        let (_, first) = keygen(&parameter, &[1u8; 32]).unwrap();
        let (_, second) = keygen(&parameter, &[1u8; 32]).unwrap();
        let (_, other) = keygen(&parameter, &[2u8; 32]).unwrap();

        assert_eq!(first, second);
        assert_ne!(first.key, other.key);
    }
}
