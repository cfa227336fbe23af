#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! A stateful Merkle signature scheme over LM-OTS one-time keys.
//!
//! Every leaf of a Merkle tree of height `H` carries one LM-OTS key pair, so a
//! tree signs `2^H` messages under a single root. The [`MerkleAgent`] keeps the
//! authentication path of the next leaf ready with `O(H)` hashing and memory per
//! signature, using one tree hash instance per level.
//!
//! ```
//! use hbs_mss::{keygen, sign, verify, LmotsAlgorithm, MssParameter, Sha256_256};
//!
//! let parameter = MssParameter::<Sha256_256>::new(LmotsAlgorithm::LmotsW8, 3).unwrap();
//! let seed = [42u8; 32];
//!
//! let (mut agent, public_key) = keygen(&parameter, &seed).unwrap();
//! let signature = sign(&mut agent, b"message").unwrap();
//!
//! assert!(verify(&public_key, b"message", &signature));
//! assert_eq!(agent.remaining_signatures(), 7);
//! ```

mod constants;
mod error;
pub mod hasher;
mod lm_ots;
mod mss;
mod util;

pub use crate::constants::{HashValue, Seed, MAX_TREE_HEIGHT};
pub use crate::error::Error;

pub use crate::hasher::{sha256::Sha256_256, shake256::Shake256_256, HashChain};

pub use crate::lm_ots::{
    definitions::LmotsPublicKey,
    parameters::{LmotsAlgorithm, LmotsParameter},
    signing::LmotsSignature,
};

pub use crate::mss::{
    definitions::{MerkleAgent, MssPublicKey},
    keygen,
    parameter::MssParameter,
    sign,
    signing::MerkleSignature,
    verify,
};

#[cfg(feature = "rand")]
pub use crate::util::random::generate_seed;
