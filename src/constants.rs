use tinyvec::ArrayVec;

include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub const ILEN: usize = 16;
pub const SEED_LEN: usize = 32;

pub type Seed = [u8; SEED_LEN];
pub type HashValue = ArrayVec<[u8; MAX_HASH_SIZE]>;
pub type LmsTreeIdentifier = [u8; ILEN];
pub type LmsLeafIdentifier = [u8; 4];

pub const D_PBLC: [u8; 2] = [0x80, 0x80];
pub const D_MESG: [u8; 2] = [0x81, 0x81];
pub const D_LEAF: [u8; 2] = [0x82, 0x82];

pub const TOPSEED_SEED: usize = 23;
pub const TOPSEED_LEN: usize = TOPSEED_SEED + SEED_LEN;
pub const TOPSEED_D: usize = 20;
pub const TOPSEED_WHICH: usize = 22;
pub const D_TOPSEED: u16 = 0xfefe;

pub const PRNG_I: usize = 0;
pub const PRNG_Q: usize = 16;
pub const PRNG_J: usize = 20;
pub const PRNG_FF: usize = 22;
pub const PRNG_SEED: usize = 23;

pub const SEED_SIGNATURE_RANDOMIZER_SEED: u16 = !2;

pub const fn prng_len(seed_len: usize) -> usize {
    23 + seed_len
}

pub const MAX_HASH_SIZE: usize = 32;

pub const PRNG_MAX_LEN: usize = prng_len(MAX_HASH_SIZE);

pub const MIN_WINTERNITZ_PARAMETER: usize = 1;

pub const MAX_HASH_CHAIN_COUNT: usize =
    get_num_winternitz_chains(MIN_WINTERNITZ_PARAMETER, MAX_HASH_SIZE);

pub const MIN_TREE_HEIGHT: u32 = 2;

// The construction pass drives one stack of height H + 1, which holds up to H + 2 nodes.
pub const MAX_TREE_HASH_STACK_DEPTH: usize = MAX_TREE_HEIGHT + 2;

/// Calculated using the formula from RFC 8554 Appendix B
/// https://datatracker.ietf.org/doc/html/rfc8554#appendix-B
const NUM_WINTERNITZ_CHAINS: [usize; 12] = [136, 200, 265, 68, 101, 133, 35, 51, 67, 18, 26, 34];

// RFC 8554: "p"; see terminology: "single Winternitz chain", "number of independent Winternitz chains"
pub const fn get_num_winternitz_chains(winternitz_parameter: usize, output_size: usize) -> usize {
    let w_i = match winternitz_parameter {
        1 => 0usize,
        2 => 1usize,
        4 => 2usize,
        8 => 3usize,
        _ => panic!("Invalid Winternitz parameter. Allowed is: 1, 2, 4 or 8"),
    };

    let o_i = match output_size {
        16 => 0usize,
        24 => 1usize,
        32 => 2usize,
        _ => panic!("Invalid Output Size. Allowed is: 16, 24 or 32"),
    };

    NUM_WINTERNITZ_CHAINS[w_i * 3 + o_i]
}

pub mod winternitz_chain {
    use super::MAX_HASH_SIZE;

    pub const ITER_I: usize = 0;
    pub const ITER_Q: usize = 16;
    pub const ITER_K: usize = 20;
    pub const ITER_J: usize = 22;
    pub const ITER_PREV: usize = 23;

    pub const fn iter_len(hash_len: usize) -> usize {
        ITER_PREV + hash_len
    }

    pub const ITER_MAX_LEN: usize = iter_len(MAX_HASH_SIZE);
}
