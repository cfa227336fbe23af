use tinyvec::ArrayVec;

use crate::{
    constants::{HashValue, LmsTreeIdentifier, Seed, MAX_TREE_HEIGHT, MIN_TREE_HEIGHT},
    error::Error,
    hasher::HashChain,
    lm_ots::parameters::LmotsParameter,
    util::verbose,
};

use super::{
    key_source::LeafKeySource,
    parameter::MssParameter,
    signing::MerkleSignature,
    tree_hash::{next_subtree_start_leaf, TreeHashStack},
};

/// The signing state of one Merkle tree.
///
/// Holds the authentication path of the leaf `sign` uses next, the root, the
/// one-time key source and one tree hash instance per level. Every signature
/// moves the agent forward by one leaf; the agent can not be cloned or rewound.
pub struct MerkleAgent<H: HashChain> {
    tree_height: u32,
    auth_path: ArrayVec<[HashValue; MAX_TREE_HEIGHT]>,
    root: HashValue,
    key_source: LeafKeySource<H>,
    tree_hash_stacks: ArrayVec<[TreeHashStack; MAX_TREE_HEIGHT]>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct MssPublicKey<H: HashChain> {
    pub key: HashValue,
    pub tree_height: u32,
    pub lms_tree_identifier: LmsTreeIdentifier,
    pub lmots_parameter: LmotsParameter<H>,
}

impl<H: HashChain> MerkleAgent<H> {
    /// Computes the root, the first authentication path and the initial state
    /// of every level in one pass over all leaves.
    pub fn new(parameter: &MssParameter<H>, seed: &Seed) -> Result<Self, Error> {
        let tree_height = parameter.get_tree_height();

        if !(MIN_TREE_HEIGHT..=MAX_TREE_HEIGHT as u32).contains(&tree_height) {
            return Err(Error::InvalidTreeHeight(tree_height));
        }

        let key_source = LeafKeySource::new(seed, *parameter.get_lmots_parameter());

        let mut auth_path = ArrayVec::new();
        let mut tree_hash_stacks = ArrayVec::new();

        let mut tree_hash = TreeHashStack::new(0, tree_height + 1)?;

        for height in 0..tree_height {
            tree_hash.advance(1, &key_source);
            tree_hash_stacks.push(TreeHashStack::with_completed_node(*tree_hash.top()?));

            tree_hash.advance((2 << height) - 1, &key_source);
            auth_path.push(tree_hash.top()?.value);
        }

        tree_hash.advance(1, &key_source);
        let root = tree_hash.top()?.value;

        verbose!(
            "built merkle agent of height {} with LM-OTS type {}",
            tree_height,
            parameter.get_lmots_parameter().get_type_id()
        );

        Ok(MerkleAgent {
            tree_height,
            auth_path,
            root,
            key_source,
            tree_hash_stacks,
        })
    }

    pub fn public_key(&self) -> MssPublicKey<H> {
        MssPublicKey {
            key: self.root,
            tree_height: self.tree_height,
            lms_tree_identifier: *self.key_source.lms_tree_identifier(),
            lmots_parameter: self.key_source.lmots_parameter(),
        }
    }

    pub fn tree_height(&self) -> u32 {
        self.tree_height
    }

    /// Index of the leaf the next signature uses.
    pub fn used_leafs_index(&self) -> u32 {
        self.key_source.round()
    }

    pub fn remaining_signatures(&self) -> u64 {
        self.number_of_leaves() - self.used_leafs_index() as u64
    }

    pub fn try_sign(&mut self, message: &[u8]) -> Result<MerkleSignature<H>, Error> {
        super::signing::sign(self, message)
    }

    pub(crate) fn number_of_leaves(&self) -> u64 {
        1u64 << self.tree_height
    }

    pub(crate) fn auth_path(&self) -> &[HashValue] {
        self.auth_path.as_slice()
    }

    pub(crate) fn key_source(&mut self) -> &mut LeafKeySource<H> {
        &mut self.key_source
    }

    /// Prepares the authentication path of the leaf the key source hands out
    /// next. Returns the number of tree hash steps performed.
    pub(crate) fn traverse(&mut self) -> Result<u32, Error> {
        let next_leaf = self.key_source.round();

        if next_leaf as u64 >= self.number_of_leaves() {
            verbose!("all leaves of the tree are used");
            return Ok(0);
        }

        self.refresh_auth(next_leaf)?;
        Ok(self.refresh_tree_hash_stacks())
    }

    fn refresh_auth(&mut self, next_leaf: u32) -> Result<(), Error> {
        let number_of_leaves = self.number_of_leaves();

        for height in 0..self.tree_height {
            if next_leaf % (1 << height) != 0 {
                continue;
            }

            let level = height as usize;
            let stack = &mut self.tree_hash_stacks[level];

            if !stack.is_complete() {
                return Err(Error::TreeHashIncomplete { level: height });
            }
            self.auth_path[level] = stack.top()?.value;

            let start_leaf = next_subtree_start_leaf(next_leaf, height);
            if start_leaf < number_of_leaves {
                stack.init(start_leaf as u32, height)?;
                verbose!("level {} prepares the node starting at leaf {}", height, start_leaf);
            } else {
                stack.retire();
                verbose!("level {} is retired", height);
            }
        }

        Ok(())
    }

    fn refresh_tree_hash_stacks(&mut self) -> u32 {
        let mut steps = 0;

        for _ in 0..2 * self.tree_height - 1 {
            let mut lowest: Option<(usize, u32)> = None;

            for (level, stack) in self.tree_hash_stacks.iter().enumerate() {
                if let Some(height) = stack.lowest_pending_height() {
                    if lowest.map_or(true, |(_, lowest_height)| height < lowest_height) {
                        lowest = Some((level, height));
                    }
                }
            }

            if let Some((level, _)) = lowest {
                steps += self.tree_hash_stacks[level].advance(1, &self.key_source);
            }
        }

        steps
    }
}
