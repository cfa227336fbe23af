use tinyvec::ArrayVec;

use crate::{
    constants::{HashValue, MAX_TREE_HASH_STACK_DEPTH, MAX_TREE_HEIGHT},
    error::Error,
    hasher::HashChain,
    lm_ots::{definitions::LmotsPublicKey, hash_public_key},
};

use super::key_source::LeafKeySource;

/// A tree node: a leaf hash at height 0 or the hash of two children.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Node {
    pub height: u32,
    pub value: HashValue,
}

impl Node {
    pub fn leaf<H: HashChain>(public_key: &LmotsPublicKey<H>) -> Self {
        Node {
            height: 0,
            value: hash_public_key(public_key),
        }
    }

    pub fn merge<H: HashChain>(left: &Node, right: &Node) -> Self {
        Node {
            height: left.height + 1,
            value: H::default()
                .chain(left.value.as_slice())
                .chain(right.value.as_slice())
                .finalize(),
        }
    }
}

/// Leftmost leaf of the node a level needs after the one starting at `next_leaf`.
///
/// `next_leaf` is a multiple of `2^height`. The path entry at `height` for the
/// leaves from `next_leaf + 2^height` on is the sibling of their ancestor,
/// which starts at `(next_leaf + 2^height) ^ 2^height`.
pub fn next_subtree_start_leaf(next_leaf: u32, height: u32) -> u64 {
    let width = 1u64 << height;
    (next_leaf as u64 + width) ^ width
}

/// Incremental computation of the node covering the leaves
/// `[leaf_bound - 2^target_height, leaf_bound)`.
///
/// Heights on the stack strictly decrease from bottom to top, except that the
/// two top nodes may share a height until the next step merges them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TreeHashStack {
    leaf: u32,
    leaf_bound: u32,
    target_height: u32,
    nodes: ArrayVec<[Node; MAX_TREE_HASH_STACK_DEPTH]>,
}

impl TreeHashStack {
    pub fn new(start_leaf: u32, target_height: u32) -> Result<Self, Error> {
        let mut stack = TreeHashStack::default();
        stack.init(start_leaf, target_height)?;
        Ok(stack)
    }

    /// A stack which already holds its finished node.
    pub fn with_completed_node(node: Node) -> Self {
        let mut nodes = ArrayVec::new();
        nodes.push(node);

        TreeHashStack {
            leaf: 0,
            leaf_bound: 0,
            target_height: node.height,
            nodes,
        }
    }

    pub fn init(&mut self, start_leaf: u32, target_height: u32) -> Result<(), Error> {
        let invalid = Error::InvalidStartLeaf {
            start_leaf,
            target_height,
        };

        if target_height > MAX_TREE_HEIGHT as u32 + 1 {
            return Err(invalid);
        }

        let width = 1u64 << target_height;
        if start_leaf as u64 % width != 0 {
            return Err(invalid);
        }

        let leaf_bound = start_leaf as u64 + width;
        if leaf_bound > u32::MAX as u64 {
            return Err(invalid);
        }

        self.leaf = start_leaf;
        self.leaf_bound = leaf_bound as u32;
        self.target_height = target_height;
        self.nodes.clear();

        Ok(())
    }

    /// Leaves the stack empty and complete, so it is never scheduled again.
    pub fn retire(&mut self) {
        self.leaf = 0;
        self.leaf_bound = 0;
        self.nodes.clear();
    }

    pub fn is_complete(&self) -> bool {
        self.leaf >= self.leaf_bound && self.nodes.len() <= 1
    }

    /// Height of the node the next step works towards. `None` once complete.
    pub fn lowest_pending_height(&self) -> Option<u32> {
        if self.is_complete() {
            return None;
        }

        match self.nodes.last() {
            None => Some(self.target_height),
            Some(node) => Some(node.height),
        }
    }

    /// Performs up to `budget` steps and returns how many were performed.
    pub fn advance<H: HashChain>(&mut self, budget: u32, keys: &LeafKeySource<H>) -> u32 {
        let mut steps = 0;

        while steps < budget && !self.is_complete() {
            self.step(keys);
            steps += 1;
        }

        steps
    }

    /// Merges the two top nodes if they share a height, otherwise pushes the cursor leaf.
    /// Merging first keeps the heights below the top pair strictly decreasing.
    fn step<H: HashChain>(&mut self, keys: &LeafKeySource<H>) {
        let len = self.nodes.len();

        if len >= 2 && self.nodes[len - 1].height == self.nodes[len - 2].height {
            let right = self.nodes.pop().unwrap_or_default();
            let left = self.nodes.pop().unwrap_or_default();
            self.nodes.push(Node::merge::<H>(&left, &right));
        } else {
            let private_key = keys.derive(self.leaf);
            self.nodes.push(Node::leaf(&private_key.public_key));
            self.leaf += 1;
        }
    }

    pub fn top(&self) -> Result<&Node, Error> {
        self.nodes.last().ok_or(Error::EmptyTreeHashStack)
    }
}

#[cfg(test)]
impl TreeHashStack {
    pub fn target_height(&self) -> u32 {
        self.target_height
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether at most the two top nodes share a height.
    pub fn is_well_formed(&self) -> bool {
        let nodes = self.nodes.as_slice();
        let len = nodes.len();

        len <= self.target_height as usize + 1
            && nodes
                .windows(2)
                .enumerate()
                .all(|(i, pair)| pair[0].height > pair[1].height || i + 2 == len)
    }
}
