use log::{debug, trace};

use crate::tools::freq_count::Distribution;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Index of a node in the merge arena. Original symbols come first, in first-occurrence
/// order, followed by merged nodes in the order they were created.
pub type NodeId = usize;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum NodeData {
    /// Merged node: the '0' child then the '1' child.
    Kids(NodeId, NodeId),
    Leaf(char),
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct MergeNode {
    /// Occurrence count covered by this node (probability times input length).
    pub weight: u64,
    pub node_data: NodeData,
}

/// The full merge structure: every node ever created plus the root.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct MergeTree {
    nodes: Vec<MergeNode>,
    root: NodeId,
}

impl MergeTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &MergeNode {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> &[MergeNode] {
        &self.nodes
    }

    /// Children of `id`, or None for an original symbol.
    pub fn children(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        match self.nodes[id].node_data {
            NodeData::Kids(zero, one) => Some((zero, one)),
            NodeData::Leaf(_) => None,
        }
    }

    /// Number of original symbols (leaves) in the tree.
    pub fn leaf_count(&self) -> usize {
        (self.nodes.len() + 1) / 2
    }
}

/// Heap entry for an active node.
#[derive(Eq, PartialEq, Debug)]
struct Active {
    weight: u64,
    id: NodeId,
}

impl Ord for Active {
    /// BinaryHeap is a max-heap, so the lightest node must compare greatest.
    /// Equal weights go to the node registered first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Active {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Merge the two lightest active nodes until a single root remains.
///
/// Weights are the raw counts of the distribution, which order exactly like the
/// probabilities but never suffer rounding when two sums should tie.
pub fn build_merge_tree(dist: &Distribution) -> MergeTree {
    let n = dist.len();
    let mut nodes: Vec<MergeNode> = Vec::with_capacity(2 * n - 1);
    let mut heap = BinaryHeap::with_capacity(n);

    for (&sym, &count) in dist.symbols().iter().zip(dist.counts()) {
        heap.push(Active {
            weight: count,
            id: nodes.len(),
        });
        nodes.push(MergeNode {
            weight: count,
            node_data: NodeData::Leaf(sym),
        });
    }

    // n - 1 merges; each pops two and pushes one.
    while let (Some(min1), Some(min2)) = (heap.pop(), heap.pop()) {
        let weight = min1.weight + min2.weight;
        let id = nodes.len();
        trace!(
            "merge #{} (w {}) + #{} (w {}) -> #{} (w {})",
            min1.id,
            min1.weight,
            min2.id,
            min2.weight,
            id,
            weight
        );
        nodes.push(MergeNode {
            weight,
            node_data: NodeData::Kids(min1.id, min2.id),
        });
        heap.push(Active { weight, id });
    }

    // The loop only exits once the heap held a single node. With one symbol that node is
    // the leaf itself; otherwise it is the last merge, which is always the final arena entry.
    let root = nodes.len() - 1;
    debug!("Built merge tree: {} nodes, root #{}", nodes.len(), root);
    MergeTree { nodes, root }
}
