//! Turns a merge tree into codewords and an explicit binary code tree.
//!
//! The walk is a pure recursion: each call returns the subtree and the codewords of its
//! leaves, and the caller concatenates the results of its '0' and '1' children.

use std::fmt::{self, Display, Formatter};

use super::huffman::{MergeTree, NodeData, NodeId};

/// Binary code tree. `Kids` holds the '0' branch then the '1' branch.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum CodeTree {
    Kids(Box<CodeTree>, Box<CodeTree>),
    Leaf(char),
}

impl CodeTree {
    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            CodeTree::Kids(zero, one) => 1 + zero.depth().max(one.depth()),
            CodeTree::Leaf(_) => 0,
        }
    }

    /// Symbols at the leaves, '0' side first.
    pub fn leaves(&self) -> Vec<char> {
        match self {
            CodeTree::Kids(zero, one) => {
                let mut syms = zero.leaves();
                syms.extend(one.leaves());
                syms
            }
            CodeTree::Leaf(sym) => vec![*sym],
        }
    }

    /// Follow a path of '0'/'1' characters from this node.
    /// Returns None if the path leaves the tree or contains other characters.
    pub fn walk(&self, path: &str) -> Option<&CodeTree> {
        path.chars().try_fold(self, |node, bit| match (node, bit) {
            (CodeTree::Kids(zero, _), '0') => Some(&**zero),
            (CodeTree::Kids(_, one), '1') => Some(&**one),
            _ => None,
        })
    }

    fn draw(&self, f: &mut Formatter<'_>, indent: usize, edge: Option<char>) -> fmt::Result {
        let pad = "  ".repeat(indent);
        let edge = edge.map(|e| format!("{}: ", e)).unwrap_or_default();
        match self {
            CodeTree::Kids(zero, one) => {
                writeln!(f, "{}{}*", pad, edge)?;
                zero.draw(f, indent + 1, Some('0'))?;
                one.draw(f, indent + 1, Some('1'))
            }
            CodeTree::Leaf(sym) => writeln!(f, "{}{}{:?}", pad, edge, sym),
        }
    }
}

impl Display for CodeTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.draw(f, 0, None)
    }
}

/// Symbol to codeword mapping, in assignment order.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct CodewordTable {
    entries: Vec<(char, String)>,
}

impl CodewordTable {
    pub fn get(&self, sym: char) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| *s == sym)
            .map(|(_, code)| code.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.entries.iter().map(|(s, code)| (*s, code.as_str()))
    }

    pub fn symbols(&self) -> Vec<char> {
        self.entries.iter().map(|(s, _)| *s).collect()
    }

    pub fn lengths(&self) -> Vec<usize> {
        self.entries.iter().map(|(_, code)| code.len()).collect()
    }

    /// True if no codeword is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.entries.iter().map(|(_, c)| c.as_str()).collect();
        // After sorting, a prefix sorts directly before some word it prefixes.
        codes.sort_unstable();
        codes.windows(2).all(|w| !w[1].starts_with(w[0]))
    }
}

/// Assign a codeword to every original symbol of `tree` and build the code tree.
pub fn assign_codes(tree: &MergeTree) -> (CodeTree, CodewordTable) {
    let (code_tree, entries) = assign_from(tree, tree.root(), String::new());
    (code_tree, CodewordTable { entries })
}

fn assign_from(tree: &MergeTree, id: NodeId, prefix: String) -> (CodeTree, Vec<(char, String)>) {
    match tree.node(id).node_data {
        NodeData::Kids(zero, one) => {
            let (zero_tree, mut codes) = assign_from(tree, zero, format!("{}0", prefix));
            let (one_tree, one_codes) = assign_from(tree, one, format!("{}1", prefix));
            codes.extend(one_codes);
            (
                CodeTree::Kids(Box::new(zero_tree), Box::new(one_tree)),
                codes,
            )
        }
        NodeData::Leaf(sym) => (CodeTree::Leaf(sym), vec![(sym, prefix)]),
    }
}
