use std::iter::FusedIterator;

use super::node::NodeId;
use super::tree::SuffixTree;

/// 子树中一个节点的快照：`[start, end)` 区间、标签长度、叶子标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeDescriptor {
    pub id: NodeId,
    pub start: usize,
    pub end: usize,
    pub len: usize,
    pub leaf: Option<u32>,
}

/// 惰性遍历某节点为根的整棵子树（含根本身）。
///
/// 使用显式栈做深度优先；只保证每个节点恰好出现一次，不保证顺序。
#[derive(Debug, Clone)]
pub struct Subtree<'t> {
    tree: &'t SuffixTree,
    stack: Vec<NodeId>,
}

impl<'t> Subtree<'t> {
    /// 只保留叶子
    pub fn leaves(self) -> impl Iterator<Item = NodeDescriptor> + 't {
        self.filter(|d| d.leaf.is_some())
    }
}

impl Iterator for Subtree<'_> {
    type Item = NodeDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.stack.extend(node.children.ids().rev());
        Some(NodeDescriptor {
            id,
            start: node.start as usize,
            end: node.end as usize,
            len: node.len(),
            leaf: node.leaf,
        })
    }
}

impl FusedIterator for Subtree<'_> {}

impl SuffixTree {
    /// `None` 产生空序列
    pub fn subtree(&self, from: Option<NodeId>) -> Subtree<'_> {
        Subtree { tree: self, stack: from.into_iter().collect() }
    }
}
