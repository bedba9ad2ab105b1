//! 后缀树索引：节点 arena、朴素构建、子树遍历与模式匹配。

pub mod builder;
pub mod enumerate;
pub mod matcher;
pub mod node;
pub mod tree;

pub use enumerate::{NodeDescriptor, Subtree};
pub use node::{Node, NodeId};
pub use tree::{SuffixTree, TreeStats};
