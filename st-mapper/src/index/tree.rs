use super::node::{Node, NodeId};

/// 朴素后缀树：
/// - 所有节点存放在一个 arena（`Vec<Node>`）中，以 [`NodeId`] 相互引用；
/// - 边标签只记录区间，统一在 `text` 上解析；
/// - 树持有带哨兵的参考文本，两者生命周期一致，构建完成后只读。
#[derive(Debug, Clone)]
pub struct SuffixTree {
    /// 参考序列 + 哨兵
    pub(crate) text: Vec<u8>,
    pub(crate) nodes: Vec<Node>,
}

/// 树的规模统计（`stats` 子命令输出）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub reference_len: usize,
    pub nodes: usize,
    pub leaves: usize,
    pub branches: usize,
}

impl SuffixTree {
    /// 带哨兵的完整文本
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// 不含哨兵的参考序列
    #[inline]
    pub fn reference(&self) -> &[u8] {
        &self.text[..self.text.len() - 1]
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// 节点入边的标签（借用参考文本，不拷贝）
    #[inline]
    pub fn label(&self, id: NodeId) -> &[u8] {
        &self.text[self.node(id).range()]
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn stats(&self) -> TreeStats {
        let leaves = self.nodes.iter().filter(|n| n.is_leaf()).count();
        TreeStats {
            reference_len: self.reference().len(),
            nodes: self.nodes.len(),
            leaves,
            // 根既不是叶子也不是分裂产生的分支节点
            branches: self.nodes.len() - leaves - 1,
        }
    }
}
