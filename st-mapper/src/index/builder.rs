use log::debug;

use super::node::{Node, NodeId};
use super::tree::SuffixTree;
use crate::error::{MatchError, MatchResult};
use crate::util::alphabet;

impl SuffixTree {
    /// 逐个插入后缀构建后缀树（朴素法，最坏 O(n^2)，无后缀链接）。
    ///
    /// 从最长后缀开始，每个后缀从根出发沿已有路径尽量下行：
    /// 首字符不存在时挂一个覆盖剩余后缀的叶子；
    /// 在某条边中途失配时，在失配处把边一分为二，再挂上新叶子。
    ///
    /// 空参考序列返回 [`MatchError::EmptyInput`]，
    /// 含哨兵字符返回 [`MatchError::MalformedAlphabet`]。
    pub fn build(reference: &[u8]) -> MatchResult<Self> {
        if reference.is_empty() {
            return Err(MatchError::EmptyInput);
        }
        alphabet::check_no_sentinel(reference)?;

        let text = alphabet::terminate(reference);
        let mut builder = Builder::new(&text);
        // 包括只剩哨兵的那个后缀：共 len + 1 个
        for i in 0..text.len() {
            builder.insert_suffix(i);
        }
        let nodes = builder.nodes;
        debug!("suffix tree built: text_len={} nodes={}", text.len(), nodes.len());

        Ok(Self { text, nodes })
    }
}

struct Builder<'a> {
    text: &'a [u8],
    nodes: Vec<Node>,
}

impl<'a> Builder<'a> {
    fn new(text: &'a [u8]) -> Self {
        let mut nodes = Vec::with_capacity(2 * text.len());
        nodes.push(Node::root());
        Self { text, nodes }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// 插入以 `suffix` 开头的后缀。叶子标签即 `suffix`。
    fn insert_suffix(&mut self, suffix: usize) {
        let text = self.text;
        let n = text.len();
        let mut current = NodeId::ROOT;
        let mut j = suffix;

        loop {
            // 哨兵唯一，任何后缀都不是另一个后缀的前缀，
            // 所以总会在 j 到达 n 之前挂上新叶子。
            debug_assert!(j < n, "suffix {} exhausted without a new leaf", suffix);
            let key = text[j];
            let child = match self.nodes[current.index()].children.get(key) {
                Some(c) => c,
                None => {
                    let leaf = self.push(Node::leaf(j as u32, n as u32, suffix as u32));
                    self.nodes[current.index()].children.insert(key, leaf);
                    return;
                }
            };

            let cs = self.nodes[child.index()].start as usize;
            let label_len = self.nodes[child.index()].len();
            // 首字符已由 key 保证相同
            let mut k = 1;
            while k < label_len && text[j + k] == text[cs + k] {
                k += 1;
            }

            if k == label_len {
                current = child;
                j += k;
                continue;
            }

            // 在 cs + k 处分裂：branch 覆盖公共前缀，原子节点截短后挂到 branch 下
            let split = cs + k;
            let branch = self.push(Node::branch(cs as u32, split as u32));
            self.nodes[child.index()].start = split as u32;
            let leaf = self.push(Node::leaf((j + k) as u32, n as u32, suffix as u32));

            let children = &mut self.nodes[branch.index()].children;
            children.insert(text[split], child);
            children.insert(text[j + k], leaf);
            self.nodes[current.index()].children.insert(key, branch);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 从根到每个叶子拼接边标签
    fn leaf_paths(tree: &SuffixTree) -> Vec<(u32, Vec<u8>)> {
        let mut out = Vec::new();
        let mut stack = vec![(tree.root(), Vec::new())];
        while let Some((id, mut path)) = stack.pop() {
            path.extend_from_slice(tree.label(id));
            let node = tree.node(id);
            if let Some(tag) = node.leaf {
                assert!(node.children.is_empty(), "leaf {} has children", tag);
                out.push((tag, path.clone()));
            }
            for c in node.children.ids() {
                stack.push((c, path.clone()));
            }
        }
        out.sort();
        out
    }

    #[test]
    fn build_rejects_empty_and_sentinel() {
        assert_eq!(SuffixTree::build(b"").unwrap_err(), MatchError::EmptyInput);
        assert_eq!(
            SuffixTree::build(b"ab$a").unwrap_err(),
            MatchError::MalformedAlphabet { byte: b'$', pos: 2 }
        );
    }

    #[test]
    fn leaves_spell_every_suffix_once() {
        for reference in [&b"abaaba"[..], b"mississippi", b"aaaa", b"ACGTACGTTGCA", b"x"] {
            let tree = SuffixTree::build(reference).unwrap();
            let text = tree.text();
            let paths = leaf_paths(&tree);
            assert_eq!(paths.len(), text.len());
            for (i, (tag, path)) in paths.iter().enumerate() {
                assert_eq!(*tag as usize, i);
                assert_eq!(path.as_slice(), &text[i..], "suffix {} of {:?}", i, reference);
            }
        }
    }

    #[test]
    fn child_keys_match_label_heads() {
        let tree = SuffixTree::build(b"mississippi").unwrap();
        for id in (0..tree.num_nodes()).map(|i| NodeId(i as u32)) {
            for (key, child) in tree.node(id).children.iter() {
                let label = tree.label(child);
                assert!(!label.is_empty());
                assert_eq!(label[0], key);
            }
        }
    }

    #[test]
    fn branches_have_at_least_two_children() {
        let tree = SuffixTree::build(b"abaaba").unwrap();
        for node in &tree.nodes[1..] {
            if !node.is_leaf() {
                assert!(node.children.len() >= 2);
            }
        }
    }

    #[test]
    fn stats_count_leaves_per_suffix() {
        // abab$ 的后缀树：根下 a / b / $ 三条边，a 与 b 各分裂一次
        let tree = SuffixTree::build(b"abab").unwrap();
        let st = tree.stats();
        assert_eq!(st.reference_len, 4);
        assert_eq!(st.leaves, 5);
        assert_eq!(st.branches, 2);
        assert_eq!(st.nodes, 8);
    }

    #[test]
    fn reference_excludes_sentinel() {
        let tree = SuffixTree::build(b"ACGT").unwrap();
        assert_eq!(tree.reference(), b"ACGT");
        assert_eq!(tree.text(), b"ACGT$");
    }
}
