/// 节点在 arena 中的下标。下标顺序即创建顺序，0 为根。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// 子节点表：按边标签首字符排序的小向量，二分查找。
/// 首字符在同一节点下唯一（分支不变式）。
#[derive(Debug, Clone, Default)]
pub struct Children {
    entries: Vec<(u8, NodeId)>,
}

impl Children {
    #[inline]
    pub fn get(&self, key: u8) -> Option<NodeId> {
        self.entries
            .binary_search_by_key(&key, |&(k, _)| k)
            .ok()
            .map(|i| self.entries[i].1)
    }

    /// 插入或替换 key 对应的子节点，返回被替换的旧值。
    pub fn insert(&mut self, key: u8, child: NodeId) -> Option<NodeId> {
        match self.entries.binary_search_by_key(&key, |&(k, _)| k) {
            Ok(i) => Some(std::mem::replace(&mut self.entries[i].1, child)),
            Err(i) => {
                self.entries.insert(i, (key, child));
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, NodeId)> + '_ {
        self.entries.iter().copied()
    }

    pub fn ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.entries.iter().map(|&(_, id)| id)
    }
}

/// 一条边及其下方的子树。
///
/// 边标签是参考文本上的半开区间 `[start, end)`，从不拷贝子串；
/// 根节点的区间为空。
#[derive(Debug, Clone)]
pub struct Node {
    pub start: u32,
    pub end: u32,
    pub children: Children,
    /// 仅叶子持有：该叶子所代表后缀在参考序列中的起始偏移
    pub leaf: Option<u32>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self { start: 0, end: 0, children: Children::default(), leaf: None }
    }

    pub(crate) fn branch(start: u32, end: u32) -> Self {
        Self { start, end, children: Children::default(), leaf: None }
    }

    pub(crate) fn leaf(start: u32, end: u32, suffix: u32) -> Self {
        Self { start, end, children: Children::default(), leaf: Some(suffix) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }

    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}
