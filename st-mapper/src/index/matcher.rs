use super::node::NodeId;
use super::tree::SuffixTree;
use crate::error::{MatchError, MatchResult};
use crate::util::alphabet;

impl SuffixTree {
    /// 沿查询字符从根下行，返回查询耗尽时到达的节点。
    ///
    /// 查询可能停在某条边的中间，此时返回该边的下端节点：
    /// 边上剩余的字符与子串出现无关，其下所有叶子都是命中位置。
    pub fn find(&self, query: &[u8]) -> MatchResult<NodeId> {
        if query.is_empty() {
            return Err(MatchError::EmptyInput);
        }
        alphabet::check_no_sentinel(query)?;

        let mut current = self.root();
        let mut i = 0usize;
        loop {
            let child = self
                .node(current)
                .children
                .get(query[i])
                .ok_or(MatchError::NoMatch)?;
            let label = self.label(child);
            let rest = &query[i..];
            let n = label.len().min(rest.len());
            if label[..n] != rest[..n] {
                return Err(MatchError::NoMatch);
            }
            i += n;
            if i == query.len() {
                return Ok(child);
            }
            // 标签已耗尽，查询还有剩余
            current = child;
        }
    }

    /// 查询在参考序列中的全部起始位置（0-based，升序）。
    pub fn occurrences(&self, query: &[u8]) -> MatchResult<Vec<usize>> {
        let hit = self.find(query)?;
        let mut positions: Vec<usize> = self
            .subtree(Some(hit))
            .leaves()
            .filter_map(|d| d.leaf)
            .map(|tag| tag as usize)
            .collect();
        positions.sort_unstable();
        Ok(positions)
    }
}
