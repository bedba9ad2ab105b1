use thiserror::Error;

/// 查询/建树过程中的可恢复结果。
///
/// 三种情况都不是致命错误：`EmptyInput` 与 `NoMatch` 在 read mapper 层
/// 被折叠为空结果，只有 `MalformedAlphabet` 会继续向上传递。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// 参考序列或查询为空
    #[error("empty reference or query")]
    EmptyInput,

    /// 查询在参考序列中不存在
    #[error("query does not occur in the reference")]
    NoMatch,

    /// 输入中出现了保留的哨兵字符
    #[error("reserved sentinel byte {byte:#04x} found at position {pos}")]
    MalformedAlphabet { byte: u8, pos: usize },
}

impl MatchError {
    /// `EmptyInput` 和 `NoMatch` 都表示“没有命中”，而不是输入非法。
    pub fn is_no_hit(&self) -> bool {
        matches!(self, MatchError::EmptyInput | MatchError::NoMatch)
    }
}

pub type MatchResult<T> = std::result::Result<T, MatchError>;
