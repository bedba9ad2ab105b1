use crate::error::{MatchError, MatchResult};

/// 追加在参考序列末尾的哨兵字符，保证每个后缀都终止于不同的叶子。
pub const SENTINEL: u8 = b'$';

/// 检查输入中是否出现哨兵字符；出现则返回第一个位置。
pub fn check_no_sentinel(seq: &[u8]) -> MatchResult<()> {
    match seq.iter().position(|&b| b == SENTINEL) {
        Some(pos) => Err(MatchError::MalformedAlphabet { byte: SENTINEL, pos }),
        None => Ok(()),
    }
}

/// 复制序列并在末尾追加哨兵。调用方需先用 [`check_no_sentinel`] 校验。
pub fn terminate(seq: &[u8]) -> Vec<u8> {
    let mut text = Vec::with_capacity(seq.len() + 1);
    text.extend_from_slice(seq);
    text.push(SENTINEL);
    text
}

/// 核酸序列规范化：转大写，U 视为 T。其余字节原样保留，
/// 以免把非法字符（包括哨兵）悄悄改写成合法字符。
pub fn normalize_seq(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .map(|&b| match b.to_ascii_uppercase() {
            b'U' => b'T',
            up => up,
        })
        .collect()
}
