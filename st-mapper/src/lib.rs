//! # st-mapper
//!
//! 基于朴素后缀树的精确 read 比对。
//!
//! 本 crate 提供：
//!
//! - **索引构建**：逐个插入后缀构建后缀树（O(n²)，无后缀链接）
//! - **子树遍历**：惰性枚举任意节点下的全部节点
//! - **模式匹配**：沿查询字符下行，找到覆盖全部出现位置的子树
//! - **read 比对**：每条参考序列建一次树，批量匹配 reads
//!
//! ## 快速示例
//!
//! ```rust
//! use st_mapper::index::SuffixTree;
//! use st_mapper::map;
//!
//! // 一次性接口
//! assert_eq!(map::map_occurrences(b"mississippi", b"ss").unwrap(), vec![2, 5]);
//!
//! // 建树一次，多次查询
//! let tree = SuffixTree::build(b"abaaba").unwrap();
//! let node = tree.find(b"aba").unwrap();
//! let mut positions: Vec<u32> = tree.subtree(Some(node)).leaves().filter_map(|d| d.leaf).collect();
//! positions.sort_unstable();
//! assert_eq!(positions, vec![0, 3]);
//! ```
//!
//! ## 模块说明
//!
//! - [`index`] — 后缀树（节点 arena、构建、遍历、匹配）
//! - [`map`] — read 比对与结果输出
//! - [`io`] — FASTA / FASTQ 文件解析
//! - [`util`] — 哨兵与序列规范化
//! - [`error`] — 匹配结果中的错误类型

pub mod error;
pub mod index;
pub mod io;
pub mod map;
pub mod util;

pub use error::{MatchError, MatchResult};
