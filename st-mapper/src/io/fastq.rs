use anyhow::{anyhow, Result};
use std::io::BufRead;

use super::fasta::split_header;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

/// 四行一条的 FASTQ 读取器（不支持折行的序列）
pub struct FastqReader<R: BufRead> {
    reader: R,
    buf: String,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: String::new(), line_no: 0, done: false }
    }

    /// 读一行并去掉行尾空白；EOF 返回 None
    fn line(&mut self) -> Result<Option<&str>> {
        self.buf.clear();
        let n = self.reader.read_line(&mut self.buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some(self.buf.trim_end()))
    }

    pub fn next_record(&mut self) -> Result<Option<FastqRecord>> {
        if self.done {
            return Ok(None);
        }

        // 跳过记录之间（及文件末尾）的空行
        let header = loop {
            match self.line()? {
                None => {
                    self.done = true;
                    return Ok(None);
                }
                Some("") => continue,
                Some(l) => break l.to_string(),
            }
        };
        let header = header
            .strip_prefix('@')
            .ok_or_else(|| anyhow!("line {}: FASTQ header not starting with '@'", self.line_no))?;
        let (id, desc) = split_header(header.trim());

        let seq = self
            .line()?
            .ok_or_else(|| anyhow!("record '{}': unexpected EOF after header", id))?
            .as_bytes()
            .to_vec();

        match self.line()? {
            Some(l) if l.starts_with('+') => {}
            _ => return Err(anyhow!("record '{}': missing '+' line", id)),
        }

        let qual = self
            .line()?
            .ok_or_else(|| anyhow!("record '{}': missing quality line", id))?
            .as_bytes()
            .to_vec();

        if qual.len() != seq.len() {
            return Err(anyhow!(
                "record '{}': seq/qual length mismatch ({} vs {})",
                id,
                seq.len(),
                qual.len()
            ));
        }

        Ok(Some(FastqRecord { id, desc, seq, qual }))
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<FastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.next_record().transpose();
        if matches!(item, Some(Err(_))) {
            self.done = true;
        }
        item
    }
}
