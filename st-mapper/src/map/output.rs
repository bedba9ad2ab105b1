use std::fmt;

/// One exact hit: `read  reference  pos(1-based)  CIGAR  read_seq`.
///
/// Only exact matches are reported, so the CIGAR is always `<read_len>M`.
#[derive(Debug, Clone, Copy)]
pub struct HitRow<'a> {
    pub read_name: &'a str,
    pub ref_name: &'a str,
    /// 0-based position in the reference
    pub pos: usize,
    pub read_seq: &'a [u8],
}

impl HitRow<'_> {
    pub fn cigar(&self) -> String {
        format!("{}M", self.read_seq.len())
    }
}

impl fmt::Display for HitRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.read_name,
            self.ref_name,
            self.pos + 1,
            self.cigar(),
            String::from_utf8_lossy(self.read_seq),
        )
    }
}
