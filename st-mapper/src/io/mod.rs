pub mod fasta;
pub mod fastq;

use anyhow::{anyhow, Result};
use std::io::BufReader;

use fasta::{FastaReader, FastaRecord};
use fastq::{FastqReader, FastqRecord};

/// 读入整个 FASTA 文件
pub fn read_fasta(path: &str) -> Result<Vec<FastaRecord>> {
    let fh = std::fs::File::open(path)
        .map_err(|e| anyhow!("cannot open reference FASTA '{}': {}", path, e))?;
    FastaReader::new(BufReader::new(fh))
        .collect::<Result<Vec<_>>>()
        .map_err(|e| anyhow!("reference FASTA '{}': {}", path, e))
}

/// 读入整个 FASTQ 文件
pub fn read_fastq(path: &str) -> Result<Vec<FastqRecord>> {
    let fh = std::fs::File::open(path)
        .map_err(|e| anyhow!("cannot open reads FASTQ '{}': {}", path, e))?;
    FastqReader::new(BufReader::new(fh))
        .collect::<Result<Vec<_>>>()
        .map_err(|e| anyhow!("reads FASTQ '{}': {}", path, e))
}
