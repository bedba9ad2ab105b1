use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::io::Write;

use super::output::HitRow;
use super::{map_reads, MapOpt};
use crate::error::MatchError;
use crate::index::{SuffixTree, TreeStats};
use crate::io::{self, fasta::FastaRecord, fastq::FastqRecord};
use crate::util::alphabet;

/// Counters reported at the end of a `map` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapSummary {
    pub references: usize,
    pub reads: usize,
    /// reads with at least one hit in any reference record
    pub mapped_reads: usize,
    pub hits: usize,
    /// reads rejected for containing the sentinel
    pub rejected_reads: usize,
}

pub fn map_fastq_with_opt(
    reference_path: &str,
    reads_path: &str,
    out_path: Option<&str>,
    opt: MapOpt,
) -> Result<MapSummary> {
    let references = io::read_fasta(reference_path)?;
    if references.is_empty() {
        anyhow::bail!("FASTA file '{}' contains no sequences", reference_path);
    }
    let reads = io::read_fastq(reads_path)?;
    info!("loaded {} reference records and {} reads", references.len(), reads.len());

    let mut out: Box<dyn Write + Send> = if let Some(p) = out_path {
        let fh = std::fs::File::create(p)
            .map_err(|e| anyhow!("cannot create output '{}': {}", p, e))?;
        Box::new(std::io::BufWriter::new(fh))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opt.threads)
        .build()
        .map_err(|e| anyhow!("cannot build thread pool: {}", e))?;
    let summary = pool.install(|| map_records(&references, &reads, &mut out, opt))?;
    out.flush()?;

    info!(
        "mapped {}/{} reads, {} hits ({} rejected)",
        summary.mapped_reads, summary.reads, summary.hits, summary.rejected_reads
    );
    Ok(summary)
}

/// Map every read against every reference record, writing one row per hit.
///
/// Runs on the caller's rayon pool. Records are processed in input order and
/// rows for a record come out read by read, positions ascending.
pub fn map_records<W: Write + ?Sized>(
    references: &[FastaRecord],
    reads: &[FastqRecord],
    out: &mut W,
    opt: MapOpt,
) -> Result<MapSummary> {
    let mut summary = MapSummary { references: references.len(), reads: reads.len(), ..Default::default() };

    let seqs: Vec<Vec<u8>> = reads.iter().map(|r| prepare(&r.seq, opt.normalize)).collect();
    // 含哨兵的 read 只报告一次，之后当作未比对
    let mut usable = vec![true; reads.len()];
    for (i, seq) in seqs.iter().enumerate() {
        if let Err(e) = alphabet::check_no_sentinel(seq) {
            warn!("read '{}' skipped: {}", reads[i].id, e);
            usable[i] = false;
            summary.rejected_reads += 1;
        }
    }
    let mut mapped = vec![false; reads.len()];

    for rec in references {
        let seq = prepare(&rec.seq, opt.normalize);
        let tree = match SuffixTree::build(&seq) {
            Ok(t) => t,
            Err(MatchError::EmptyInput) => {
                warn!("reference '{}' is empty, skipped", rec.id);
                continue;
            }
            Err(e) => return Err(anyhow!("reference '{}': {}", rec.id, e)),
        };
        debug!("reference '{}': len={} nodes={}", rec.id, seq.len(), tree.num_nodes());

        let results = map_reads(&tree, &seqs);
        for (i, res) in results.into_iter().enumerate() {
            if !usable[i] {
                continue;
            }
            // 含哨兵的 read 已在上面过滤
            let positions = res.map_err(|e| anyhow!("read '{}': {}", reads[i].id, e))?;
            if !positions.is_empty() {
                mapped[i] = true;
            }
            for pos in positions {
                let row = HitRow {
                    read_name: &reads[i].id,
                    ref_name: &rec.id,
                    pos,
                    read_seq: &reads[i].seq,
                };
                writeln!(out, "{}", row)?;
                summary.hits += 1;
            }
        }
    }

    summary.mapped_reads = mapped.iter().filter(|&&m| m).count();
    Ok(summary)
}

/// Build one tree per record and report its size.
pub fn reference_stats(references: &[FastaRecord], normalize: bool) -> Result<Vec<(String, Option<TreeStats>)>> {
    let mut out = Vec::with_capacity(references.len());
    for rec in references {
        let seq = prepare(&rec.seq, normalize);
        let stats = match SuffixTree::build(&seq) {
            Ok(t) => Some(t.stats()),
            Err(MatchError::EmptyInput) => None,
            Err(e) => return Err(anyhow!("reference '{}': {}", rec.id, e)),
        };
        out.push((rec.id.clone(), stats));
    }
    Ok(out)
}

fn prepare(seq: &[u8], normalize: bool) -> Vec<u8> {
    if normalize {
        alphabet::normalize_seq(seq)
    } else {
        seq.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fa(id: &str, seq: &[u8]) -> FastaRecord {
        FastaRecord { id: id.to_string(), desc: None, seq: seq.to_vec() }
    }

    fn fq(id: &str, seq: &[u8]) -> FastqRecord {
        FastqRecord { id: id.to_string(), desc: None, seq: seq.to_vec(), qual: vec![b'I'; seq.len()] }
    }

    #[test]
    fn rows_per_record_and_occurrence() {
        let refs = vec![fa("chr1", b"ACGTACGT"), fa("chr2", b"TTACG")];
        let reads = vec![fq("r1", b"ACG"), fq("r2", b"GGGG"), fq("r3", b"TTA")];
        let mut out: Vec<u8> = Vec::new();
        let s = map_records(&refs, &reads, &mut out, MapOpt::default()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(
            rows,
            vec![
                "r1\tchr1\t1\t3M\tACG",
                "r1\tchr1\t5\t3M\tACG",
                "r1\tchr2\t3\t3M\tACG",
                "r3\tchr2\t1\t3M\tTTA",
            ]
        );
        assert_eq!(s.hits, 4);
        assert_eq!(s.mapped_reads, 2);
        assert_eq!(s.references, 2);
        assert_eq!(s.reads, 3);
    }

    #[test]
    fn sentinel_read_is_rejected_not_fatal() {
        let refs = vec![fa("chr1", b"ACGT")];
        let reads = vec![fq("bad", b"AC$"), fq("ok", b"CG")];
        let mut out: Vec<u8> = Vec::new();
        let s = map_records(&refs, &reads, &mut out, MapOpt::default()).unwrap();
        assert_eq!(s.rejected_reads, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "ok\tchr1\t2\t2M\tCG\n");
    }

    #[test]
    fn sentinel_reference_is_fatal() {
        let refs = vec![fa("bad", b"AC$GT")];
        let mut out: Vec<u8> = Vec::new();
        let err = map_records(&refs, &[fq("r", b"AC")], &mut out, MapOpt::default()).unwrap_err();
        assert!(err.to_string().contains("'bad'"));
    }

    #[test]
    fn empty_reference_is_skipped() {
        let refs = vec![fa("empty", b""), fa("chr1", b"ACGT")];
        let mut out: Vec<u8> = Vec::new();
        let s = map_records(&refs, &[fq("r", b"GT")], &mut out, MapOpt::default()).unwrap();
        assert_eq!(s.hits, 1);
    }

    #[test]
    fn normalize_matches_mixed_case() {
        let refs = vec![fa("chr1", b"acguACGT")];
        let reads = vec![fq("r1", b"ACGT")];

        let mut out: Vec<u8> = Vec::new();
        let s = map_records(&refs, &reads, &mut out, MapOpt::default()).unwrap();
        assert_eq!(s.hits, 1);

        let mut out: Vec<u8> = Vec::new();
        let opt = MapOpt { normalize: true, ..MapOpt::default() };
        let s = map_records(&refs, &reads, &mut out, opt).unwrap();
        assert_eq!(s.hits, 2);
    }

    #[test]
    fn stats_per_record() {
        let refs = vec![fa("a", b"abab"), fa("e", b"")];
        let stats = reference_stats(&refs, false).unwrap();
        assert_eq!(stats[0].0, "a");
        assert_eq!(stats[0].1.map(|s| s.leaves), Some(5));
        assert_eq!(stats[1].1, None);
    }
}
