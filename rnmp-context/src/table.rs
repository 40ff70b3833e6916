use fxhash::FxHashMap;

use rnmp_core::models::Analysis;

use crate::extract::ContextHit;

///
/// k-mer counts of one (analysis, library) pair, split by chromosome.
///
/// Chromosome rows keep the order in which they first received a count,
/// which during a run is the order the genome scan reached them.
///
#[derive(Debug, Default, Clone)]
pub struct LibraryCounts {
    chromosomes: Vec<String>,
    index: FxHashMap<String, usize>,
    counts: Vec<FxHashMap<Vec<u8>, f64>>,
}

impl LibraryCounts {
    pub fn add(&mut self, chr: &str, kmer: &[u8], weight: f64) {
        debug_assert!(weight >= 0.0, "context counts never decrease");

        let row = match self.index.get(chr) {
            Some(row) => *row,
            None => {
                let row = self.chromosomes.len();
                self.chromosomes.push(chr.to_string());
                self.index.insert(chr.to_string(), row);
                self.counts.push(FxHashMap::default());
                row
            }
        };

        *self.counts[row].entry(kmer.to_vec()).or_insert(0.0) += weight;
    }

    /// Count for one bucket; buckets never written read as zero.
    pub fn get(&self, chr: &str, kmer: &[u8]) -> f64 {
        self.index
            .get(chr)
            .and_then(|row| self.counts[*row].get(kmer))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Rows in first-count order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &FxHashMap<Vec<u8>, f64>)> {
        self.chromosomes
            .iter()
            .map(|c| c.as_str())
            .zip(self.counts.iter())
    }
}

///
/// Accumulated context counts of a whole run: analysis, then library, then
/// chromosome, then k-mer.
///
#[derive(Debug, Clone)]
pub struct ContextTable {
    analyses: Vec<Analysis>,
    libraries: Vec<String>,
    // [analysis][library]
    tables: Vec<Vec<LibraryCounts>>,
}

impl ContextTable {
    pub fn new(analyses: Vec<Analysis>, libraries: Vec<String>) -> Self {
        let tables = analyses
            .iter()
            .map(|_| vec![LibraryCounts::default(); libraries.len()])
            .collect();

        ContextTable {
            analyses,
            libraries,
            tables,
        }
    }

    pub fn analyses(&self) -> &[Analysis] {
        &self.analyses
    }

    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    ///
    /// Add `weight` into one bucket, creating it on first write.
    ///
    /// # Arguments
    /// - analysis: index into [`ContextTable::analyses`]
    /// - library: index into [`ContextTable::libraries`]
    ///
    pub fn accumulate(&mut self, analysis: usize, library: usize, chr: &str, kmer: &[u8], weight: f64) {
        self.tables[analysis][library].add(chr, kmer, weight);
    }

    ///
    /// Add every hit extracted from one chromosome. Hit windows must index the
    /// same analysis list this table was created with.
    ///
    pub fn accumulate_hits(&mut self, chr: &str, hits: &[ContextHit]) {
        for hit in hits {
            self.accumulate(hit.window, hit.library, chr, &hit.kmer, hit.weight);
        }
    }

    pub fn counts(&self, analysis: usize, library: usize) -> &LibraryCounts {
        &self.tables[analysis][library]
    }

    /// Look up a bucket by value rather than by index. Unknown keys read as zero.
    pub fn get(&self, analysis: &Analysis, library: &str, chr: &str, kmer: &str) -> f64 {
        let a = self.analyses.iter().position(|x| x == analysis);
        let l = self.libraries.iter().position(|x| x == library);

        match (a, l) {
            (Some(a), Some(l)) => self.tables[a][l].get(chr, kmer.as_bytes()),
            _ => 0.0,
        }
    }
}
