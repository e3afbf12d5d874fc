use hashbrown::HashMap;
use serde::Serialize;
use std::cmp::Ordering;

/// Occurrence counts keyed by case-normalized character.
///
/// Counts only ever grow; entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<char, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, ch: char) {
        *self.counts.entry(ch).or_insert(0) += 1;
    }

    pub fn count(&self, ch: char) -> u64 {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Consume the table into a report ordered by ascending count.
    pub fn into_report(self) -> Report {
        let mut entries: Vec<StatEntry> = self
            .counts
            .into_iter()
            .map(|(ch, count)| StatEntry { ch, count })
            .collect();
        let total = entries.iter().map(|e| e.count).sum();
        entries.sort_unstable_by(StatEntry::ascending);
        Report { entries, total }
    }
}

/// One character and its final count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    #[serde(rename = "char")]
    pub ch: char,
    pub count: u64,
}

impl StatEntry {
    /// Share of `total` in percent; 0.0 when nothing was counted.
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.count as f64 * 100.0 / total as f64
    }

    // 同数の場合はコードポイント順（出力を決定的にするため）
    fn ascending(a: &Self, b: &Self) -> Ordering {
        a.count.cmp(&b.count).then(a.ch.cmp(&b.ch))
    }
}

/// Sorted entries plus the grand total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<StatEntry>,
    pub total: u64,
}
