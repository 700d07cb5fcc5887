use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::Window;
use crate::core::primitives::decimal_to_f64;
use crate::error::{ViewError, ViewResult};

/// One time-stamped sample carrying a value per series.
///
/// Identity is the timestamp: within a [`Dataset`] no two records share one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub timestamp: DateTime<Utc>,
    pub values: IndexMap<String, f64>,
}

impl Record {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, values: IndexMap<String, f64>) -> Self {
        Self { timestamp, values }
    }

    /// Builds a record from `(series, value)` pairs, keeping pair order.
    pub fn from_pairs<I, S>(timestamp: DateTime<Utc>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(series, value)| (series.into(), value))
            .collect();
        Self { timestamp, values }
    }

    pub fn from_decimal_values<I, S>(timestamp: DateTime<Utc>, pairs: I) -> ViewResult<Self>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        let mut values = IndexMap::new();
        for (series, value) in pairs {
            let series = series.into();
            let value = decimal_to_f64(value, &series)?;
            values.insert(series, value);
        }
        Ok(Self { timestamp, values })
    }

    #[must_use]
    pub fn value(&self, series: &str) -> Option<f64> {
        self.values.get(series).copied()
    }

    /// Largest value across all series, `None` for a record without values.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.values.values().copied().reduce(f64::max)
    }

    fn is_finite(&self) -> bool {
        self.values.values().all(|value| value.is_finite())
    }
}

/// Immutable, ascending-by-timestamp record sequence.
///
/// Construction canonicalizes the input once; afterwards the dataset is only
/// ever read and filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    series: Vec<String>,
}

impl Dataset {
    /// Canonicalizes and wraps `records`.
    ///
    /// Records with non-finite values are dropped, the rest are sorted by
    /// timestamp, and for duplicated timestamps the last record wins.
    pub fn new(records: Vec<Record>) -> ViewResult<Self> {
        let original_count = records.len();
        let records = canonicalize_records(records);
        if records.is_empty() {
            return Err(ViewError::EmptyDataset);
        }

        let mut series: Vec<String> = Vec::new();
        for record in &records {
            for name in record.values.keys() {
                if !series.iter().any(|known| known == name) {
                    series.push(name.clone());
                }
            }
        }

        debug!(
            original_count,
            canonical_count = records.len(),
            series_count = series.len(),
            "dataset loaded"
        );
        Ok(Self { records, series })
    }

    /// Parses a JSON array of `{"timestamp": ..., "values": {...}}` records.
    pub fn from_json_str(input: &str) -> ViewResult<Self> {
        let records: Vec<Record> = serde_json::from_str(input)
            .map_err(|e| ViewError::InvalidData(format!("failed to parse dataset json: {e}")))?;
        Self::new(records)
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> &Record {
        &self.records[0]
    }

    #[must_use]
    pub fn last(&self) -> &Record {
        &self.records[self.records.len() - 1]
    }

    /// Series names in first-seen order.
    #[must_use]
    pub fn series_names(&self) -> &[String] {
        &self.series
    }

    #[must_use]
    pub fn has_series(&self, name: &str) -> bool {
        self.series.iter().any(|known| known == name)
    }

    /// Full time span `[first.timestamp, last.timestamp]`.
    #[must_use]
    pub fn span(&self) -> Window {
        Window::spanning(self.first().timestamp, self.last().timestamp)
    }

    /// Span of the last `count` records (the whole dataset when shorter).
    #[must_use]
    pub fn tail_span(&self, count: usize) -> Window {
        let count = count.clamp(1, self.records.len());
        let start = self.records[self.records.len() - count].timestamp;
        Window::spanning(start, self.last().timestamp)
    }

    /// Distinct calendar years present in the dataset, ascending.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|record| record.timestamp.year())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    #[must_use]
    pub fn position_of(&self, timestamp: DateTime<Utc>) -> Option<usize> {
        self.records
            .binary_search_by(|record| record.timestamp.cmp(&timestamp))
            .ok()
    }

    #[must_use]
    pub fn find(&self, timestamp: DateTime<Utc>) -> Option<&Record> {
        self.position_of(timestamp).map(|index| &self.records[index])
    }
}

fn canonicalize_records(mut records: Vec<Record>) -> Vec<Record> {
    let original_len = records.len();
    records.retain(Record::is_finite);
    records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    let mut deduped: Vec<Record> = Vec::with_capacity(records.len());
    let mut duplicate_count = 0_usize;
    for record in records {
        if let Some(last) = deduped.last_mut() {
            if last.timestamp == record.timestamp {
                *last = record;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(record);
    }

    let filtered_count = original_len.saturating_sub(deduped.len() + duplicate_count);
    if filtered_count > 0 || duplicate_count > 0 {
        warn!(
            filtered_count,
            duplicate_count,
            canonical_count = deduped.len(),
            "canonicalized dataset records"
        );
    }
    deduped
}
