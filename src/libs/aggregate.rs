//! Grouping of visit records into per-entity aggregates.
//!
//! The aggregator is the workhorse behind every visit-based report. It
//! groups a set of already period-filtered records by an arbitrary key
//! (employee, department, date) and sums durations, counts visits, counts
//! distinct projects and days, and buckets each visit by length.
//!
//! ## Duration Buckets
//!
//! ```text
//! [1200, ∞)   ≥20min
//! [600, 1200) 10-19min
//! [300, 600)  5-9min
//! [0, 300)    <5min
//! ```
//!
//! A visit with an unparseable duration counts as zero seconds and lands in
//! `<5min`; it is never dropped from the counts.

use crate::libs::visit::VisitRecord;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Length class of a single visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DurationBucket {
    UnderFive,
    FiveToNine,
    TenToNineteen,
    TwentyPlus,
}

impl DurationBucket {
    pub const ALL: [DurationBucket; 4] = [
        DurationBucket::TwentyPlus,
        DurationBucket::TenToNineteen,
        DurationBucket::FiveToNine,
        DurationBucket::UnderFive,
    ];

    pub fn classify(seconds: u64) -> Self {
        match seconds {
            s if s >= 1200 => DurationBucket::TwentyPlus,
            s if s >= 600 => DurationBucket::TenToNineteen,
            s if s >= 300 => DurationBucket::FiveToNine,
            _ => DurationBucket::UnderFive,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::TwentyPlus => "≥20min",
            DurationBucket::TenToNineteen => "10-19min",
            DurationBucket::FiveToNine => "5-9min",
            DurationBucket::UnderFive => "<5min",
        }
    }
}

/// Visit counts per duration bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    pub twenty_plus: usize,
    pub ten_to_nineteen: usize,
    pub five_to_nine: usize,
    pub under_five: usize,
}

impl BucketCounts {
    pub fn record(&mut self, bucket: DurationBucket) {
        match bucket {
            DurationBucket::TwentyPlus => self.twenty_plus += 1,
            DurationBucket::TenToNineteen => self.ten_to_nineteen += 1,
            DurationBucket::FiveToNine => self.five_to_nine += 1,
            DurationBucket::UnderFive => self.under_five += 1,
        }
    }

    pub fn get(&self, bucket: DurationBucket) -> usize {
        match bucket {
            DurationBucket::TwentyPlus => self.twenty_plus,
            DurationBucket::TenToNineteen => self.ten_to_nineteen,
            DurationBucket::FiveToNine => self.five_to_nine,
            DurationBucket::UnderFive => self.under_five,
        }
    }

    pub fn total(&self) -> usize {
        self.twenty_plus + self.ten_to_nineteen + self.five_to_nine + self.under_five
    }

    pub fn merge(&mut self, other: &BucketCounts) {
        self.twenty_plus += other.twenty_plus;
        self.ten_to_nineteen += other.ten_to_nineteen;
        self.five_to_nine += other.five_to_nine;
        self.under_five += other.under_five;
    }
}

/// Aggregated visit statistics for one group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub total_duration_seconds: u64,
    pub visit_count: usize,
    pub distinct_project_count: usize,
    pub distinct_day_count: usize,
    pub bucket_counts: BucketCounts,
}

#[derive(Default)]
struct Accumulator<'a> {
    total_duration_seconds: u64,
    visit_count: usize,
    projects: HashSet<&'a str>,
    days: HashSet<&'a str>,
    bucket_counts: BucketCounts,
}

impl<'a> Accumulator<'a> {
    fn add(&mut self, record: &'a VisitRecord) {
        let seconds = record.duration_seconds();
        self.total_duration_seconds = self.total_duration_seconds.saturating_add(seconds);
        self.visit_count += 1;
        self.projects.insert(record.project_name.as_str());
        self.days.insert(record.date.as_str());
        self.bucket_counts.record(DurationBucket::classify(seconds));
    }

    fn finish(self) -> Aggregate {
        Aggregate {
            total_duration_seconds: self.total_duration_seconds,
            visit_count: self.visit_count,
            distinct_project_count: self.projects.len(),
            distinct_day_count: self.days.len(),
            bucket_counts: self.bucket_counts,
        }
    }
}

/// Groups records by `key_fn` and aggregates each group.
///
/// Records outside the wanted period must be filtered out beforehand; an
/// empty input yields an empty map.
///
/// # Examples
///
/// ```rust
/// use sitewatch::libs::aggregate::aggregate;
/// use sitewatch::libs::visit::VisitRecord;
///
/// let records = vec![
///     VisitRecord::new("2024-09-02", "Rahim", "Construction", "Site Engineer", "Lake View", "0:25:00"),
///     VisitRecord::new("2024-09-03", "Rahim", "Construction", "Site Engineer", "Lake View", "0:10:00"),
/// ];
/// let groups = aggregate(&records, |r| r.visitor_name.clone());
/// assert_eq!(groups["Rahim"].total_duration_seconds, 2100);
/// assert_eq!(groups["Rahim"].distinct_project_count, 1);
/// ```
pub fn aggregate<'a, I, F>(records: I, key_fn: F) -> BTreeMap<String, Aggregate>
where
    I: IntoIterator<Item = &'a VisitRecord>,
    F: Fn(&VisitRecord) -> String,
{
    let mut groups: BTreeMap<String, Accumulator<'a>> = BTreeMap::new();
    for record in records {
        groups.entry(key_fn(record)).or_default().add(record);
    }
    groups.into_iter().map(|(key, acc)| (key, acc.finish())).collect()
}

/// Aggregates all records as a single group.
pub fn summarize<'a, I>(records: I) -> Aggregate
where
    I: IntoIterator<Item = &'a VisitRecord>,
{
    let mut acc = Accumulator::default();
    for record in records {
        acc.add(record);
    }
    acc.finish()
}
