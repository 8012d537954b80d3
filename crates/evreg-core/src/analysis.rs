//! Summary tables over the ingested datasets.
//!
//! Undated records take part in whole-period averages but are ignored by
//! anything keyed on a report date.

use crate::model::{CountyRecord, DatedRecord, ReportDate, ZipRecord};
use chrono::Datelike;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Only cities with at least this many registrations at the first report
/// get a percent increase.
pub const DEFAULT_MIN_BASELINE: u64 = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub counties: usize,
    pub zip_codes: usize,
    pub cities: usize,
}

fn distinct<'a>(keys: impl Iterator<Item = &'a str>) -> usize {
    keys.collect::<BTreeSet<_>>().len()
}

pub fn overview(county: &[CountyRecord], zip: &[ZipRecord]) -> Overview {
    Overview {
        counties: distinct(county.iter().map(|r| r.county_name.as_str())),
        zip_codes: distinct(zip.iter().map(|r| r.zip_code.as_str())),
        cities: distinct(zip.iter().map(|r| r.city_name.as_str())),
    }
}

/// Mean count of one key (county, ZIP code or city) over all its records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyAverage {
    pub key: String,
    pub average: f64,
    pub total: u64,
    pub records: usize,
}

/// Averages per key, ordered by key.
pub fn average_by<'a, T, K>(records: impl IntoIterator<Item = &'a T>, key: K) -> Vec<KeyAverage>
where
    T: DatedRecord + 'a,
    K: Fn(&T) -> &str,
{
    let mut sums: BTreeMap<&str, (u64, usize)> = BTreeMap::new();
    for record in records {
        let entry = sums.entry(key(record)).or_default();
        entry.0 = entry.0.saturating_add(record.count());
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(key, (total, records))| KeyAverage {
            key: key.to_string(),
            average: total as f64 / records as f64,
            total,
            records,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopBottom {
    pub top: Vec<KeyAverage>,
    pub bottom: Vec<KeyAverage>,
}

/// The `n` highest and `n` lowest averages. Ties go to the smaller key.
pub fn top_bottom(averages: &[KeyAverage], n: usize) -> TopBottom {
    let mut sorted = averages.to_vec();
    sorted.sort_by(|a, b| b.average.total_cmp(&a.average).then_with(|| a.key.cmp(&b.key)));
    let top = sorted.iter().take(n).cloned().collect();

    sorted.sort_by(|a, b| a.average.total_cmp(&b.average).then_with(|| a.key.cmp(&b.key)));
    let bottom = sorted.into_iter().take(n).collect();

    TopBottom { top, bottom }
}

/// Keys that never recorded a single registration.
pub fn zero_average(averages: &[KeyAverage]) -> Vec<KeyAverage> {
    averages.iter().filter(|a| a.total == 0).cloned().collect()
}

/// `top_bottom` computed separately for each calendar year of report dates.
pub fn yearly_top_bottom<T, K>(records: &[T], key: K, n: usize) -> Vec<(i32, TopBottom)>
where
    T: DatedRecord,
    K: Fn(&T) -> &str,
{
    let mut by_year: BTreeMap<i32, Vec<&T>> = BTreeMap::new();
    for record in records {
        if let Some(date) = record.date() {
            by_year.entry(date.year()).or_default().push(record);
        }
    }

    by_year
        .into_iter()
        .map(|(year, rows)| {
            let averages = average_by(rows, &key);
            (year, top_bottom(&averages, n))
        })
        .collect()
}

/// Total ZIP-level registrations per report date, oldest first.
pub fn total_trend(zip: &[ZipRecord]) -> Vec<(ReportDate, u64)> {
    let mut totals: BTreeMap<ReportDate, u64> = BTreeMap::new();
    for record in zip {
        if let Some(date) = record.date {
            let total = totals.entry(date).or_default();
            *total = total.saturating_add(record.count);
        }
    }
    totals.into_iter().collect()
}

/// Change in a city's registrations between the first and last report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityGrowth {
    pub city: String,
    pub first: u64,
    pub last: u64,
    pub increase: i64,
    /// Only set when `first` meets the minimum baseline.
    pub percent_increase: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthReport {
    pub first_date: ReportDate,
    pub last_date: ReportDate,
    /// Sorted by increase, largest first.
    pub cities: Vec<CityGrowth>,
}

impl GrowthReport {
    pub fn top_increases(&self, n: usize) -> impl Iterator<Item = &CityGrowth> {
        self.cities.iter().take(n)
    }

    pub fn bottom_increases(&self, n: usize) -> impl Iterator<Item = &CityGrowth> {
        self.cities.iter().rev().take(n)
    }

    pub fn decreases(&self) -> impl Iterator<Item = &CityGrowth> {
        self.cities.iter().rev().take_while(|c| c.increase < 0)
    }

    /// Cities with a positive percent increase, largest first.
    pub fn top_percent_increases(&self, n: usize) -> Vec<&CityGrowth> {
        let mut rows: Vec<&CityGrowth> = self
            .cities
            .iter()
            .filter(|c| c.percent_increase.is_some_and(|p| p > 0.0))
            .collect();
        rows.sort_by(|a, b| {
            let pa = a.percent_increase.unwrap_or_default();
            let pb = b.percent_increase.unwrap_or_default();
            pb.total_cmp(&pa).then_with(|| a.city.cmp(&b.city))
        });
        rows.truncate(n);
        rows
    }
}

/// `last - first`, clamped to the `i64` range.
fn signed_change(first: u64, last: u64) -> i64 {
    let change = i128::from(last) - i128::from(first);
    i64::try_from(change).unwrap_or(if change > 0 { i64::MAX } else { i64::MIN })
}

/// Compare each city's total at the earliest and latest report dates.
///
/// Cities missing from either report are left out. Returns `None` when no
/// record carries a date.
pub fn city_growth(zip: &[ZipRecord], min_baseline: u64) -> Option<GrowthReport> {
    let first_date = zip.iter().filter_map(|r| r.date).min()?;
    let last_date = zip.iter().filter_map(|r| r.date).max()?;

    let mut first_counts: BTreeMap<&str, u64> = BTreeMap::new();
    let mut last_counts: BTreeMap<&str, u64> = BTreeMap::new();
    for record in zip {
        if record.date == Some(first_date) {
            let count = first_counts.entry(&record.city_name).or_default();
            *count = count.saturating_add(record.count);
        }
        if record.date == Some(last_date) {
            let count = last_counts.entry(&record.city_name).or_default();
            *count = count.saturating_add(record.count);
        }
    }

    let mut cities: Vec<CityGrowth> = first_counts
        .into_iter()
        .filter_map(|(city, first)| {
            let last = *last_counts.get(city)?;
            let increase = signed_change(first, last);
            let percent_increase = (first >= min_baseline && first > 0)
                .then(|| increase as f64 / first as f64 * 100.0);
            Some(CityGrowth {
                city: city.to_string(),
                first,
                last,
                increase,
                percent_increase,
            })
        })
        .collect();
    cities.sort_by(|a, b| b.increase.cmp(&a.increase).then_with(|| a.city.cmp(&b.city)));

    Some(GrowthReport {
        first_date,
        last_date,
        cities,
    })
}
