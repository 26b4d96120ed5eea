//! Core Web Vitals classification.
//!
//! Thresholds live in an immutable [`ThresholdTable`]; [`rate`] is a pure
//! lookup so the same table can be used from tests and the browser observer.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Metric {
    Cls,
    Fid,
    Fcp,
    Lcp,
    Ttfb,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Cls => "CLS",
            Metric::Fid => "FID",
            Metric::Fcp => "FCP",
            Metric::Lcp => "LCP",
            Metric::Ttfb => "TTFB",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Good,
    NeedsImprovement,
    Poor,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Threshold {
    pub good: f64,
    pub poor: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdTable {
    pub cls: Threshold,
    pub fid: Threshold,
    pub fcp: Threshold,
    pub lcp: Threshold,
    pub ttfb: Threshold,
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            cls: Threshold { good: 0.1, poor: 0.25 },
            fid: Threshold { good: 100.0, poor: 300.0 },
            fcp: Threshold { good: 1800.0, poor: 3000.0 },
            lcp: Threshold { good: 2500.0, poor: 4000.0 },
            ttfb: Threshold { good: 800.0, poor: 1800.0 },
        }
    }
}

impl ThresholdTable {
    pub fn get(&self, metric: Metric) -> Threshold {
        match metric {
            Metric::Cls => self.cls,
            Metric::Fid => self.fid,
            Metric::Fcp => self.fcp,
            Metric::Lcp => self.lcp,
            Metric::Ttfb => self.ttfb,
        }
    }
}

pub fn rate(table: &ThresholdTable, metric: Metric, value: f64) -> Rating {
    let threshold = table.get(metric);
    if value > threshold.poor {
        Rating::Poor
    } else if value > threshold.good {
        Rating::NeedsImprovement
    } else {
        Rating::Good
    }
}

/// A rated measurement, logged as JSON.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub name: Metric,
    pub value: f64,
    pub rating: Rating,
    pub threshold: Threshold,
}

impl Report {
    pub fn new(table: &ThresholdTable, name: Metric, value: f64) -> Self {
        Self { name, value, rating: rate(table, name, value), threshold: table.get(name) }
    }
}

/// The fields of a `PerformanceEntry` (and its subtypes) the metrics need.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerfEntry {
    pub name: String,
    pub start_time: f64,
    pub response_start: Option<f64>,
    pub processing_start: Option<f64>,
    pub value: Option<f64>,
    pub had_recent_input: bool,
    pub fetch_start: Option<f64>,
    pub dom_content_loaded_event_end: Option<f64>,
    pub load_event_end: Option<f64>,
}

pub fn largest_contentful_paint(entries: &[PerfEntry]) -> Option<f64> {
    entries.last().map(|entry| entry.start_time)
}

pub fn first_contentful_paint(entries: &[PerfEntry]) -> Option<f64> {
    entries
        .iter()
        .find(|entry| entry.name == "first-contentful-paint")
        .map(|entry| entry.start_time)
}

/// Navigation entries are relative to navigation start, so `responseStart` is TTFB.
pub fn time_to_first_byte(entries: &[PerfEntry]) -> Option<f64> {
    entries.iter().find_map(|entry| entry.response_start)
}

/// Page loads slower than this are logged as a warning.
pub const LOAD_BUDGET_MS: f64 = 3000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadTiming {
    pub load_time: f64,
    pub dom_content_loaded: f64,
}

impl LoadTiming {
    pub fn over_budget(&self) -> bool {
        self.load_time > LOAD_BUDGET_MS
    }
}

/// Load and DOMContentLoaded durations from the first finished navigation
/// entry, both measured from `fetchStart`. `loadEventEnd` is 0 until the
/// load event is over.
pub fn load_timing(entries: &[PerfEntry]) -> Option<LoadTiming> {
    entries.iter().find_map(|entry| {
        let fetch_start = entry.fetch_start?;
        let load_end = entry.load_event_end.filter(|&end| end > 0.0)?;
        Some(LoadTiming {
            load_time: load_end - fetch_start,
            dom_content_loaded: entry.dom_content_loaded_event_end.unwrap_or(fetch_start) - fetch_start,
        })
    })
}

pub fn first_input_delays(entries: &[PerfEntry]) -> impl Iterator<Item = f64> + '_ {
    entries
        .iter()
        .filter_map(|entry| entry.processing_start.map(|start| start - entry.start_time))
}

/// Running layout-shift total; shifts right after user input don't count.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClsAccumulator {
    total: f64,
}

impl ClsAccumulator {
    pub fn add(&mut self, entries: &[PerfEntry]) -> f64 {
        self.total += entries
            .iter()
            .filter(|entry| !entry.had_recent_input)
            .filter_map(|entry| entry.value)
            .sum::<f64>();
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_on_the_good_side() {
        let table = ThresholdTable::default();
        assert_eq!(rate(&table, Metric::Lcp, 2500.0), Rating::Good);
        assert_eq!(rate(&table, Metric::Lcp, 2500.1), Rating::NeedsImprovement);
        assert_eq!(rate(&table, Metric::Lcp, 4000.0), Rating::NeedsImprovement);
        assert_eq!(rate(&table, Metric::Lcp, 4000.1), Rating::Poor);
    }

    #[test]
    fn each_metric_uses_its_own_row() {
        let table = ThresholdTable::default();
        assert_eq!(rate(&table, Metric::Cls, 0.2), Rating::NeedsImprovement);
        assert_eq!(rate(&table, Metric::Fid, 0.2), Rating::Good);
        assert_eq!(rate(&table, Metric::Ttfb, 2000.0), Rating::Poor);
        assert_eq!(rate(&table, Metric::Fcp, 1000.0), Rating::Good);
    }

    #[test]
    fn custom_table() {
        let table = ThresholdTable {
            lcp: Threshold { good: 1000.0, poor: 2000.0 },
            ..ThresholdTable::default()
        };
        assert_eq!(rate(&table, Metric::Lcp, 1500.0), Rating::NeedsImprovement);
    }

    #[test]
    fn lcp_takes_the_last_entry() {
        let entries = [
            PerfEntry { start_time: 900.0, ..Default::default() },
            PerfEntry { start_time: 1700.0, ..Default::default() },
        ];
        assert_eq!(largest_contentful_paint(&entries), Some(1700.0));
        assert_eq!(largest_contentful_paint(&[]), None);
    }

    #[test]
    fn fcp_ignores_other_paints() {
        let entries = [
            PerfEntry { name: "first-paint".into(), start_time: 300.0, ..Default::default() },
            PerfEntry { name: "first-contentful-paint".into(), start_time: 420.0, ..Default::default() },
        ];
        assert_eq!(first_contentful_paint(&entries), Some(420.0));
        assert_eq!(first_contentful_paint(&entries[..1]), None);
    }

    #[test]
    fn ttfb_reads_response_start() {
        let entry: PerfEntry = serde_json::from_str(
            r#"{"name":"https://example.test/","entryType":"navigation","startTime":0,"responseStart":640.5}"#,
        )
        .unwrap();
        assert_eq!(time_to_first_byte(&[entry]), Some(640.5));
    }

    #[test]
    fn load_timing_is_relative_to_fetch_start() {
        let entry: PerfEntry = serde_json::from_str(
            r#"{"entryType":"navigation","startTime":0,"fetchStart":12,"domContentLoadedEventEnd":812,"loadEventEnd":3412}"#,
        )
        .unwrap();
        let timing = load_timing(&[entry]);
        assert_eq!(timing, Some(LoadTiming { load_time: 3400.0, dom_content_loaded: 800.0 }));
        assert!(timing.is_some_and(|t| t.over_budget()));
    }

    #[test]
    fn load_budget_boundary() {
        assert!(!LoadTiming { load_time: 3000.0, dom_content_loaded: 0.0 }.over_budget());
        assert!(LoadTiming { load_time: 3000.5, dom_content_loaded: 0.0 }.over_budget());
    }

    #[test]
    fn unfinished_load_has_no_timing() {
        let entry = PerfEntry { fetch_start: Some(5.0), load_event_end: Some(0.0), ..Default::default() };
        assert_eq!(load_timing(&[entry]), None);
        assert_eq!(load_timing(&[]), None);
    }

    #[test]
    fn fid_is_processing_delay() {
        let entries = [PerfEntry { start_time: 10.0, processing_start: Some(52.0), ..Default::default() }];
        assert_eq!(first_input_delays(&entries).collect::<Vec<_>>(), vec![42.0]);
    }

    #[test]
    fn cls_skips_recent_input() {
        let mut cls = ClsAccumulator::default();
        cls.add(&[
            PerfEntry { value: Some(0.05), ..Default::default() },
            PerfEntry { value: Some(0.5), had_recent_input: true, ..Default::default() },
        ]);
        let total = cls.add(&[PerfEntry { value: Some(0.25), ..Default::default() }]);
        assert!((total - 0.3).abs() < 1e-9);
    }

    #[test]
    fn entries_decode_from_camel_case_json() {
        let entry: PerfEntry = serde_json::from_str(
            r#"{"name":"","entryType":"layout-shift","startTime":12.5,"value":0.01,"hadRecentInput":false}"#,
        )
        .unwrap();
        assert_eq!(entry.start_time, 12.5);
        assert_eq!(entry.value, Some(0.01));
        assert!(!entry.had_recent_input);
    }

    #[test]
    fn report_serializes_rating_in_kebab_case() {
        let report = Report::new(&ThresholdTable::default(), Metric::Cls, 0.2);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["name"], "CLS");
        assert_eq!(json["rating"], "needs-improvement");
    }
}
