use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::browser::{watch_performance, PerformanceWatch};
use crate::vitals::{
    first_contentful_paint, first_input_delays, largest_contentful_paint, load_timing,
    time_to_first_byte, ClsAccumulator, LOAD_BUDGET_MS, Metric, PerfEntry, Rating, Report, ThresholdTable,
};

fn decode(entries: Vec<JsValue>) -> Vec<PerfEntry> {
    entries
        .into_iter()
        .filter_map(|entry| match serde_wasm_bindgen::from_value::<PerfEntry>(entry) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping unreadable performance entry: {}", e);
                None
            }
        })
        .collect()
}

fn report(table: &ThresholdTable, metric: Metric, value: f64) {
    let report = Report::new(table, metric, value);
    let json = serde_json::to_string(&report).unwrap_or_default();
    if cfg!(debug_assertions) {
        gloo_console::log!("Web Vital:", json.clone());
    }
    if report.rating != Rating::Good {
        warn!("{} needs improvement: {}", metric, json);
    }
}

/// Logs LCP, FID, CLS, FCP and TTFB ratings and the page load budget for the
/// lifetime of the calling component.
#[hook]
pub fn use_web_vitals(table: ThresholdTable) {
    use_effect_with_deps(
        move |_| {
            let table = Rc::new(table);
            let mut watches: Vec<PerformanceWatch> = Vec::new();

            let lcp = {
                let table = table.clone();
                watch_performance("largest-contentful-paint", move |entries| {
                    if let Some(value) = largest_contentful_paint(&decode(entries)) {
                        report(&table, Metric::Lcp, value);
                    }
                })
            };
            let fid = {
                let table = table.clone();
                watch_performance("first-input", move |entries| {
                    for delay in first_input_delays(&decode(entries)) {
                        report(&table, Metric::Fid, delay);
                    }
                })
            };
            let cls = {
                let table = table.clone();
                let mut total = ClsAccumulator::default();
                watch_performance("layout-shift", move |entries| {
                    let value = total.add(&decode(entries));
                    report(&table, Metric::Cls, value);
                })
            };

            let fcp = {
                let table = table.clone();
                watch_performance("paint", move |entries| {
                    if let Some(value) = first_contentful_paint(&decode(entries)) {
                        report(&table, Metric::Fcp, value);
                    }
                })
            };
            let ttfb = {
                let table = table.clone();
                watch_performance("navigation", move |entries| {
                    let entries = decode(entries);
                    if let Some(value) = time_to_first_byte(&entries) {
                        report(&table, Metric::Ttfb, value);
                    }
                    if let Some(timing) = load_timing(&entries) {
                        info!(
                            "Page loaded in {}ms, DOMContentLoaded after {}ms",
                            timing.load_time, timing.dom_content_loaded
                        );
                        if timing.over_budget() {
                            warn!("Page load time {}ms exceeds the {}ms budget", timing.load_time, LOAD_BUDGET_MS);
                        }
                    }
                })
            };

            for (metric, watch) in [
                (Metric::Lcp, lcp),
                (Metric::Fid, fid),
                (Metric::Cls, cls),
                (Metric::Fcp, fcp),
                (Metric::Ttfb, ttfb),
            ] {
                match watch {
                    Ok(watch) => watches.push(watch),
                    Err(e) => warn!("{} monitoring not supported: {}", metric, e),
                }
            }

            move || drop(watches)
        },
        (),
    );
}
