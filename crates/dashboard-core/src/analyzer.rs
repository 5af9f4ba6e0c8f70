// File: crates/dashboard-core/src/analyzer.rs
// Summary: Aggregate metrics over a dataset; empty input yields an explicit notice instead of NaN.

use std::collections::{BTreeMap, HashSet};
use tracing::debug;

use crate::record::{Category, Dataset};

#[derive(Clone, Debug, PartialEq)]
pub struct Metrics {
    pub row_count: usize,
    pub total_value: f64,
    pub avg_value: f64,
    pub total_quantity: u64,
    pub unique_customers: usize,
    /// Categories present in the dataset, by descending count then label.
    pub category_distribution: Vec<(Category, usize)>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Analysis {
    Metrics(Metrics),
    /// No records to aggregate; the mean is undefined.
    EmptyDataset,
}

impl Analysis {
    pub fn metrics(&self) -> Option<&Metrics> {
        match self {
            Analysis::Metrics(m) => Some(m),
            Analysis::EmptyDataset => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Analysis::EmptyDataset)
    }
}

pub fn analyze(dataset: &Dataset) -> Analysis {
    if dataset.is_empty() {
        debug!("analysis skipped: empty dataset");
        return Analysis::EmptyDataset;
    }

    let mut total_value = 0.0f64;
    let mut total_quantity = 0u64;
    let mut customers = HashSet::new();
    let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
    for r in dataset {
        total_value += r.value;
        total_quantity += u64::from(r.quantity);
        customers.insert(r.customer_id);
        *counts.entry(r.category).or_default() += 1;
    }

    let mut category_distribution: Vec<(Category, usize)> = counts.into_iter().collect();
    // stable sort keeps label order among equal counts
    category_distribution.sort_by(|a, b| b.1.cmp(&a.1));

    let row_count = dataset.len();
    let metrics = Metrics {
        row_count,
        total_value,
        avg_value: total_value / row_count as f64,
        total_quantity,
        unique_customers: customers.len(),
        category_distribution,
    };
    debug!(rows = row_count, total_value, unique = metrics.unique_customers, "analyzed dataset");
    Analysis::Metrics(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use chrono::NaiveDate;

    fn rec(day: u32, category: Category, value: f64, quantity: u32, customer_id: u32) -> Record {
        Record {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            category,
            value,
            quantity,
            customer_id,
        }
    }

    #[test]
    fn distribution_orders_by_count_then_label() {
        let ds = Dataset::from_records(vec![
            rec(1, Category::D, 1.0, 1, 1000),
            rec(2, Category::B, 1.0, 1, 1000),
            rec(3, Category::D, 1.0, 1, 1000),
            rec(4, Category::A, 1.0, 1, 1000),
        ]);
        let m = analyze(&ds);
        let m = m.metrics().unwrap();
        assert_eq!(
            m.category_distribution,
            vec![(Category::D, 2), (Category::A, 1), (Category::B, 1)]
        );
        assert!(m.category_distribution.iter().all(|(c, _)| *c != Category::C));
    }

    #[test]
    fn empty_dataset_is_a_notice() {
        let a = analyze(&Dataset::default());
        assert!(a.is_empty());
        assert!(a.metrics().is_none());
    }
}
