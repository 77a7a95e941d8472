//! Change detection between two polled snapshots.

use std::collections::HashMap;

use crate::records::Record;

/// Ids in `current` that are new or differ from their entry in `previous`.
///
/// Records that disappeared from `current` are not reported. Ids come back in
/// the order they appear in `current`.
pub fn changed_or_new(previous: &[Record], current: &[Record]) -> Vec<u32> {
    let before: HashMap<u32, &Record> = previous.iter().map(|r| (r.id, r)).collect();

    current
        .iter()
        .filter(|record| match before.get(&record.id) {
            Some(old) => *old != *record,
            None => true,
        })
        .map(|record| record.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::NodeStatus;

    fn batch(statuses: &[NodeStatus]) -> Vec<Record> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, s)| Record::new(i as u32 + 1, *s))
            .collect()
    }

    #[test]
    fn test_first_poll_reports_everything() {
        let current = batch(&[NodeStatus::Ok, NodeStatus::NotOk]);
        assert_eq!(changed_or_new(&[], &current), vec![1, 2]);
    }

    #[test]
    fn test_identical_snapshots_report_nothing() {
        let current = batch(&[NodeStatus::Ok, NodeStatus::Maintenance]);
        assert!(changed_or_new(&current, &current.clone()).is_empty());
    }

    #[test]
    fn test_status_change_and_growth() {
        let previous = batch(&[NodeStatus::Ok, NodeStatus::Ok]);
        let current = batch(&[NodeStatus::Ok, NodeStatus::NotOk, NodeStatus::Maintenance]);
        assert_eq!(changed_or_new(&previous, &current), vec![2, 3]);
    }

    #[test]
    fn test_shrinking_ignores_removed() {
        let previous = batch(&[NodeStatus::Ok, NodeStatus::Ok, NodeStatus::Ok]);
        let current = batch(&[NodeStatus::Ok]);
        assert!(changed_or_new(&previous, &current).is_empty());
    }
}
