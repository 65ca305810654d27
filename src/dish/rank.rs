use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::types::AntennaRecord;

/// Which status group leads the display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StatusOrder {
    #[default]
    OfflineFirst,
    OnlineFirst,
}

/// Order records by status. Records with equal status keep their relative order.
pub fn rank(mut records: Vec<AntennaRecord>, order: StatusOrder) -> Vec<AntennaRecord> {
    match order {
        StatusOrder::OfflineFirst => records.sort_by_key(|r| r.status()),
        StatusOrder::OnlineFirst => records.sort_by_key(|r| Reverse(r.status())),
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dish::DishStatus;

    fn record(name: &str, status: DishStatus) -> AntennaRecord {
        let mut record = AntennaRecord::placeholder(name, None);
        record.metadata.status = status;
        record
    }

    fn names(records: &[AntennaRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    fn sample() -> Vec<AntennaRecord> {
        vec![
            record("A", DishStatus::Online),
            record("B", DishStatus::Offline),
            record("C", DishStatus::Online),
            record("D", DishStatus::Offline),
        ]
    }

    #[test]
    fn offline_first_is_default_and_stable() {
        let ranked = rank(sample(), StatusOrder::default());
        assert_eq!(names(&ranked), ["B", "D", "A", "C"]);
    }

    #[test]
    fn online_first_is_stable() {
        let ranked = rank(sample(), StatusOrder::OnlineFirst);
        assert_eq!(names(&ranked), ["A", "C", "B", "D"]);
    }

    #[test]
    fn config_names() {
        let order: StatusOrder = serde_yaml::from_str("online_first").unwrap();
        assert_eq!(order, StatusOrder::OnlineFirst);
    }
}
