use crate::item::{Status, WorkItem};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatFigure {
    pub label: String,
    pub value: String,
}

/// Fixed dashboard content for the admin view. Display data only; the
/// admin view has no operations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminSummary {
    pub stats: Vec<StatFigure>,
    pub spotlight: Vec<WorkItem>,
}

impl AdminSummary {
    pub fn demo() -> Self {
        let stats = [
            ("Total Issues", "1,245"),
            ("Resolved Issues", "987"),
            ("Pending Issues", "258"),
            ("Staff on Duty", "45"),
            ("New Reports (Today)", "22"),
            ("Predictive Insights", "High demand in Q4"),
        ]
        .into_iter()
        .map(|(label, value)| StatFigure {
            label: label.to_string(),
            value: value.to_string(),
        })
        .collect();

        let spotlight = vec![
            WorkItem {
                id: 1,
                title: "Broken Streetlight".to_string(),
                status: Status::Pending,
                description: "Streetlight on khradi is not working, reported by citizen."
                    .to_string(),
                category: "Infrastructure".to_string(),
                time_ago: "1 hour ago".to_string(),
                attachment: None,
            },
            WorkItem {
                id: 2,
                title: "Water Leakage".to_string(),
                status: Status::InProgress,
                description: "Leak in the main water pipe on highstreet".to_string(),
                category: "Utilities".to_string(),
                time_ago: "3 hours ago".to_string(),
                attachment: None,
            },
        ];

        Self { stats, spotlight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_summary_carries_the_fixed_figures() {
        let summary = AdminSummary::demo();
        assert_eq!(summary.stats.len(), 6);
        assert_eq!(summary.stats[0].label, "Total Issues");
        assert_eq!(summary.spotlight.len(), 2);
        assert_eq!(summary.spotlight[0].status, Status::Pending);
        assert_eq!(summary.spotlight[1].status, Status::InProgress);
    }
}
