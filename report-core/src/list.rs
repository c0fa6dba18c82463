use crate::item::{EncodedImage, Status, WorkItem};
use serde::{Deserialize, Serialize};

pub const EMPTY_SUBMISSION: &str = "Please enter a title, description, or attach a photo.";

const PLACEHOLDER_TITLE: &str = "Citizen Report";

/// A pending submission, assembled by a role view before it is committed.
#[derive(Clone, Debug, Default)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub attachment: Option<EncodedImage>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

/// Ordered in-memory collection of one role's items. Items are only ever
/// appended; status and attachment are the only fields mutated afterwards.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReportList {
    items: Vec<WorkItem>,
}

impl ReportList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<WorkItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&WorkItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a new Pending item and returns its id. A draft with no
    /// title, no description, and no attachment is rejected and the list
    /// is left unchanged. Ids are `len + 1`; nothing is ever deleted, so
    /// they stay unique and strictly increasing.
    pub fn submit(&mut self, draft: Draft) -> Result<u32, String> {
        let title = draft.title.trim();
        let description = draft.description.trim();
        if title.is_empty() && description.is_empty() && draft.attachment.is_none() {
            return Err(EMPTY_SUBMISSION.to_string());
        }

        let id = self.items.len() as u32 + 1;
        self.items.push(WorkItem {
            id,
            title: if title.is_empty() {
                PLACEHOLDER_TITLE.to_string()
            } else {
                title.to_string()
            },
            status: Status::Pending,
            description: description.to_string(),
            category: draft.category,
            time_ago: "Just now".to_string(),
            attachment: draft.attachment,
        });
        Ok(id)
    }

    /// Replaces status and attachment on the matching item. Ids only
    /// reach this through the review dialog, so a miss is an internal
    /// invariant violation rather than a user mistake.
    pub fn update_status(
        &mut self,
        id: u32,
        status: Status,
        attachment: Option<EncodedImage>,
    ) -> Result<(), String> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return Err(format!("no item with id {id}"));
        };
        item.status = status;
        item.attachment = attachment;
        Ok(())
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for item in &self.items {
            match item.status {
                Status::Pending => counts.pending += 1,
                Status::InProgress => counts.in_progress += 1,
                Status::Resolved => counts.resolved += 1,
            }
        }
        counts
    }

    pub fn citizen_seed() -> Self {
        Self::with_items(vec![
            seed_item(
                1,
                "Pothole Repair",
                Status::InProgress,
                "A large pothole on Main St. causing traffic issues.",
                "Roads",
                "2 days ago",
            ),
            seed_item(
                2,
                "Streetlight Repair",
                Status::Pending,
                "Streetlight #27 is not working near market area.",
                "Electricity",
                "5 hours ago",
            ),
            seed_item(
                3,
                "Water Leakage",
                Status::Resolved,
                "Leakage fixed near High Street pipe.",
                "Water Supply",
                "1 day ago",
            ),
        ])
    }

    pub fn staff_seed() -> Self {
        Self::with_items(vec![
            seed_item(
                1,
                "Repair Streetlight",
                Status::InProgress,
                "Streetlight #15 requires a bulb replacement.",
                "Kharadi",
                "",
            ),
            seed_item(
                2,
                "Fix Water Leak",
                Status::Pending,
                "Major water leakage from main pipe.",
                "High Street",
                "",
            ),
            seed_item(
                3,
                "Garbage Collection Delay",
                Status::Resolved,
                "Garbage pickup delayed for 2 days.",
                "MG Road",
                "",
            ),
        ])
    }
}

fn seed_item(
    id: u32,
    title: &str,
    status: Status,
    description: &str,
    category: &str,
    time_ago: &str,
) -> WorkItem {
    WorkItem {
        id,
        title: title.to_string(),
        status,
        description: description.to_string(),
        category: category.to_string(),
        time_ago: time_ago.to_string(),
        attachment: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_empty_draft_is_rejected() {
        let mut list = ReportList::citizen_seed();
        let before = list.len();

        let err = list.submit(Draft::default()).expect_err("rejected");
        assert_eq!(err, EMPTY_SUBMISSION);
        assert_eq!(list.len(), before);
    }

    #[test]
    fn whitespace_only_draft_is_rejected() {
        let mut list = ReportList::new();
        let err = list
            .submit(Draft {
                title: "   ".into(),
                description: "\n\t".into(),
                ..Draft::default()
            })
            .expect_err("rejected");
        assert_eq!(err, EMPTY_SUBMISSION);
        assert!(list.is_empty());
    }

    #[test]
    fn description_only_draft_gets_placeholder_title() {
        let mut list = ReportList::new();
        let id = list
            .submit(Draft {
                description: "Overflowing bin outside the library.".into(),
                category: "Citizen".into(),
                ..Draft::default()
            })
            .expect("submit");

        let item = list.get(id).expect("item");
        assert_eq!(item.title, "Citizen Report");
        assert_eq!(item.status, Status::Pending);
        assert_eq!(item.time_ago, "Just now");
    }

    #[test]
    fn attachment_only_draft_is_accepted() {
        let mut list = ReportList::new();
        let id = list
            .submit(Draft {
                attachment: Some(EncodedImage::new("data:image/png;base64,AAAA")),
                ..Draft::default()
            })
            .expect("submit");

        let item = list.get(id).expect("item");
        assert_eq!(item.title, "Citizen Report");
        assert!(item.attachment.is_some());
    }

    #[test]
    fn ids_increase_from_seed_count() {
        let mut list = ReportList::citizen_seed();

        let mut ids = Vec::new();
        for n in 0..3 {
            ids.push(
                list.submit(Draft {
                    title: format!("Issue {n}"),
                    description: "details".into(),
                    ..Draft::default()
                })
                .expect("submit"),
            );
        }

        assert_eq!(ids, vec![4, 5, 6]);
        assert_eq!(list.len(), 6);
        let mut seen: Vec<u32> = list.items().iter().map(|i| i.id).collect();
        let unsorted = seen.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 6);
        assert_eq!(unsorted, seen, "append order keeps ids strictly increasing");
    }

    #[test]
    fn update_status_replaces_status_and_attachment() {
        let mut list = ReportList::staff_seed();
        let proof = EncodedImage::new("data:image/png;base64,BBBB");

        list.update_status(2, Status::Resolved, Some(proof.clone()))
            .expect("update");

        let item = list.get(2).expect("item");
        assert_eq!(item.status, Status::Resolved);
        assert_eq!(item.attachment, Some(proof));
    }

    #[test]
    fn update_status_with_unknown_id_is_an_error() {
        let mut list = ReportList::staff_seed();
        let before = list.items().to_vec();

        let err = list
            .update_status(99, Status::Resolved, None)
            .expect_err("unknown id");
        assert!(err.contains("99"));
        assert_eq!(list.items(), &before[..]);
    }

    #[test]
    fn status_counts_are_order_independent() {
        let expected = StatusCounts {
            pending: 2,
            in_progress: 1,
            resolved: 0,
        };

        let forward = ReportList::with_items(vec![
            seed_item(1, "a", Status::Pending, "", "", ""),
            seed_item(2, "b", Status::Pending, "", "", ""),
            seed_item(3, "c", Status::InProgress, "", "", ""),
        ]);
        let shuffled = ReportList::with_items(vec![
            seed_item(1, "c", Status::InProgress, "", "", ""),
            seed_item(2, "a", Status::Pending, "", "", ""),
            seed_item(3, "b", Status::Pending, "", "", ""),
        ]);

        assert_eq!(forward.status_counts(), expected);
        assert_eq!(shuffled.status_counts(), expected);
    }
}
