use crate::item::{EncodedImage, Status, WorkItem};
use crate::list::ReportList;
use serde::{Deserialize, Serialize};

/// A copy of one item's reviewable state, taken when the dialog opens.
/// Edits land here; the list itself stays untouched until `confirm`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedEdit {
    pub item_id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub status: Status,
    pub proof: Option<EncodedImage>,
}

impl StagedEdit {
    pub fn from_item(item: &WorkItem) -> Self {
        Self {
            item_id: item.id,
            title: item.title.clone(),
            category: item.category.clone(),
            description: item.description.clone(),
            status: item.status,
            proof: item.attachment.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewDialog {
    #[default]
    Closed,
    Editing(StagedEdit),
}

impl ReviewDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, ReviewDialog::Editing(_))
    }

    pub fn staged(&self) -> Option<&StagedEdit> {
        match self {
            ReviewDialog::Closed => None,
            ReviewDialog::Editing(staged) => Some(staged),
        }
    }

    pub fn open(&mut self, item: &WorkItem) {
        *self = ReviewDialog::Editing(StagedEdit::from_item(item));
    }

    pub fn cancel(&mut self) {
        *self = ReviewDialog::Closed;
    }

    pub fn set_status(&mut self, status: Status) {
        if let ReviewDialog::Editing(staged) = self {
            staged.status = status;
        }
    }

    pub fn set_proof(&mut self, proof: Option<EncodedImage>) {
        if let ReviewDialog::Editing(staged) = self {
            staged.proof = proof;
        }
    }

    /// Commits the staged status and proof back to the list and closes
    /// the dialog. The dialog closes even when the commit fails; the
    /// caller surfaces the error.
    pub fn confirm(&mut self, list: &mut ReportList) -> Result<(), String> {
        let ReviewDialog::Editing(staged) = std::mem::take(self) else {
            return Err("no review in progress".to_string());
        };
        list.update_status(staged.item_id, staged.status, staged.proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_leaves_the_item_untouched() {
        let mut list = ReportList::staff_seed();
        let before = list.get(2).expect("item").clone();

        let mut dialog = ReviewDialog::default();
        dialog.open(&before);
        dialog.set_status(Status::Resolved);
        dialog.set_proof(Some(EncodedImage::new("data:image/png;base64,CCCC")));
        dialog.cancel();

        assert!(!dialog.is_open());
        assert_eq!(list.get(2).expect("item"), &before);
    }

    #[test]
    fn confirm_updates_only_the_selected_item() {
        let mut list = ReportList::staff_seed();
        let others: Vec<_> = list
            .items()
            .iter()
            .filter(|i| i.id != 2)
            .cloned()
            .collect();

        let mut dialog = ReviewDialog::default();
        dialog.open(list.get(2).expect("item"));
        dialog.set_status(Status::Resolved);
        dialog.confirm(&mut list).expect("confirm");

        let updated = list.get(2).expect("item");
        assert_eq!(updated.status, Status::Resolved);
        assert_eq!(updated.status.css_class(), "status-resolved");
        let others_after: Vec<_> = list
            .items()
            .iter()
            .filter(|i| i.id != 2)
            .cloned()
            .collect();
        assert_eq!(others_after, others);
        assert!(!dialog.is_open());
    }

    #[test]
    fn staged_proof_commits_with_the_status() {
        let mut list = ReportList::staff_seed();
        let proof = EncodedImage::new("data:image/png;base64,DDDD");

        let mut dialog = ReviewDialog::default();
        dialog.open(list.get(1).expect("item"));
        dialog.set_proof(Some(proof.clone()));
        dialog.confirm(&mut list).expect("confirm");

        assert_eq!(list.get(1).expect("item").attachment, Some(proof));
    }

    #[test]
    fn confirm_without_an_open_review_is_an_error() {
        let mut list = ReportList::staff_seed();
        let mut dialog = ReviewDialog::default();

        dialog.confirm(&mut list).expect_err("closed dialog");
    }

    #[test]
    fn edits_on_a_closed_dialog_are_ignored() {
        let mut dialog = ReviewDialog::default();
        dialog.set_status(Status::Resolved);
        dialog.set_proof(Some(EncodedImage::new("data:image/png;base64,EEEE")));
        assert_eq!(dialog, ReviewDialog::Closed);
    }
}
