use crate::list::ReportList;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleView {
    #[default]
    Citizen,
    Admin,
    Staff,
}

impl RoleView {
    pub const ALL: [RoleView; 3] = [RoleView::Citizen, RoleView::Admin, RoleView::Staff];

    pub fn label(self) -> &'static str {
        match self {
            RoleView::Citizen => "Citizen",
            RoleView::Admin => "Admin",
            RoleView::Staff => "Staff",
        }
    }
}

/// Root application state: which role view is mounted plus each role's
/// independent list. Lives for the page session only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Shell {
    pub active: RoleView,
    pub citizen: ReportList,
    pub staff: ReportList,
}

impl Shell {
    pub fn demo() -> Self {
        Self {
            active: RoleView::Citizen,
            citizen: ReportList::citizen_seed(),
            staff: ReportList::staff_seed(),
        }
    }

    /// Direct assignment: no guards, no transition side effects.
    pub fn switch_to(&mut self, view: RoleView) {
        self.active = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_views_never_touches_list_state() {
        let mut shell = Shell::demo();
        let citizen_before = shell.citizen.items().to_vec();
        let staff_before = shell.staff.items().to_vec();

        for view in [
            RoleView::Staff,
            RoleView::Admin,
            RoleView::Citizen,
            RoleView::Admin,
        ] {
            shell.switch_to(view);
        }

        assert_eq!(shell.active, RoleView::Admin);
        assert_eq!(shell.citizen.items(), &citizen_before[..]);
        assert_eq!(shell.staff.items(), &staff_before[..]);
    }

    #[test]
    fn demo_shell_starts_on_the_citizen_view() {
        let shell = Shell::demo();
        assert_eq!(shell.active, RoleView::Citizen);
        assert_eq!(shell.citizen.len(), 3);
        assert_eq!(shell.staff.len(), 3);
    }
}
