mod admin;
mod citizen;
mod review_modal;
mod staff;
mod toast;

pub use admin::AdminView;
pub use citizen::CitizenView;
pub use review_modal::ReviewModal;
pub use staff::StaffView;
pub use toast::Toast;
