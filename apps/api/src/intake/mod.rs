// Intake pipeline: accept a submission, label it, rank careers, keep it for
// the recommendation and admin views.

pub mod handlers;
pub mod insights;
pub mod store;
