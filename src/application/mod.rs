//! Application layer orchestrating a donation attempt.
//!
//! `SubmissionController` owns the submission state machine and talks to the
//! collaborator ports, `OutcomePresenter` turns terminal states into views,
//! and `DonationPage` ties the editable form to the controller the way a
//! mounted page would.

pub mod controller;
pub mod outcome;
pub mod page;
