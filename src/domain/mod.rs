//! Domain model of the donation intake flow.
//!
//! Pure state containers for the form sub-state, the submission state
//! machine, and the ports through which the flow reaches its collaborators.

pub mod amount;
pub mod donor;
pub mod form;
pub mod payment_method;
pub mod ports;
pub mod request;
pub mod state;
