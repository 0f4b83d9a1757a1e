//! Admin dashboard module.
//!
//! Contains the product form workflow, notifications, and summary stats.

pub mod notification;
mod stats;
mod workflow;

pub use notification::{Notification, NotificationLevel};
pub use stats::{DashboardStats, NO_PRODUCT_LABEL};
pub use workflow::{AdminWorkflow, FormState};
