pub mod resolution;

pub use resolution::{do_engagement, resolve_engagement, EngagementReport, EngagementRules};
