pub mod canonical;
pub mod domain;
pub mod host_rules;

pub use canonical::canonicalize;
pub use domain::{registrable_domain, simple_host};
pub use host_rules::{HostRule, HostRuleTable};
