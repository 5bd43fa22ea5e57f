use std::collections::HashMap;

use regex::Regex;

use crate::errors::{LinkfeedError, LinkfeedResult};

/// Plain-data description of a built-in rule
struct RuleSpec {
    domain: &'static str,
    strip_subdomains: bool,
    params: Option<&'static [&'static str]>,
    prefix: Option<&'static str>,
    title_pattern: Option<&'static str>,
}

/// Per-site rules, keyed by registrable domain
const BUILTIN_RULES: &[RuleSpec] = &[
    RuleSpec {
        domain: "youtube.com",
        strip_subdomains: true,
        params: Some(&["v", "list"]),
        prefix: Some("📺"),
        title_pattern: None,
    },
    RuleSpec {
        domain: "substack.com",
        // Subdomains are separate publications
        strip_subdomains: false,
        params: None,
        prefix: Some("🟧"),
        title_pattern: None,
    },
    RuleSpec {
        domain: "x.com",
        strip_subdomains: true,
        params: Some(&[]),
        prefix: Some("𝕏"),
        // Captures the account handle
        title_pattern: Some(r"^https://x\.com/([^/?]+)(?:/status/)?[^/]*$"),
    },
];

#[derive(Debug, Clone, Default)]
pub struct HostRule {
    /// Rewrite the host to the registrable domain when canonicalizing
    pub strip_subdomains: bool,
    /// Query parameters kept during canonicalization, in output order.
    /// `None` leaves the query alone; an empty list drops it entirely.
    pub params: Option<Vec<String>>,
    pub prefix: Option<String>,
    pub title_pattern: Option<Regex>,
}

impl HostRule {
    pub fn with_strip_subdomains(mut self, strip: bool) -> Self {
        self.strip_subdomains = strip;
        self
    }

    pub fn with_params(mut self, params: &[&str]) -> Self {
        self.params = Some(params.iter().map(|p| p.to_string()).collect());
        self
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    pub fn with_title_pattern(mut self, pattern: &str) -> LinkfeedResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            LinkfeedError::Config(format!("invalid title pattern '{}': {}", pattern, e))
        })?;
        self.title_pattern = Some(regex);
        Ok(self)
    }

    /// Derive a title from the first capture group of the title pattern
    pub fn title_from_url(&self, url: &str) -> Option<String> {
        let caps = self.title_pattern.as_ref()?.captures(url)?;
        caps.get(1)
            .map(|m| m.as_str().to_string())
            .filter(|title| !title.is_empty())
    }

    /// Prepend the decorative prefix, separated by one space
    pub fn decorate(&self, title: &str) -> String {
        match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => format!("{} {}", prefix, title),
            _ => title.to_string(),
        }
    }
}

/// Immutable lookup table of host rules, built once at startup
#[derive(Debug, Clone, Default)]
pub struct HostRuleTable {
    rules: HashMap<String, HostRule>,
}

impl HostRuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table of rules shipped with the tool
    pub fn builtin() -> LinkfeedResult<Self> {
        let mut table = Self::new();

        for spec in BUILTIN_RULES {
            let mut rule = HostRule::default().with_strip_subdomains(spec.strip_subdomains);
            if let Some(params) = spec.params {
                rule = rule.with_params(params);
            }
            if let Some(prefix) = spec.prefix {
                rule = rule.with_prefix(prefix);
            }
            if let Some(pattern) = spec.title_pattern {
                rule = rule.with_title_pattern(pattern)?;
            }
            table.insert(spec.domain, rule);
        }

        Ok(table)
    }

    pub fn insert(&mut self, domain: &str, rule: HostRule) {
        self.rules.insert(domain.to_lowercase(), rule);
    }

    /// Look up by registrable domain; a miss means no special handling
    pub fn get(&self, domain: &str) -> Option<&HostRule> {
        self.rules.get(domain)
    }
}
