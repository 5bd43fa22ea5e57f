use tracing::debug;
use url::Url;

use crate::rules::{registrable_domain, HostRuleTable};

/// Canonicalize a resolved URL against the host rule table
///
/// When the registrable domain has a rule, the host may be reduced to that
/// domain and, if the rule lists allowed parameters, the query is rebuilt
/// from those parameters only (first value each, in allow-list order).
/// URLs without a matching rule pass through unchanged.
pub fn canonicalize(url: &Url, rules: &HostRuleTable) -> Url {
    let Some(host) = url.host_str() else {
        return url.clone();
    };

    let domain = registrable_domain(host);
    let Some(rule) = rules.get(&domain) else {
        return url.clone();
    };

    let mut canonical = url.clone();

    if rule.strip_subdomains && host != domain {
        if let Err(e) = canonical.set_host(Some(domain.as_str())) {
            debug!("Keeping host {} for {}: {}", host, url, e);
        }
    }

    if let Some(allowed) = &rule.params {
        let kept: Vec<(String, String)> = allowed
            .iter()
            .filter_map(|key| {
                url.query_pairs()
                    .find(|(k, _)| &**k == key.as_str())
                    .map(|(_, v)| v.into_owned())
                    .filter(|v| !v.is_empty())
                    .map(|v| (key.clone(), v))
            })
            .collect();

        if kept.is_empty() {
            canonical.set_query(None);
        } else {
            canonical.query_pairs_mut().clear().extend_pairs(kept);
        }
    }

    canonical
}
