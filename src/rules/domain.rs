use std::net::IpAddr;

/// Reduce a hostname to its registrable domain (public suffix plus one label)
///
/// `www.youtube.com` becomes `youtube.com`, `news.bbc.co.uk` becomes
/// `bbc.co.uk`. Hosts without a registrable part (IP addresses, `localhost`,
/// bare suffixes) come back unchanged.
pub fn registrable_domain(host: &str) -> String {
    let host = host.to_lowercase();

    if host.parse::<IpAddr>().is_ok() {
        return host;
    }

    match psl::domain_str(&host) {
        Some(domain) => domain.to_string(),
        None => host,
    }
}

/// Host with a single leading `www.` removed, used for display
pub fn simple_host(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}
