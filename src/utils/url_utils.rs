/// Reduce a user-supplied site reference to a bare lowercase host.
///
/// `https://www.Example.com/blog?x=1` becomes `example.com`.
pub fn normalize_domain(input: &str) -> String {
    let trimmed = input.trim();
    let without_scheme = trimmed
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(trimmed);
    let host = without_scheme
        .split(|c: char| c == '/' || c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    let host = host.rsplit_once('@').map(|(_, h)| h).unwrap_or(host);
    let host = host.to_ascii_lowercase();
    host.strip_prefix("www.")
        .unwrap_or(&host)
        .trim_end_matches('.')
        .to_string()
}

pub fn site_url(domain: &str) -> String {
    format!("https://{}", normalize_domain(domain))
}
