//! Best-effort normalisation of free-text input into a bare domain.
use url::Url;

/// Reduce a URL, email address, or bare domain to a canonical domain:
/// lower-cased host, no scheme, no leading `www.`.
///
/// Returns `None` when the input is empty or an email with nothing after the
/// `@`. A string that fails URL parsing is assumed to already be a domain and
/// is returned trimmed, with any leading `www.` stripped.
pub fn extract_domain(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    // Emails: everything after the first '@'.
    if let Some((_, after)) = input.split_once('@') {
        if after.is_empty() {
            return None;
        }
        return Some(after.to_ascii_lowercase());
    }

    // URLs: assume https when no scheme is given, then take the host.
    let with_scheme = if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    };

    if let Ok(url) = Url::parse(&with_scheme) {
        if let Some(host) = url.host_str() {
            return Some(strip_www(&host.to_ascii_lowercase()).to_string());
        }
    }

    Some(strip_www(&input.to_ascii_lowercase()).to_string())
}

fn strip_www(s: &str) -> &str {
    s.strip_prefix("www.").unwrap_or(s)
}
