use nutype::nutype;

/// Longest accepted hostname, per RFC 1035.
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// A canonical vocabulary entry.
///
/// Construction normalizes the raw string with [`normalize_input`], so two
/// spellings that normalize identically produce equal domains.
#[nutype(
    sanitize(with = sanitize_domain),
    validate(not_empty, len_char_max = MAX_DOMAIN_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Domain(String);

fn sanitize_domain(raw: String) -> String {
    normalize_input(&raw)
}

/// Normalizes user input and vocabulary entries alike.
///
/// Lowercases, drops an `http(s)://` scheme and a `www.` prefix, keeps only
/// `[a-z0-9.-]`, and trims `-` and `.` from both ends. May return an empty
/// string.
pub fn normalize_input(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    let mut rest = lowered.as_str();
    for scheme in ["https://", "http://"] {
        if let Some(stripped) = rest.strip_prefix(scheme) {
            rest = stripped;
            break;
        }
    }
    if let Some(stripped) = rest.strip_prefix("www.") {
        rest = stripped;
    }

    let kept: String = rest
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();

    kept.trim_matches(|c| c == '-' || c == '.').to_string()
}

/// Returns the `level`-th dot-separated label (1 = leftmost) of a name.
///
/// The input is normalized first. Returns `None` when `level` is zero or
/// past the last label.
pub fn subdomain_label(full: &str, level: usize) -> Option<String> {
    if level == 0 {
        return None;
    }
    let normalized = normalize_input(full);
    if normalized.is_empty() {
        return None;
    }
    normalized
        .split('.')
        .nth(level - 1)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
}
