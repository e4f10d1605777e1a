use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static ENV_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"%([^%]+)%").expect("valid regex"));

/// Whether `s` may contain `%NAME%` references.
pub fn has_env_refs(s: &str) -> bool {
    s.contains('%')
}

/// Expand `%NAME%` references using the process environment.
///
/// Unknown names and unpaired `%` characters are left untouched.
pub fn expand_env_vars(s: &str) -> Cow<'_, str> {
    expand_with(s, |name| std::env::var(name).ok())
}

pub fn expand_with<'a, F>(s: &'a str, lookup: F) -> Cow<'a, str>
where
    F: Fn(&str) -> Option<String>,
{
    if !has_env_refs(s) {
        return Cow::Borrowed(s);
    }
    ENV_REF.replace_all(s, |caps: &Captures<'_>| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    })
}
