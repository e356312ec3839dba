//! Glob-style filtering over capability names.
//!
//! Administrative listing/search helper. Never consulted by access
//! decisions, so it favors graceful degradation: a pattern that cannot be
//! compiled filters nothing rather than raising.

use regex::Regex;
use tracing::warn;

/// Select the names matching a glob pattern, preserving input order.
///
/// `*` matches any run of characters (including none); everything else is
/// literal, so regex metacharacters in capability names (`.`, `+`, ...)
/// have no special meaning. The pattern must match the whole name.
///
/// # Example
///
/// ```
/// use tillhouse_catalog::filter_by_pattern;
///
/// let names = ["sales.read", "sales.create", "users.read"];
/// assert_eq!(
///     filter_by_pattern(names, "sales.*"),
///     vec!["sales.read", "sales.create"],
/// );
/// ```
pub fn filter_by_pattern<'a, I>(names: I, pattern: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let Some(matcher) = compile_glob(pattern) else {
        return Vec::new();
    };

    names
        .into_iter()
        .filter(|name| matcher.is_match(name))
        .map(str::to_string)
        .collect()
}

/// Translate a `*` glob into an anchored regex. Literal segments are
/// escaped before substitution so capability names containing regex
/// metacharacters stay literal.
fn compile_glob(pattern: &str) -> Option<Regex> {
    let translated: Vec<String> = pattern.split('*').map(|s| regex::escape(s)).collect();
    let anchored = format!("^{}$", translated.join(".*"));

    match Regex::new(&anchored) {
        Ok(matcher) => Some(matcher),
        Err(error) => {
            warn!(pattern, %error, "Ignoring unusable filter pattern");
            None
        }
    }
}
