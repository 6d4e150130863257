use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ env.VAR }}` or `{{ env.VAR | default("fallback") }}`
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw TOML text
///
/// `{{ env.VAR | default("x") }}` falls back to `x` when `VAR` is unset.
/// Comment lines are copied through untouched so commented-out settings
/// never require their variables.
pub fn expand_env(input: &str) -> Result<String, String> {
    input.split_inclusive('\n').map(expand_line).collect()
}

fn expand_line(line: &str) -> Result<Cow<'_, str>, String> {
    if line.trim_start().starts_with('#') {
        return Ok(Cow::Borrowed(line));
    }

    let mut failure = None;
    let expanded = placeholder().replace_all(line, |caps: &Captures<'_>| {
        resolve(&caps[1], caps.get(2).map(|m| m.as_str())).unwrap_or_else(|e| {
            failure.get_or_insert(e);
            String::new()
        })
    });

    failure.map_or(Ok(expanded), Err)
}

fn resolve(key: &str, default: Option<&str>) -> Result<String, String> {
    let var_name = key
        .strip_prefix("env.")
        .filter(|name| !name.is_empty() && !name.contains('.'))
        .ok_or_else(|| format!("only variables scoped with 'env.' are supported: `{key}`"))?;

    match (std::env::var(var_name), default) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.to_owned()),
        (Err(_), None) => Err(format!("environment variable not found: `{var_name}`")),
    }
}
