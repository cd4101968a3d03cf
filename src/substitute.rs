//! Placeholder substitution in check command templates.
//!
//! A template refers to a resolved value with `$<key><suffix>`, e.g.
//! `$apiserverbin` or `$kubeletconf`.
//!
//! # Example
//!
//! ```
//! use hostaudit::resolve::ResolvedMap;
//! use hostaudit::substitute::apply;
//!
//! let bins: ResolvedMap = [("kubelet", "/usr/bin/kubelet")].into_iter().collect();
//! assert_eq!(apply("$kubeletbin --help", &bins, "bin"), "/usr/bin/kubelet --help");
//! ```

use crate::resolve::ResolvedMap;

/// Suffix of binary placeholders (`$<component>bin`).
pub const BIN_SUFFIX: &str = "bin";

/// Suffix of config placeholders (`$<component>conf`).
pub const CONF_SUFFIX: &str = "conf";

/// Replace every `$<key><suffix>` token in `template` with its value.
///
/// Empty values are skipped, leaving their token in place. Values made of
/// several words are single-quoted so they stay one shell argument.
pub fn apply(template: &str, values: &ResolvedMap, suffix: &str) -> String {
    let mut resolved = template.to_string();

    for (key, value) in values.iter() {
        let token = format!("${}{}", key, suffix);
        if value.is_empty() {
            tracing::debug!("No substitution for '{}'", token);
            continue;
        }
        tracing::debug!("Substituting {} with '{}'", token, value);
        resolved = replace_token(&resolved, &token, value);
    }

    resolved
}

/// Replace every occurrence of `token`, quoting multi-word values.
pub fn replace_token(template: &str, token: &str, value: &str) -> String {
    if value.split_whitespace().nth(1).is_some() {
        template.replace(token, &format!("'{}'", value))
    } else {
        template.replace(token, value)
    }
}
