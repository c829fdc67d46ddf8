//! Policy tag validation.

use regex::Regex;
use std::sync::LazyLock;

use crate::schema::ChatdockConfig;

/// A policy tag: `@` followed by lower snake case.
static POLICY_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@[a-z0-9_]+$").unwrap());

pub(crate) fn validate_policies(errors: &mut Vec<String>, config: &ChatdockConfig) {
    for key in &config.policies.keys {
        if !POLICY_TAG_RE.is_match(key) {
            errors.push(format!(
                "policies.keys entry {key:?} must look like @lower_snake_case"
            ));
        }
    }
}
