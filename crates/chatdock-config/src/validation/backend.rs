//! Backend connection validation.

use crate::schema::ChatdockConfig;

use super::helpers::validate_range;

pub(crate) fn validate_backend(errors: &mut Vec<String>, config: &ChatdockConfig) {
    let backend = &config.backend;
    if !(backend.base_url.starts_with("http://") || backend.base_url.starts_with("https://")) {
        errors.push(format!(
            "backend.base_url = {:?} must start with http:// or https://",
            backend.base_url
        ));
    }
    if backend.user_id.trim().is_empty() {
        errors.push("backend.user_id must not be empty".into());
    }
    validate_range(
        errors,
        "backend.connect_timeout_secs",
        backend.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "backend.request_timeout_secs",
        backend.request_timeout_secs,
        0,
        600,
    );
}
