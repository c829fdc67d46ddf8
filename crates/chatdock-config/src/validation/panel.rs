//! Panel and host geometry validation.

use crate::schema::ChatdockConfig;

use super::helpers::validate_range;

pub(crate) fn validate_panel(errors: &mut Vec<String>, config: &ChatdockConfig) {
    let panel = &config.panel;
    validate_range(errors, "panel.padding", panel.padding, 0.0, 200.0);
    validate_range(errors, "panel.min_width", panel.min_width, 100.0, 4000.0);
    validate_range(errors, "panel.min_height", panel.min_height, 100.0, 4000.0);

    let size = panel.default_size();
    if size.width < panel.min_width {
        errors.push(format!(
            "panel.restore_width = {} is below panel.min_width = {}",
            size.width, panel.min_width
        ));
    }
    if size.height < panel.min_height {
        errors.push(format!(
            "panel.restore_height = {} is below panel.min_height = {}",
            size.height, panel.min_height
        ));
    }
}

pub(crate) fn validate_host(errors: &mut Vec<String>, config: &ChatdockConfig) {
    let host = &config.host;
    validate_range(errors, "host.viewport_width", host.viewport_width, 1.0, 16384.0);
    validate_range(errors, "host.viewport_height", host.viewport_height, 1.0, 16384.0);
    validate_range(errors, "host.launcher.size", host.launcher.size, 8.0, 256.0);
    validate_range(errors, "host.launcher.margin", host.launcher.margin, 0.0, 200.0);
}
