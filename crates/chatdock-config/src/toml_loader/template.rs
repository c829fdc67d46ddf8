//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Chatdock Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[backend]
# base_url = "http://localhost:8000"   # CHATDOCK_API_BASE_URL overrides this
# user_id = "EMP001"                   # sent as the user-id header on profile switch
# connect_timeout_secs = 10            # 1-120
# request_timeout_secs = 0             # 0 = wait until the backend answers
# ask_contract = "structured"          # structured ({"response": ...}) or raw

[panel]
# variant = "profiles"   # profiles (500x400) or compact (400x300)
# padding = 20.0         # 0-200, kept between panel and viewport edges
# min_width = 300.0
# min_height = 200.0
# restore_width = 500.0  # overrides the variant's windowed size
# restore_height = 400.0
# open_fullscreen = false

[host]
# viewport_width = 1280.0
# viewport_height = 800.0

[host.launcher]
# size = 48.0
# margin = 24.0

[policies]
# keys = ["@dress_code", "@leave", "@annual_leave", "@employee_handbook",
#         "@hybrid_work", "@teleworking_policy", "@teleworking_guidelines"]

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
