//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Tandem Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Tandem"
# width = 1200           # 400-7680
# height = 800           # 300-4320
# startup_mode = "windowed"   # windowed, maximized, fullscreen

[sidebar]
# width = 120            # 48-400

[session]
# url = "https://web.whatsapp.com"
# user_agent = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
# restore_on_startup = true
# devtools = false

[logging]
# level = "INFO"         # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
