//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Petal Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
#
# The API key is NOT stored here. Set GEMINI_API_KEY in the environment,
# in a .env file, or in secrets.toml next to this file.

[model]
name = "gemini-2.5-flash-lite"
# temperature = 0.7          # 0.0-2.0
# max_output_tokens = 2048   # 1-65536
# system_instruction = "You are a friendly assistant."

[display]
# title = "Chatbot"
# placeholder = "Wassup?"
# user_color = "#FFA2B9"
# assistant_color = "#FDD5DF"
# title_color = "#561530"
# error_color = "#ff4444"

[logging]
# level = "WARNING"          # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
