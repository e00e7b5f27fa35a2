//! Application metadata constants

pub const NAME: &str = "parley";
/// Title shown in the header when no branding banner is available.
pub const DISPLAY_NAME: &str = "BB-GPT";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Terminal chat front-end for Azure-hosted chat-completion models";

/// Directory name for parley data, under the home directory or a project root
pub const DATA_DIR: &str = ".parley";
/// Env file inside DATA_DIR
pub const ENV_FILE: &str = "env";
/// Default branding banner file, relative to the working directory
pub const BRANDING_FILE: &str = "bb.txt";

pub const INPUT_PLACEHOLDER: &str = "Type your message...";
