//! Merge rules: defaults first, every later source overrides earlier keys.

use crate::config::{
    default_api_url, default_prompt, default_trending_url, default_user_agent, default_web_url,
};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("github.api_url", default_api_url())?
        .set_default("github.web_url", default_web_url())?
        .set_default("github.trending_url", default_trending_url())?
        .set_default("github.user_agent", default_user_agent())?
        .set_default("shell.prompt", default_prompt())
}
