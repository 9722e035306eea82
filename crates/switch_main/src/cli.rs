use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use switch_domain::{AddProfile, SwitchConfig};

/// Manage Claude API profiles and switch the live settings between them
#[derive(Parser, Debug)]
#[command(name = "claude-switch", version, propagate_version = true)]
pub struct Cli {
    /// Path to the live settings file [default: ~/.claude/settings.json]
    #[arg(long, env = "CLAUDE_SWITCH_SETTINGS", global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Path to the profile catalog [default: ~/.claude-switch/profiles.toml]
    #[arg(long, env = "CLAUDE_SWITCH_PROFILES", global = true, value_name = "PATH")]
    pub profiles: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Create the profile catalog from the current settings
    Init,
    /// Switch the live settings to a profile
    Use {
        /// Profile name
        name: String,
    },
    /// Add a new profile
    Add(AddArgs),
    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Show the active profile and credentials
    Show,
    /// List all profiles
    List,
}

#[derive(Args, Debug, PartialEq)]
pub struct AddArgs {
    /// Profile name
    pub name: String,

    /// API base URL (ANTHROPIC_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base: Option<String>,

    /// API key (ANTHROPIC_API_KEY)
    #[arg(long)]
    pub key: Option<String>,

    /// Bearer token (ANTHROPIC_AUTH_TOKEN)
    #[arg(long)]
    pub auth_token: Option<String>,

    /// Model name written to the `model` setting
    #[arg(long)]
    pub model: Option<String>,

    /// ANTHROPIC_MODEL value
    #[arg(long)]
    pub anthropic_model: Option<String>,

    /// ANTHROPIC_SMALL_FAST_MODEL value
    #[arg(long)]
    pub anthropic_small_fast_model: Option<String>,

    /// Extra env entry, may be repeated
    #[arg(long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Switch to the profile after adding it
    #[arg(long = "use")]
    pub activate: bool,
}

impl From<AddArgs> for AddProfile {
    fn from(args: AddArgs) -> Self {
        AddProfile {
            base_url: args.base,
            api_key: args.key,
            auth_token: args.auth_token,
            model: args.model,
            anthropic_model: args.anthropic_model,
            small_fast_model: args.anthropic_small_fast_model,
            env: args.env,
        }
    }
}

impl Cli {
    /// Resolves document locations; explicit paths win over the defaults
    /// under the home directory.
    pub fn config(&self) -> anyhow::Result<SwitchConfig> {
        let (settings, profiles) = match (&self.settings, &self.profiles) {
            (Some(settings), Some(profiles)) => (settings.clone(), profiles.clone()),
            _ => {
                let home = dirs::home_dir().context("Unable to determine the home directory")?;
                let defaults = SwitchConfig::from_home(&home);
                (
                    self.settings.clone().unwrap_or(defaults.settings_path),
                    self.profiles.clone().unwrap_or(defaults.profiles_path),
                )
            }
        };
        Ok(SwitchConfig::new(settings, profiles))
    }
}
