mod calc;
mod codes;
mod config_cmd;
mod run;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, OutputFormat};

pub use calc::CalcCommand;
pub use run::RunCommand;

#[derive(Parser)]
#[command(name = "fitness-tracker")]
#[command(about = "Workout statistics calculator for running, walking and swimming", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON lines
    #[arg(long, global = true)]
    json: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "FITNESS_TRACKER_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch of sensor packages
    Run(RunCommand),

    /// Calculate a single workout package
    Calc(CalcCommand),

    /// List supported workout codes
    Codes,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Global flags plus lazy access to the config file
pub struct AppContext {
    config_override: Option<PathBuf>,
    json: bool,
}

impl AppContext {
    pub fn new(config_override: Option<PathBuf>, json: bool) -> Self {
        Self {
            config_override,
            json,
        }
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Config::resolve_file(self.config_override.as_deref())
    }

    /// Load the config; only commands that need it call this
    pub fn load_config(&self) -> Result<Config> {
        let config_file = self.config_file()?;

        if self.config_override.is_some() && !config_file.exists() {
            tracing::warn!(
                "Config file {} does not exist, using defaults",
                config_file.display()
            );
        }

        Config::load_from(&config_file)
    }

    /// `--json` wins over the configured format
    pub fn format_for(&self, config: &Config) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            config.output.format
        }
    }

    /// Resolve the output format, reading the config only when `--json` is absent
    pub fn output_format(&self) -> Result<OutputFormat> {
        if self.json {
            return Ok(OutputFormat::Json);
        }
        Ok(self.load_config()?.output.format)
    }
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        let ctx = AppContext::new(self.config, self.json);

        match self.command {
            Commands::Run(cmd) => cmd.execute(&ctx),
            Commands::Calc(cmd) => cmd.execute(&ctx),
            Commands::Codes => codes::list_codes(&ctx),
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(&ctx),
                ConfigSubcommands::Init { force } => config_cmd::init_config(&ctx, force),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
