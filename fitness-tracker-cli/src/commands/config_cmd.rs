use anyhow::Result;

use super::AppContext;
use crate::config::Config;

pub fn show_config(ctx: &AppContext) -> Result<()> {
    let config = ctx.load_config()?;
    let config_str = toml::to_string_pretty(&config)?;

    println!("Current Configuration");
    println!("────────────────────────────────");
    println!();
    println!("{}", config_str);

    Ok(())
}

pub fn init_config(ctx: &AppContext, force: bool) -> Result<()> {
    let config_file = ctx.config_file()?;

    if config_file.exists() && !force {
        println!(
            "Configuration file already exists at: {}",
            config_file.display()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = Config::default();
    config.save_to(&config_file)?;

    println!("✓ Configuration initialized at: {}", config_file.display());
    println!();
    println!("Run the packages it lists with: fitness-tracker run");

    Ok(())
}
