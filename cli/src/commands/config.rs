//! Config commands

use crate::config::Config;
use crate::ConfigCommands;

pub fn handle(action: ConfigCommands, profile: Option<&str>) -> Result<(), String> {
    match action {
        ConfigCommands::Show => {
            let config = Config::load(profile)?;
            println!("{}", toml::to_string_pretty(&config).map_err(|e| e.to_string())?);
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load(None)?;
            config.set(&key, &value)?;
            config.save()?;
            println!("Set {} = {}", key, value);
        }
    }
    Ok(())
}
