use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".govroi.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# govroi configuration

[costs]
# Printing cost per page (B&W laser)
cost_per_page = 0.07

[risk]
# Assumed mitigation from adopting automated meeting management,
# applied to both exposure and probability. Must be within [0, 1].
reduction_factor = 0.80

[output]
default_format = "terminal"
default_currency = "usd"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created .govroi.toml configuration file");

    Ok(())
}
