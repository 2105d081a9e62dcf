use crate::catalog::Catalog;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;

/// Everything a command needs, resolved once from CLI flags and config.
pub struct AppContext {
    pub config: Config,
    pub catalog: Catalog,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Config::load(cli.config.as_deref())?;
        if let Some(path) = &cli.data {
            config.data.path.clone_from(path);
        }
        Ok(Self::from_config(config))
    }

    #[must_use]
    pub fn from_config(config: Config) -> Self {
        let catalog = Catalog::new(config.data.path.clone());
        Self { config, catalog }
    }
}
