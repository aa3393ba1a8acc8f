use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

const DEFAULT_OWNER: &str = "egdw";
const DEFAULT_REPOSITORY_NAME: &str = "prompt-repository";

const DEFAULT_CONFIG_FILE_NAME: &str = "repofetch.yaml";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub repository: Repository,
}

impl Config {
    pub async fn load() -> Result<Config> {
        let config_string = match tokio::fs::read_to_string(DEFAULT_CONFIG_FILE_NAME).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!(
                    "No {} found, using the default repository",
                    DEFAULT_CONFIG_FILE_NAME
                );
                return Ok(Config::default());
            }
            Err(err) => return Err(err.into()),
        };

        let config = serde_yaml::from_str::<Config>(&config_string)?;

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repository: Repository::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default = "Repository::default_owner")]
    pub owner: String,
    #[serde(default = "Repository::default_name")]
    pub name: String,
}

impl Repository {
    fn default_owner() -> String {
        DEFAULT_OWNER.to_owned()
    }

    fn default_name() -> String {
        DEFAULT_REPOSITORY_NAME.to_owned()
    }
}

impl Default for Repository {
    fn default() -> Self {
        Repository {
            owner: Repository::default_owner(),
            name: Repository::default_name(),
        }
    }
}
