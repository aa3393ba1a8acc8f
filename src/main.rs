mod config;
mod github;
mod http;
mod logger;

use anyhow::{Context, Result};
use config::Config;
use github::contents_client::ContentsClient;

#[tokio::main]
async fn main() -> Result<()> {
    logger::init()?;

    let config = Config::load().await.context("Cannot load config file")?;
    let repository = config.repository;

    log::info!(
        "Reading contents of {}/{}",
        repository.owner,
        repository.name
    );

    let client = ContentsClient::new(repository.owner, repository.name);

    let directories = client
        .list_root_directories()
        .await
        .context("Cannot list root directories")?;

    println!("Root directories: {:?}", directories);

    if let Some(directory) = directories.first() {
        let files = client
            .list_text_files(directory)
            .await
            .context("Cannot list text files")?;

        println!("Text files in {}: {:?}", directory, files);

        if let Some(filename) = files.first() {
            let content = client
                .get_file_content(directory, filename)
                .await
                .context("Cannot fetch file content")?;

            match content {
                Some(content) => println!("{}", content),
                None => println!("Could not retrieve the content of {}", filename),
            }
        }
    }

    Ok(())
}
