use std::path::PathBuf;
use std::sync::Arc;

use crate::prelude::{println, *};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use motion::api::upload::load_file;
use motion::{ProgressCallback, UploadProgress};
use motion_core::endpoints::upload::S3Upload;

use super::print_json;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Target {
    /// Backend storage (`/api/v1/common/upload`)
    Local,
    /// Backend-managed bucket (`/api/v1/common/upload/aws`)
    Aws,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Upload a file through the backend
    #[command(after_help = "EXAMPLES:
  # Upload a cover image:
  motion upload file ./cover.png

  # Upload a video to the backend-managed bucket:
  motion upload file ./squat.mp4 --target aws")]
    File {
        path: PathBuf,

        #[arg(long, value_enum, default_value = "local")]
        target: Target,

        /// Do not show a progress bar
        #[arg(long)]
        quiet: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Upload a file straight to a bucket with temporary credentials
    S3 {
        path: PathBuf,

        #[arg(long, env = "MOTION_S3_BUCKET")]
        bucket: String,

        /// Object key; defaults to the file name
        #[arg(long)]
        key: Option<String>,

        /// Do not show a progress bar
        #[arg(long)]
        quiet: bool,
    },

    /// Fetch temporary object-storage credentials
    Credentials,
}

fn progress_bar(total: u64) -> Result<(ProgressBar, ProgressCallback)> {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")?
            .progress_chars("=> "),
    );

    let handle = bar.clone();
    let callback: ProgressCallback = Arc::new(move |progress: UploadProgress| {
        handle.set_length(progress.total);
        handle.set_position(progress.loaded);
    });

    Ok((bar, callback))
}

pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = global.client()?;
    let uploads = client.uploads();

    match cmd {
        Commands::File {
            path,
            target,
            quiet,
            json,
        } => {
            let file = load_file(&path).await?;
            let (bar, callback) = if quiet {
                (None, None)
            } else {
                let (bar, callback) = progress_bar(file.len() as u64)?;
                (Some(bar), Some(callback))
            };

            let stored = match target {
                Target::Local => uploads.upload_file(file, callback).await,
                Target::Aws => uploads.upload_file_to_aws(file, callback).await,
            };
            if let Some(bar) = bar {
                bar.finish_and_clear();
            }
            let stored = stored?;

            if json {
                return print_json(&stored);
            }
            println!("{} {}", "Uploaded".bold().green(), stored.filename);
            println!("{} {}", "Path:".bold().cyan(), stored.path);
            println!("{} {}", "URL:".bold().cyan(), stored.url);
        }
        Commands::S3 {
            path,
            bucket,
            key,
            quiet,
        } => {
            let file = load_file(&path).await?;
            let key = key.unwrap_or_else(|| file.file_name.clone());
            let credentials = uploads.s3_credentials().await?;

            let (bar, callback) = if quiet {
                (None, None)
            } else {
                let (bar, callback) = progress_bar(file.len() as u64)?;
                (Some(bar), Some(callback))
            };

            let result = uploads
                .upload_to_s3(
                    S3Upload {
                        file,
                        credentials,
                        bucket: bucket.clone(),
                        key: key.clone(),
                    },
                    callback,
                )
                .await;
            if let Some(bar) = bar {
                bar.finish_and_clear();
            }
            result.wrap_err_with(|| format!("Upload to bucket '{bucket}' failed"))?;

            println!(
                "{} {}{}",
                "Uploaded".bold().green(),
                motion_core::endpoints::upload::bucket_url(&bucket),
                key
            );
        }
        Commands::Credentials => {
            print_json(&uploads.s3_credentials().await?)?;
        }
    }

    Ok(())
}
