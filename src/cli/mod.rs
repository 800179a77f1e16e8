pub mod analyze;
pub mod init;
pub mod slug;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quill")]
#[command(version)]
#[command(about = "SEO scoring and slug tools for blog content", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "quill.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Analyze {
        file: PathBuf,
        #[arg(long)]
        json: bool,
        /// Override the focus keyword from the front matter
        #[arg(long)]
        keyword: Option<String>,
        /// Fail when the overall score is below this value
        #[arg(long)]
        min_score: Option<u32>,
    },
    Slug {
        #[command(subcommand)]
        command: SlugCommand,
    },
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum SlugCommand {
    Generate {
        title: String,
    },
    Check {
        slug: String,
        #[arg(long)]
        json: bool,
    },
}
