use anyhow::Result;
use std::path::PathBuf;

pub fn run(path: PathBuf) -> Result<()> {
    std::fs::create_dir_all(&path)?;

    let config_path = path.join("quill.toml");
    if config_path.exists() {
        anyhow::bail!("'{}' already exists", config_path.display());
    }

    let config = r#"[analysis]
reading_speed_wpm = 200

[content]
markdown = true
sanitize = true

[output]
format = "text"
"#;

    std::fs::write(&config_path, config)?;

    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'quill analyze <post.md>' to score a post");

    Ok(())
}
