use crate::cli::SlugCommand;
use crate::services::slug::{generate_slug, validate_slug};
use anyhow::Result;

pub fn run(command: SlugCommand) -> Result<()> {
    match command {
        SlugCommand::Generate { title } => {
            println!("{}", generate_slug(&title));
        }
        SlugCommand::Check { slug, json } => {
            let report = validate_slug(&slug);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let verdict = if report.is_valid { "valid" } else { "invalid" };
                println!("{} ({}/100)", verdict, report.score);
                for issue in &report.issues {
                    match &issue.fix {
                        Some(fix) => println!("[{}] {} ({})", issue.kind, issue.message, fix),
                        None => println!("[{}] {}", issue.kind, issue.message),
                    }
                }
                if !report.suggestions.is_empty() {
                    println!("Try: {}", report.suggestions.join(", "));
                }
            }
        }
    }
    Ok(())
}
