use crate::config::Config;
use crate::models::{CheckStatus, SeoReport};
use crate::services::document::{self, BodyFormat};
use crate::services::markdown::MarkdownRenderer;
use crate::services::seo::SeoAnalyzer;
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(
    config_path: &Path,
    file: &Path,
    json: bool,
    keyword: Option<String>,
    min_score: Option<u32>,
) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Could not read '{}'", file.display()))?;

    let format = if config.content.markdown {
        BodyFormat::from_path(file)
    } else {
        BodyFormat::Html
    };
    let renderer = MarkdownRenderer::with_sanitize(config.content.sanitize);
    let mut doc = document::parse_document(&raw, format, &renderer)?;
    if let Some(kw) = keyword {
        doc.fields.focus_keyword = Some(kw);
    }

    let analyzer = SeoAnalyzer::with_reading_speed(config.analysis.reading_speed_wpm);
    let report = analyzer.analyze(&doc.fields);

    if json || config.output.format == "json" {
        print_json(file, &doc.fields.slug, &report)?;
    } else {
        print_text(&doc.fields.title, &report);
    }

    if let Some(min) = min_score {
        if report.overall_score < min {
            anyhow::bail!(
                "Overall score {} is below the required minimum {}",
                report.overall_score,
                min
            );
        }
    }

    Ok(())
}

fn print_json(file: &Path, slug: &str, report: &SeoReport) -> Result<()> {
    let envelope = serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "file": file.display().to_string(),
        "slug": slug,
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

fn print_text(title: &str, report: &SeoReport) {
    if title.is_empty() {
        println!("(untitled)");
    } else {
        println!("{}", title);
    }
    println!("Overall score: {}/100", report.overall_score);
    println!(
        "{} words, {} min read, readability {:.1}",
        report.word_count, report.reading_time_minutes, report.readability_score
    );
    if report.check("keyword-density").is_some() {
        println!("Keyword density: {:.2}%", report.keyword_density);
    }
    println!();
    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Good => "ok",
            CheckStatus::Warning => "warn",
            CheckStatus::Error => "FAIL",
        };
        println!("[{:>4}] {:<24} {}", marker, check.name, check.message);
    }
}
