use quill_seo::models::{CheckStatus, IssueKind, PostFields};
use quill_seo::services::document::{parse_document, BodyFormat};
use quill_seo::services::markdown::MarkdownRenderer;
use quill_seo::{generate_slug, validate_slug, Config, SeoAnalyzer};

fn sample_post() -> String {
    let body = "Running a personal blog teaches patience and consistency. \
                alpha beta gamma delta epsilon zeta eta theta iota kappa. "
        .repeat(16);
    format!(
        r#"+++
title = "Building a Fast Personal Blog With Rust"
slug = "building-a-fast-personal-blog-with-rust"
seo_title = "Building a Fast Personal Blog With Rust, Step by Step"
seo_description = "What actually matters when you build and tune a personal blog: content length, headings, image alt text, readability, and clean URL slugs that rank."
focus_keyword = "personal blog"
tags = ["rust", "blogging"]
+++

## Why bother

![cover photo](cover.jpg)

{body}

## What worked

{body}
"#,
        body = body
    )
}

mod analyzer_integration_tests {
    use super::*;

    #[test]
    fn test_markdown_post_end_to_end() {
        let renderer = MarkdownRenderer::new();
        let doc = parse_document(&sample_post(), BodyFormat::Markdown, &renderer)
            .expect("Failed to parse post");

        assert_eq!(doc.fields.title, "Building a Fast Personal Blog With Rust");
        assert_eq!(doc.fields.slug, "building-a-fast-personal-blog-with-rust");
        assert_eq!(doc.tags, vec!["rust".to_string(), "blogging".to_string()]);

        let analyzer = SeoAnalyzer::new();
        let report = analyzer.analyze(&doc.fields);

        assert_eq!(report.checks.len(), 10);
        assert_eq!(
            report.check("keyword-in-title").unwrap().status,
            CheckStatus::Good
        );
        assert_eq!(
            report.check("heading-structure").unwrap().status,
            CheckStatus::Good
        );
        assert_eq!(
            report.check("image-alt-text").unwrap().status,
            CheckStatus::Good
        );
        assert_eq!(
            report.check("content-length").unwrap().status,
            CheckStatus::Good
        );
        assert_eq!(
            report.check("url-structure").unwrap().status,
            CheckStatus::Good
        );
        assert!(report.keyword_density > 0.0);
        assert!(report.word_count >= 300);
    }

    #[test]
    fn test_report_is_deterministic_across_pipeline() {
        let renderer = MarkdownRenderer::new();
        let analyzer = SeoAnalyzer::new();

        let doc1 = parse_document(&sample_post(), BodyFormat::Markdown, &renderer).unwrap();
        let doc2 = parse_document(&sample_post(), BodyFormat::Markdown, &renderer).unwrap();

        let first = serde_json::to_value(analyzer.analyze(&doc1.fields)).unwrap();
        let second = serde_json::to_value(analyzer.analyze(&doc2.fields)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_analyzer_shared_by_reference() {
        let analyzer = SeoAnalyzer::new();
        let fields = PostFields {
            title: "Shared Analyzer".to_string(),
            ..Default::default()
        };

        let by_ref = &analyzer;
        let a = by_ref.analyze(&fields);
        let b = by_ref.analyze(&fields);
        assert_eq!(a.overall_score, b.overall_score);
    }
}

mod slug_integration_tests {
    use super::*;

    #[test]
    fn test_generated_slugs_survive_validation() {
        let titles = [
            "Building a Fast Personal Blog With Rust",
            "10 Things I Wish I Knew!",
            "Qu'est-ce que c'est?",
            "   spaced    out   title   ",
            "ALL CAPS ANNOUNCEMENT",
        ];
        for title in titles {
            let slug = generate_slug(title);
            let report = validate_slug(&slug);
            assert!(
                !report
                    .issues
                    .iter()
                    .any(|i| i.kind == IssueKind::Error && !slug.is_empty()),
                "generated slug {:?} for {:?} reported an error",
                slug,
                title
            );
        }
    }

    #[test]
    fn test_validation_suggestions_are_usable() {
        let report = validate_slug("The--Best Of THE Rust!!");
        assert!(!report.is_valid);
        for suggestion in &report.suggestions {
            let revalidated = validate_slug(suggestion);
            assert!(
                revalidated.is_valid,
                "suggestion {:?} did not validate",
                suggestion
            );
        }
    }
}

mod config_integration_tests {
    use super::*;

    #[test]
    fn test_init_then_load_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        quill_seo::cli::init::run(dir.path().to_path_buf()).expect("Failed to init");

        let config = Config::load(&dir.path().join("quill.toml")).expect("Failed to load config");
        assert_eq!(config.analysis.reading_speed_wpm, 200);
        assert!(config.content.markdown);
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        quill_seo::cli::init::run(dir.path().to_path_buf()).expect("Failed to init");
        assert!(quill_seo::cli::init::run(dir.path().to_path_buf()).is_err());
    }

    #[test]
    fn test_load_or_default_with_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::load_or_default(&dir.path().join("quill.toml"))
            .expect("Defaults should load");
        assert_eq!(config.analysis.reading_speed_wpm, 200);
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("quill.toml");
        std::fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();
        assert!(Config::load(&path).is_err());
    }
}

mod cli_integration_tests {
    use super::*;

    #[test]
    fn test_analyze_command_runs() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let post_path = dir.path().join("post.md");
        std::fs::write(&post_path, sample_post()).unwrap();

        let config_path = dir.path().join("quill.toml");
        quill_seo::cli::analyze::run(&config_path, &post_path, false, None, None)
            .expect("Analyze should succeed");
        quill_seo::cli::analyze::run(&config_path, &post_path, true, None, None)
            .expect("JSON analyze should succeed");
    }

    #[test]
    fn test_analyze_min_score_gate() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let post_path = dir.path().join("thin.md");
        std::fs::write(&post_path, "# Thin\n\nNot much here.\n").unwrap();

        let config_path = dir.path().join("quill.toml");
        let result =
            quill_seo::cli::analyze::run(&config_path, &post_path, false, None, Some(100));
        assert!(result.is_err());
    }

    #[test]
    fn test_analyze_missing_file_fails() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = dir.path().join("quill.toml");
        let result = quill_seo::cli::analyze::run(
            &config_path,
            &dir.path().join("missing.md"),
            false,
            None,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_analyze_keyword_override() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let post_path = dir.path().join("post.md");
        std::fs::write(&post_path, "# No Front Matter\n\nJust a body.\n").unwrap();

        let config_path = dir.path().join("quill.toml");
        quill_seo::cli::analyze::run(
            &config_path,
            &post_path,
            false,
            Some("front matter".to_string()),
            None,
        )
        .expect("Keyword override should succeed");
    }
}
