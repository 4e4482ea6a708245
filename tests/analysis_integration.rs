//! Integration tests for the analysis pipeline.
//!
//! These tests run the full pipeline across module boundaries, with and
//! without a WordNet dictionary loaded from disk.

mod support;

use std::sync::Arc;

use matcher_core::keywords::{KeywordExtractor, StopWords};
use matcher_core::matching::MatchStatus;
use matcher_core::text::normalize;
use matcher_core::{
    AnalysisError, Analyzer, AnalyzerConfig, Category, DocumentRole, ExtractorConfig, MatchMode,
    ScoreRating, WordNetSource, analyze, load_synonym_source,
};

use support::{SCENARIO_JOB, SCENARIO_RESUME, wordnet_fixture};

fn status_of<'a>(analysis: &'a matcher_core::Analysis, word: &str) -> &'a MatchStatus {
    &analysis
        .report
        .records()
        .iter()
        .find(|record| record.keyword.text == word)
        .unwrap_or_else(|| panic!("keyword '{word}' not extracted"))
        .status
}

/// Reference scenario without a dictionary: only literal hits count.
#[test]
fn test_scenario_without_dictionary() {
    let analysis = analyze(SCENARIO_RESUME, SCENARIO_JOB).unwrap();

    assert_eq!(status_of(&analysis, "sql"), &MatchStatus::ExactMatch);
    assert_eq!(status_of(&analysis, "python"), &MatchStatus::Missing);
    assert_eq!(status_of(&analysis, "programming"), &MatchStatus::Missing);
    assert_eq!(status_of(&analysis, "communication"), &MatchStatus::Missing);
    assert_eq!(status_of(&analysis, "teamwork"), &MatchStatus::Missing);

    let score = analysis.report.score();
    assert!(score > 0.0 && score < 100.0, "score {score}");
    assert!(!analysis.synonyms_available);
}

/// Reference scenario with WordNet: "programming" matches through "coding".
#[test]
fn test_scenario_with_wordnet_dictionary() {
    let dict = wordnet_fixture();
    let source = load_synonym_source(Some(dict.path()));
    assert!(source.is_available());

    let analyzer = Analyzer::with_source(source);
    let analysis = analyzer.analyze(SCENARIO_RESUME, SCENARIO_JOB).unwrap();

    assert_eq!(
        status_of(&analysis, "programming"),
        &MatchStatus::SynonymMatch {
            synonym: "coding".to_string()
        }
    );
    assert_eq!(status_of(&analysis, "sql"), &MatchStatus::ExactMatch);
    assert_eq!(status_of(&analysis, "python"), &MatchStatus::Missing);
    assert_eq!(status_of(&analysis, "communication"), &MatchStatus::Missing);
    assert_eq!(status_of(&analysis, "teamwork"), &MatchStatus::Missing);

    // 11 keywords: 1 exact, 1 synonym
    assert_eq!(analysis.report.total(), 11);
    let expected = (1.0 + 0.7) / 11.0 * 100.0;
    assert!((analysis.report.score() - expected).abs() < 1e-9);
    assert_eq!(analysis.rating, ScoreRating::MajorImprovementsNeeded);
    assert!(analysis.synonyms_available);
}

/// Synonyms attached to keywords follow dictionary rules.
#[test]
fn test_wordnet_synonyms_are_capped_and_single_word() {
    let dict = wordnet_fixture();
    let source = Arc::new(WordNetSource::load(dict.path()).unwrap());
    let analysis = Analyzer::with_source(source)
        .analyze(SCENARIO_RESUME, SCENARIO_JOB)
        .unwrap();

    let programming = analysis
        .keywords
        .iter()
        .find(|k| k.text == "programming")
        .unwrap();
    assert_eq!(programming.synonyms, vec!["scheduling", "programing", "coding"]);
    for keyword in &analysis.keywords {
        assert!(keyword.synonyms.len() <= 3);
        assert!(!keyword.synonyms.contains(&keyword.text));
        assert!(keyword.synonyms.iter().all(|s| !s.contains(' ')));
    }
}

/// Plural keywords pick up synonyms from their dictionary base form.
#[test]
fn test_plural_keyword_uses_base_form_synonyms() {
    let dict = wordnet_fixture();
    let analyzer = Analyzer::with_source(load_synonym_source(Some(dict.path())));

    let analysis = analyzer.analyze(SCENARIO_RESUME, SCENARIO_JOB).unwrap();
    let skills = analysis.keywords.iter().find(|k| k.text == "skills").unwrap();
    assert_eq!(skills.synonyms, vec!["skill", "accomplishment"]);
    assert_eq!(status_of(&analysis, "skills"), &MatchStatus::Missing);

    let analysis = analyzer
        .analyze("Key accomplishment: shipped the billing system", "skills")
        .unwrap();
    assert_eq!(
        status_of(&analysis, "skills"),
        &MatchStatus::SynonymMatch {
            synonym: "accomplishment".to_string()
        }
    );
}

/// Identical texts match completely.
#[test]
fn test_identical_texts_score_hundred() {
    let analysis = analyze(SCENARIO_JOB, SCENARIO_JOB).unwrap();
    assert!((analysis.report.score() - 100.0).abs() < 1e-9);
    assert_eq!(analysis.report.missing_count(), 0);
    assert_eq!(analysis.report.exact_count(), analysis.report.total());
    assert_eq!(analysis.rating, ScoreRating::Excellent);
    assert_eq!(
        analysis.suggestions,
        vec!["Good match: Minor tweaks suggested for optimal alignment"]
    );
}

/// Empty job text produces no report.
#[test]
fn test_empty_job_text_produces_no_report() {
    let err = analyze(SCENARIO_RESUME, "").unwrap_err();
    assert_eq!(
        err,
        AnalysisError::EmptyInput {
            document: DocumentRole::JobDescription
        }
    );
    assert!(KeywordExtractor::default().extract("").is_empty());
}

/// Job text with nothing but stop words and short tokens is a warning.
#[test]
fn test_job_without_candidates_is_warning() {
    let err = analyze(SCENARIO_RESUME, "It is to be at or on the and for 42").unwrap_err();
    assert_eq!(err, AnalysisError::NoKeywordsFound);
    assert!(err.is_warning());
}

/// Missing keywords drive category suggestions in first-appearance order.
#[test]
fn test_suggestions_follow_missing_categories() {
    let analysis = analyze(
        "Gardening and cooking",
        "Python developer with Jira experience and strong communication",
    )
    .unwrap();

    let suggestions = &analysis.suggestions;
    assert!(suggestions[0].starts_with("Add technical skills: Consider including python"));
    assert!(
        suggestions
            .iter()
            .any(|s| s.starts_with("Learn tools: Gain experience with jira"))
    );
    assert!(
        suggestions
            .iter()
            .any(|s| s.contains("demonstrating communication"))
    );
    assert!(suggestions.len() >= 2);
}

/// Extracted keywords respect top_n, length, stop words, and appear literally.
#[test]
fn test_extraction_properties_on_realistic_text() {
    let job = "Senior Backend Engineer. We build distributed systems in Rust and Go. \
               You will design APIs, own services end to end, mentor engineers, \
               and collaborate with product. Experience with PostgreSQL, Kafka, \
               Kubernetes and AWS is a plus. Strong communication required.";
    let stop_words = StopWords::default();
    let extractor = KeywordExtractor::new(ExtractorConfig {
        top_n: 10,
        min_word_len: 4,
        stop_words: stop_words.clone(),
    })
    .unwrap();

    let keywords = extractor.extract(job);
    let normalized = normalize(job);

    assert!(keywords.len() <= 10);
    for keyword in &keywords {
        assert!(keyword.word.len() >= 4);
        assert!(!stop_words.contains(&keyword.word));
        assert!(normalized.contains(&keyword.word));
    }
    assert_eq!(keywords, extractor.extract(job), "extraction is deterministic");
}

/// Whole-word matching never scores higher than substring matching.
#[test]
fn test_whole_word_mode_is_stricter() {
    let resume = "Smart artist who enjoys networking and data structures";
    let job = "art network data structure art";

    let substring = analyze(resume, job).unwrap();
    let whole_word = Analyzer::new(
        AnalyzerConfig {
            match_mode: MatchMode::WholeWord,
            ..AnalyzerConfig::default()
        },
        load_synonym_source(None),
    )
    .unwrap()
    .analyze(resume, job)
    .unwrap();

    assert!(whole_word.report.score() <= substring.report.score());
    assert!(whole_word.report.score() < 100.0);
    assert!((substring.report.score() - 100.0).abs() < 1e-9);
}

/// Extra category terms from configuration take effect.
#[test]
fn test_extra_category_terms() {
    let config = AnalyzerConfig {
        categories: matcher_core::CategoryRules::default()
            .add_terms(Category::ToolsAndTechnologies, &["terraform".to_string()]),
        ..AnalyzerConfig::default()
    };
    let analyzer = Analyzer::new(config, load_synonym_source(None)).unwrap();
    let analysis = analyzer.analyze("nothing", "terraform terraform").unwrap();
    assert_eq!(analysis.keywords[0].category, Category::ToolsAndTechnologies);
}

/// One analyzer serves many runs from several threads.
#[test]
fn test_analyzer_shared_across_threads() {
    let dict = wordnet_fixture();
    let analyzer = Arc::new(Analyzer::with_source(load_synonym_source(Some(dict.path()))));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = Arc::clone(&analyzer);
            std::thread::spawn(move || {
                analyzer
                    .analyze(SCENARIO_RESUME, SCENARIO_JOB)
                    .map(|a| a.report.score())
            })
        })
        .collect();

    let scores: Vec<f64> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| (w[0] - w[1]).abs() < 1e-12));
}
