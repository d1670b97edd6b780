//! Property-based tests using proptest

use proptest::prelude::*;
use rapid_summary::*;

/// Symmetric weight matrix with a zero diagonal
fn symmetric_matrix(max_nodes: usize) -> impl Strategy<Value = SimilarityMatrix> {
    (2usize..max_nodes).prop_flat_map(|n| {
        prop::collection::vec(prop::option::weighted(0.4, 0.01f64..1.0), n * n).prop_map(
            move |cells| {
                let mut rows = vec![vec![0.0; n]; n];
                for i in 0..n {
                    for j in (i + 1)..n {
                        let w = cells[i * n + j].unwrap_or(0.0);
                        rows[i][j] = w;
                        rows[j][i] = w;
                    }
                }
                SimilarityMatrix::from_rows(rows)
            },
        )
    })
}

/// Short documents built from a small vocabulary so sentences overlap
fn document() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "data", "model", "graph", "rank", "text", "neural", "cloud", "river", "stone", "music",
        "the", "of", "and",
    ]);
    let sentence = prop::collection::vec(word, 1..8).prop_map(|words| {
        let mut s = words.join(" ");
        s.push('.');
        s
    });
    prop::collection::vec(sentence, 0..12).prop_map(|sentences| sentences.join(" "))
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Frequency),
        Just(Algorithm::Simple),
        Just(Algorithm::Keywords),
        Just(Algorithm::Graph),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_pagerank_is_a_distribution(
        matrix in symmetric_matrix(20),
        max_iterations in 0usize..120
    ) {
        let result = StandardPageRank::new()
            .with_max_iterations(max_iterations)
            .run_matrix(&matrix);

        prop_assert_eq!(result.scores.len(), matrix.len());
        prop_assert!(result.scores.iter().all(|&s| s >= 0.0));
        let sum: f64 = result.scores.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-4, "Scores sum to {} instead of 1", sum);
    }

    #[test]
    fn test_similarity_symmetric(text in document(), threshold in 0.0f64..0.6) {
        let summarizer = Summarizer::default();
        let sentences = summarizer.segment_and_vectorize(&text);
        let matrix = SimilarityMatrix::build(&sentences, threshold);

        prop_assert!(matrix.is_symmetric());
        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                let v = matrix.get(i, j);
                prop_assert!(v == 0.0 || (v >= threshold && v <= 1.0));
            }
        }
    }

    #[test]
    fn test_summary_length_and_order(
        text in document(),
        algorithm in algorithm(),
        k in 0usize..15
    ) {
        let config = SummaryConfig::new()
            .with_algorithm(algorithm)
            .with_summary_length(SummaryLength::Count(k));
        let summary = Summarizer::new(config).summarize(&text);
        let n = summary.total_sentences;

        let expected = if n == 0 { 0 } else { k.clamp(1, n) };
        prop_assert_eq!(summary.sentences.len(), expected);

        let indices: Vec<_> = summary.sentences.iter().map(|s| s.index).collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_proportion_resolves_within_bounds(p in -1.0f64..2.0, n in 0usize..200) {
        let k = SummaryLength::Proportion(p).resolve(n);
        if n == 0 {
            prop_assert_eq!(k, 0);
        } else {
            prop_assert!(k >= 1 && k <= n);
        }
    }

    #[test]
    fn test_pipeline_deterministic(text in document(), algorithm in algorithm()) {
        let config = SummaryConfig::new().with_algorithm(algorithm);
        let first = Summarizer::new(config.clone()).summarize(&text);
        let second = Summarizer::new(config).summarize(&text);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_keyword_ranks_sequential(text in document(), top_k in 0usize..10) {
        for mode in [KeywordMode::Words, KeywordMode::Phrases] {
            let keywords = KeywordExtractor::new().extract(&text, top_k, mode);
            prop_assert!(keywords.len() <= top_k);
            for (i, keyword) in keywords.iter().enumerate() {
                prop_assert_eq!(keyword.rank, i + 1);
                prop_assert!(keyword.score >= 1.0);
            }
            prop_assert!(keywords.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn test_selector_never_panics(
        scores in prop::collection::vec(prop_oneof![Just(f64::NAN), -10.0f64..10.0], 0..30),
        k in 0usize..40
    ) {
        let selected = SentenceSelector::select(&scores, k);
        prop_assert_eq!(selected.len(), k.min(scores.len()));
        prop_assert!(selected.windows(2).all(|w| w[0] < w[1]));
    }
}
