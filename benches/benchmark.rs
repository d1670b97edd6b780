//! Benchmarks for rapid_summary

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rapid_summary::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence (AI) that provides systems
the ability to automatically learn and improve from experience without being explicitly
programmed. Machine learning focuses on the development of computer programs that can
access data and use it to learn for themselves.

The process of learning begins with observations or data, such as examples, direct
experience, or instruction, in order to look for patterns in data and make better
decisions in the future based on the examples that we provide. The primary aim is to
allow the computers to learn automatically without human intervention or assistance
and adjust actions accordingly.

Deep learning is a subset of machine learning that uses artificial neural networks
with representation learning. The learning can be supervised, semi-supervised or
unsupervised. Deep learning has been applied to various fields including computer
vision, speech recognition, natural language processing, and drug design.

Natural language processing (NLP) is a subfield of linguistics, computer science,
and artificial intelligence concerned with the interactions between computers and
human language. NLP techniques are used to analyze, understand, and generate human
language in a valuable way. Key applications include sentiment analysis, machine
translation, and text summarization.
"#;

fn benchmark_segmentation(c: &mut Criterion) {
    let summarizer = Summarizer::default();

    c.bench_function("segment_and_vectorize", |b| {
        b.iter(|| summarizer.segment_and_vectorize(black_box(SAMPLE_TEXT)))
    });

    // Benchmark different document sizes
    let mut group = c.benchmark_group("segment_by_size");
    for size in [1, 5, 10, 20].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| summarizer.segment_and_vectorize(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_similarity(c: &mut Criterion) {
    let summarizer = Summarizer::default();

    // Crosses the parallel threshold at the largest size
    let mut group = c.benchmark_group("similarity_by_size");
    for size in [1, 10, 40].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        let sentences = summarizer.segment_and_vectorize(&text);
        group.throughput(Throughput::Elements(sentences.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(sentences.len()),
            &sentences,
            |b, sentences| b.iter(|| SimilarityMatrix::build(black_box(sentences), 0.1)),
        );
    }
    group.finish();
}

fn benchmark_pagerank(c: &mut Criterion) {
    let summarizer = Summarizer::default();
    let sentences = summarizer.segment_and_vectorize(&SAMPLE_TEXT.repeat(10));
    let matrix = summarizer.build_similarity(&sentences);
    let graph = CsrGraph::from_matrix(&matrix);

    c.bench_function("pagerank_standard", |b| {
        let pr = StandardPageRank::new();
        b.iter(|| pr.run(black_box(&graph)))
    });
}

fn benchmark_keywords(c: &mut Criterion) {
    let extractor = KeywordExtractor::new();

    let mut group = c.benchmark_group("keywords");
    for mode in [KeywordMode::Words, KeywordMode::Phrases] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{mode:?}")),
            &mode,
            |b, &mode| b.iter(|| extractor.extract(black_box(SAMPLE_TEXT), 10, mode)),
        );
    }
    group.finish();
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    for algorithm in [
        Algorithm::Frequency,
        Algorithm::Simple,
        Algorithm::Keywords,
        Algorithm::Graph,
    ] {
        let summarizer = Summarizer::new(SummaryConfig::new().with_algorithm(algorithm));
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm.as_str()),
            &summarizer,
            |b, summarizer| b.iter(|| summarizer.summarize(black_box(SAMPLE_TEXT))),
        );
    }
    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let requests: Vec<SummaryRequest> = (0..32).map(|_| SummaryRequest::new(SAMPLE_TEXT)).collect();

    c.bench_function("summarize_batch_32", |b| {
        b.iter(|| summarize_batch(black_box(&requests)))
    });
}

criterion_group!(
    benches,
    benchmark_segmentation,
    benchmark_similarity,
    benchmark_pagerank,
    benchmark_keywords,
    benchmark_full_pipeline,
    benchmark_batch,
);
criterion_main!(benches);
