//! Performance benchmarks for content-sieve.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use content_sieve::parser::{extract_images, extract_texts, ExtractionContext};
use content_sieve::sanitize::sanitize_html;
use content_sieve::{extract_page_content, MainContent, MainContentExtractor, Page, ParserOptions};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Product</title>
</head>
<body>
    <header><img class="logo" src="/logo.png" width="120" height="40"></header>
    <nav>
        <a href="/">Home</a>
        <a href="/deals">Today's deals</a>
    </nav>
    <main>
        <h1>Stainless steel electric kettle, 1.7 litres</h1>
        <picture>
            <source srcset="/img/kettle.avif 1x, /img/kettle@2x.avif 2x">
            <img src="/img/kettle.jpg" width="800" height="800" alt="Kettle">
        </picture>
        <p>Boils a full jug in under four minutes with automatic shut-off.</p>
        <ul>
            <li>Concealed heating element for easy cleaning</li>
            <li>Removable limescale filter</li>
        </ul>
        <div style="background-image: url('/img/lifestyle.jpg'); width: 900px; height: 400px"></div>
        <video src="/v/demo.mp4" poster="/v/demo.jpg" width="640" height="360"></video>
    </main>
    <img src="/pixel.gif" width="1" height="1">
    <footer><p>Copyright 2024 Example Store</p></footer>
</body>
</html>
"#;

/// Skips readability so the numbers measure the heuristic pass only.
struct NoMainContent;

impl MainContentExtractor for NoMainContent {
    fn extract(&self, _document: content_sieve::dom::Document, _base_url: Option<&str>) -> content_sieve::Result<MainContent> {
        Err(content_sieve::Error::MainContentUnavailable("benchmark".to_string()))
    }
}

fn synthetic_page(sections: usize) -> String {
    let mut html = String::from("<html><head><title>Synthetic</title></head><body>");
    for i in 0..sections {
        html.push_str(&format!(
            r#"<section><h2>Section heading number {i}</h2>
               <p>Paragraph {i} with enough words to pass the length filter.</p>
               <img src="/img/{i}.jpg" width="400" height="300" alt="Figure {i}">
               <img src="/icons/{i}.svg" class="icon" width="24" height="24"></section>"#
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_full_extraction(c: &mut Criterion) {
    let page = Page::from_html(SAMPLE_HTML, "https://shop.example.com/p/kettle");
    let options = ParserOptions::default().compile();

    c.bench_function("extract_page_content", |b| {
        b.iter(|| extract_page_content(black_box(&page), &options, &NoMainContent));
    });
}

fn bench_parsers(c: &mut Criterion) {
    let page = Page::from_html(SAMPLE_HTML, "https://shop.example.com/p/kettle");
    let options = ParserOptions::default().compile();

    c.bench_function("extract_texts", |b| {
        b.iter(|| extract_texts(&mut ExtractionContext::new(black_box(&page)), &options.text));
    });
    c.bench_function("extract_images", |b| {
        b.iter(|| extract_images(&mut ExtractionContext::new(black_box(&page)), &options.image));
    });
}

fn bench_options_compile(c: &mut Criterion) {
    let options = ParserOptions {
        exclude_selectors: Some(vec![".promo".into(), "aside".into(), "[data-ad]".into(), "##bad".into()]),
        ..ParserOptions::default()
    };

    c.bench_function("options_compile", |b| {
        b.iter(|| black_box(&options).compile());
    });
}

fn bench_sanitize(c: &mut Criterion) {
    c.bench_function("sanitize_html", |b| {
        b.iter(|| sanitize_html(black_box(SAMPLE_HTML)));
    });
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_size");
    let options = ParserOptions::default().compile();

    for sections in [10, 100, 500] {
        let html = synthetic_page(sections);
        let page = Page::from_html(&html, "https://x.com/");
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &page, |b, page| {
            b.iter(|| extract_page_content(page, &options, &NoMainContent));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_full_extraction,
    bench_parsers,
    bench_options_compile,
    bench_sanitize,
    bench_scaling
);
criterion_main!(benches);
