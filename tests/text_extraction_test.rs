use content_sieve::parser::{extract_texts, ExtractionContext};
use content_sieve::{extract, extract_with_options, ExtractedText, Page, ParserOptions};

const ARTICLE: &str = r#"<html><head><title>Review</title><style>.x{}</style></head><body>
  <header><p>Free delivery on orders over 30 dollars</p></header>
  <nav><ul><li>Kitchen appliances</li><li>Small electricals</li></ul></nav>
  <div id="cookie-banner"><p>We use cookies to improve your visit</p></div>
  <main>
    <h1>Kettle review: fast, quiet and easy to clean</h1>
    <div>Our verdict after a month of daily use<span>Score: nine out of ten</span></div>
    <p>The lid opens with one hand and the spout pours without dribbling.</p>
    <ul><li>Boils 1.7 litres in about four minutes</li><li>2024</li></ul>
    <table><tr><td>Capacity in litres</td><td>1.7</td></tr></table>
    <blockquote>Best kettle I have owned so far</blockquote>
    <p style="display:none">Hidden sponsored paragraph text</p>
    <aside class="sidebar"><p>Related products you may like</p></aside>
    <div class="ad"><a href="/sponsor">Sponsored link text here</a></div>
    <p>**********</p>
  </main>
  <footer><p>Copyright Example Reviews Ltd</p></footer>
  <script>var tracking = "should never appear in output";</script>
</body></html>"#;

fn contents(texts: &[ExtractedText]) -> Vec<&str> {
    texts.iter().map(|t| t.content.as_str()).collect()
}

#[test]
fn article_texts_in_reading_order() {
    let content = extract(ARTICLE, "https://reviews.example.com/kettle");

    assert_eq!(
        contents(&content.texts),
        vec![
            "Kettle review: fast, quiet and easy to clean",
            "Our verdict after a month of daily use",
            "Score: nine out of ten",
            "The lid opens with one hand and the spout pours without dribbling.",
            "Boils 1.7 litres in about four minutes",
            "Capacity in litres",
            "Best kettle I have owned so far",
        ]
    );
}

#[test]
fn tag_names_are_lowercase_element_names() {
    let content = extract(ARTICLE, "https://reviews.example.com/kettle");
    let tags: Vec<&str> = content.texts.iter().map(|t| t.tag_name.as_str()).collect();

    assert_eq!(tags, vec!["h1", "div", "span", "p", "li", "td", "blockquote"]);
}

#[test]
fn positions_are_non_decreasing() {
    let content = extract(ARTICLE, "https://reviews.example.com/kettle");

    assert!(content.texts.windows(2).all(|w| w[0].position <= w[1].position));
}

#[test]
fn nested_text_is_not_double_counted() {
    let page = Page::from_html("<div>text<span>nested</span></div>", "https://x.com/");
    let options = ParserOptions {
        min_text_length: Some(1),
        ..ParserOptions::default()
    };
    let mut ctx = ExtractionContext::new(&page);
    let texts = extract_texts(&mut ctx, &options.compile().text);

    assert_eq!(contents(&texts), vec!["text", "nested"]);
    assert!(texts.iter().all(|t| t.content != "textnested"));
}

#[test]
fn min_text_length_is_configurable() {
    let html = "<p>Tiny</p><p>Somewhat longer text</p>";

    let default = extract(html, "https://x.com/");
    assert_eq!(contents(&default.texts), vec!["Somewhat longer text"]);

    let relaxed = extract_with_options(
        html,
        "https://x.com/",
        &ParserOptions {
            min_text_length: Some(4),
            ..ParserOptions::default()
        },
    );
    assert_eq!(contents(&relaxed.texts), vec!["Tiny", "Somewhat longer text"]);
}

#[test]
fn exclude_tags_override_replaces_defaults() {
    let html = "<h2>Section heading text</h2><p>Paragraph body text here</p>";
    let options = ParserOptions {
        exclude_tags: Some(vec!["H2".to_string()]),
        ..ParserOptions::default()
    };
    let content = extract_with_options(html, "https://x.com/", &options);

    assert_eq!(contents(&content.texts), vec!["Paragraph body text here"]);
}

#[test]
fn custom_selectors_replace_text_defaults() {
    let html = r#"<nav><p>Navigation paragraph text</p></nav><p class="promo">Promotional text block</p>"#;
    let options = ParserOptions {
        exclude_selectors: Some(vec![".promo".to_string(), "div[[".to_string()]),
        ..ParserOptions::default()
    };
    let content = extract_with_options(html, "https://x.com/", &options);

    assert_eq!(contents(&content.texts), vec!["Navigation paragraph text"]);
}

#[test]
fn korean_text_is_kept() {
    let content = extract("<p>무선 전기 주전자 1.7L 스테인리스</p><p>★★★★★★★★★★</p>", "https://x.com/");

    assert_eq!(contents(&content.texts), vec!["무선 전기 주전자 1.7L 스테인리스"]);
}
