use content_sieve::dom;
use content_sieve::parser::{extract_videos, ExtractionContext};
use content_sieve::{extract, extract_with_options, Dimensions, ElementGeometry, LayoutSnapshot, Page, ParserOptions};

const LESSON_PAGE: &str = r#"<html><head><title>Lesson 3</title></head><body>
  <header><video id="loop" src="/media/header-loop.mp4" autoplay muted></video></header>
  <main>
    <video id="lecture" poster="thumbs/lecture.jpg">
      <source src="/media/lecture.webm" type="video/webm">
      <source src="/media/lecture.mp4" type="video/mp4">
    </video>
    <div class="advertisement"><video id="ad" src="/ads/spot.mp4"></video></div>
    <video id="preview" src="https://cdn.example.org/preview.mp4"></video>
    <video id="live" src="/media/live.m3u8"></video>
  </main>
</body></html>"#;

fn lesson_page() -> Page {
    let doc = dom::parse(LESSON_PAGE);
    let mut snapshot = LayoutSnapshot {
        scroll_y: 40.0,
        ..LayoutSnapshot::default()
    };
    snapshot.set(&doc, "#loop", &ElementGeometry::boxed(0.0, 1280.0, 300.0));
    snapshot.set(
        &doc,
        "#lecture",
        &ElementGeometry::boxed(320.0, 960.0, 540.0)
            .with_natural_size(1920.0, 1080.0)
            .with_duration(1834.5),
    );
    snapshot.set(&doc, "#ad", &ElementGeometry::boxed(900.0, 640.0, 360.0));
    snapshot.set(&doc, "#preview", &ElementGeometry::boxed(1300.0, 160.0, 90.0));
    snapshot.set(
        &doc,
        "#live",
        &ElementGeometry::boxed(1500.0, 640.0, 360.0).with_duration(f64::INFINITY),
    );
    Page::with_snapshot(LESSON_PAGE, "https://learn.example.org/course/3", snapshot)
}

#[test]
fn lesson_page_keeps_content_videos() {
    let page = lesson_page();
    let mut ctx = ExtractionContext::new(&page);
    let videos = extract_videos(&mut ctx, &ParserOptions::default().compile().video);
    let srcs: Vec<&str> = videos.iter().map(|v| v.src.as_str()).collect();

    assert_eq!(
        srcs,
        vec!["https://learn.example.org/media/lecture.webm", "https://learn.example.org/media/live.m3u8"]
    );
}

#[test]
fn lecture_reports_poster_duration_and_intrinsic_size() {
    let page = lesson_page();
    let mut ctx = ExtractionContext::new(&page);
    let videos = extract_videos(&mut ctx, &ParserOptions::default().compile().video);
    let lecture = &videos[0];

    assert_eq!(lecture.poster, "https://learn.example.org/course/thumbs/lecture.jpg");
    assert_eq!((lecture.width, lecture.height), (1920.0, 1080.0));
    assert_eq!(lecture.duration, 1834.5);
    assert_eq!(lecture.position, 360.0);
}

#[test]
fn unknown_duration_is_zero() {
    let page = lesson_page();
    let mut ctx = ExtractionContext::new(&page);
    let videos = extract_videos(&mut ctx, &ParserOptions::default().compile().video);
    let live = videos.iter().find(|v| v.src.ends_with("live.m3u8")).expect("live stream kept");

    assert_eq!(live.duration, 0.0);
    assert_eq!(live.poster, "");
}

#[test]
fn lowered_minimum_admits_small_preview() {
    let page = lesson_page();
    let options = ParserOptions {
        min_video_size: Some(Dimensions::new(100.0, 80.0)),
        ..ParserOptions::default()
    };
    let mut ctx = ExtractionContext::new(&page);
    let videos = extract_videos(&mut ctx, &options.compile().video);

    assert!(videos.iter().any(|v| v.src == "https://cdn.example.org/preview.mp4"));
    assert!(videos.windows(2).all(|w| w[0].position <= w[1].position));
}

#[test]
fn size_attributes_used_without_layout() {
    let content = extract(
        r#"<video src="/a.mp4" width="640" height="360"></video>
           <video src="/b.mp4" width="120" height="90"></video>
           <video width="640" height="360"></video>"#,
        "https://x.com/",
    );

    assert_eq!(content.videos.len(), 1);
    assert_eq!(content.videos[0].src, "https://x.com/a.mp4");
    assert_eq!((content.videos[0].width, content.videos[0].height), (640.0, 360.0));
}

#[test]
fn custom_selectors_replace_video_defaults() {
    let html = r#"<nav><video src="/nav.mp4" width="640" height="360"></video></nav>
                  <div class="sponsored"><video src="/s.mp4" width="640" height="360"></video></div>"#;
    let options = ParserOptions {
        exclude_selectors: Some(vec![".sponsored".to_string()]),
        ..ParserOptions::default()
    };
    let content = extract_with_options(html, "https://x.com/", &options);
    let srcs: Vec<&str> = content.videos.iter().map(|v| v.src.as_str()).collect();

    assert_eq!(srcs, vec!["https://x.com/nav.mp4"]);
}
