use pagemeta::{extract, Error, ImageSource};

#[test]
fn open_graph_page_yields_normalized_record() {
    let html = r#"
        <html>
          <head>
            <meta property="og:title" content="T">
            <meta property="og:image" content="/i.png">
            <meta name="description" content="D">
          </head>
          <body></body>
        </html>
    "#;

    let page = match extract(html, "https://site.test/p") {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(page.title.as_deref(), Some("T"));
    assert_eq!(page.description.as_deref(), Some("D"));
    assert_eq!(page.url.as_deref(), Some("https://site.test/p"));
    assert_eq!(page.images.len(), 1);
    assert_eq!(page.images[0].src, "https://site.test/i.png");
    assert_eq!(page.images[0].source, ImageSource::Og);
    assert!(page.videos.is_empty());
}

#[test]
fn page_without_metadata_falls_back_to_title_and_input_url() {
    let html = "<html><head><title>Hello</title></head><body></body></html>";

    let page = match extract(html, "https://site.test/p") {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(page.title.as_deref(), Some("Hello"));
    assert_eq!(page.url.as_deref(), Some("https://site.test/p"));
    assert!(page.images.is_empty());
    assert!(page.videos.is_empty());
    assert!(page.description.is_none());
}

#[test]
fn malformed_image_width_is_absent_not_fatal() {
    let html = r#"
        <html><head>
          <meta property="og:image" content="/i.png">
          <meta property="og:image:width" content="abc">
        </head></html>
    "#;

    let page = match extract(html, "https://site.test/p") {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(page.images.len(), 1);
    assert_eq!(page.images[0].width, None);
}

#[test]
fn empty_content_fails_extraction() {
    assert!(matches!(
        extract("", "https://site.test/p"),
        Err(Error::EmptyContent)
    ));
}

#[test]
fn keywords_are_split_in_order() {
    let html = r#"<html><head>
        <meta name="keywords" content="alpha, beta,gamma">
    </head></html>"#;

    let page = match extract(html, "https://site.test/p") {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(page.keywords, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn record_serializes_to_expected_json_shape() {
    let html = r#"
        <html><head>
          <meta property="og:title" content="T">
          <meta property="og:image" content="/i.png">
          <meta name="description" content="D">
        </head></html>
    "#;

    let page = match extract(html, "https://site.test/p") {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    let json = match serde_json::to_value(&page) {
        Ok(json) => json,
        Err(err) => panic!("serialization failed: {err}"),
    };

    assert_eq!(
        json,
        serde_json::json!({
            "url": "https://site.test/p",
            "title": "T",
            "description": "D",
            "images": [
                {"src": "https://site.test/i.png", "type": "og"}
            ],
            "videos": []
        })
    );
}

#[test]
fn video_tags_collect_into_one_record() {
    let html = r#"
        <html><head>
          <meta property="og:video" content="https://site.test/v.mp4">
          <meta property="og:video:type" content="video/mp4">
          <meta property="og:video:width" content="1280">
          <meta property="og:video:height" content="720">
        </head></html>
    "#;

    let page = match extract(html, "https://site.test/p") {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(page.videos.len(), 1);
    let video = &page.videos[0];
    assert_eq!(video.src.as_deref(), Some("https://site.test/v.mp4"));
    assert_eq!(video.content_type.as_deref(), Some("video/mp4"));
    assert_eq!(video.width, Some(1280));
    assert_eq!(video.height, Some(720));
}

#[test]
fn whitespace_wrapped_document_still_parses() {
    let html = "\n\n\t   <html><head><title>Padded</title></head></html>   \r\n";

    let page = match extract(html, "https://site.test/p") {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(page.title.as_deref(), Some("Padded"));
}
