//! Comprehensive tests for splitkit-html
//!
//! Parsing edge cases and serializer output.

use splitkit_html::{HtmlParser, HtmlSerializer, parse, serialize};

#[test]
fn test_parse_minimal_html() {
    let doc = HtmlParser::new().parse("").unwrap();
    assert!(doc.head().is_valid(), "Even empty HTML should get a head");
    assert_eq!(serialize(&doc), "<html><head></head><body></body></html>");
}

#[test]
fn test_parse_text_only() {
    let doc = parse("Hello World").unwrap();
    assert_eq!(serialize(&doc), "<html><head></head><body>Hello World</body></html>");
}

#[test]
fn test_parse_self_closing_tags() {
    let html = r#"<br><hr><img src="test.png"><input type="text">"#;
    let doc = parse(html).unwrap();
    let body = HtmlSerializer::new().serialize_inner(doc.tree(), doc.body());
    assert_eq!(body, r#"<br><hr><img src="test.png"><input type="text">"#);
}

#[test]
fn test_parse_nested_structure() {
    let html = r#"
        <html>
            <head>
                <title>Test Page</title>
                <meta charset="utf-8">
            </head>
            <body>
                <div id="container">
                    <h1>Welcome</h1>
                    <p class="intro">This is a test.</p>
                    <ul>
                        <li>Item 1</li>
                        <li>Item 2</li>
                    </ul>
                </div>
            </body>
        </html>
    "#;

    let doc = parse(html).unwrap();
    assert_eq!(doc.title(), "Test Page");
    assert_eq!(doc.elements_by_tag("li").len(), 2);
    assert!(doc.tree().len() > 10);
}

#[test]
fn test_parse_malformed_html() {
    let html = r#"
        <div>
            <p>Unclosed paragraph
            <span>Unclosed span
        </div>
        <p>Another paragraph without closing
    "#;

    let doc = parse(html).unwrap();
    assert_eq!(doc.elements_by_tag("p").len(), 2);
    assert_eq!(doc.elements_by_tag("span").len(), 1);
}

#[test]
fn test_doctype_not_in_outer_html() {
    let doc = parse("<!DOCTYPE html><html><head></head><body></body></html>").unwrap();
    assert!(serialize(&doc).starts_with("<html>"));

    let whole = HtmlSerializer::new().serialize_document(&doc);
    assert_eq!(whole, "<!DOCTYPE html><html><head></head><body></body></html>");
}

#[test]
fn test_roundtrip_is_stable() {
    let html = r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><style>a > b { color: red; }</style></head><body><!-- note --><p title="a &quot;b&quot;">x &amp; y</p><script>if (1 < 2) {}</script></body></html>"#;
    let first = HtmlSerializer::new().serialize_document(&parse(html).unwrap());
    let second = HtmlSerializer::new().serialize_document(&parse(&first).unwrap());

    assert_eq!(first, html);
    assert_eq!(first, second);
}

#[test]
fn test_head_content_after_body_is_recovered() {
    let doc = parse("<html><body><p>x</p></body></html><style>a{}</style>").unwrap();
    // html5ever moves stray content into body
    assert_eq!(doc.elements_by_tag("style").len(), 1);
}
