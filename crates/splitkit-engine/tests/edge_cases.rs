//! Edge cases for split and combine

use splitkit_engine::{Combiner, FailureKind, Notification, Session, combine, split};

#[test]
fn test_template_contents_left_alone() {
    let input = "<body><template><style>t{}</style><script>t()</script></template><style>a{}</style></body>";
    let out = split(input).unwrap();

    assert_eq!(out.css, "a{}");
    assert_eq!(out.js, "");
    assert!(out.html.contains("<template><style>t{}</style><script>t()</script></template>"));
}

#[test]
fn test_svg_blocks_are_extracted() {
    let input = "<body><svg><style>c{fill:red}</style><script>svgGo()</script>\
                 <circle r=\"1\"></circle></svg></body>";
    let out = split(input).unwrap();

    assert_eq!(out.css, "c{fill:red}");
    assert_eq!(out.js, "svgGo()");
    assert!(out.html.contains("<svg><circle r=\"1\"></circle></svg>"));
    assert!(out.html.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
    assert!(out.html.contains("<script src=\"script.js\"></script>"));
}

#[test]
fn test_frameset_document_splits() {
    let out = split(
        "<html><head><style>a{}</style></head><frameset><frame src=a.html></frameset></html>",
    )
    .unwrap();

    assert_eq!(out.css, "a{}");
    assert_eq!(
        out.html,
        "<!DOCTYPE html>\n<html><head><link rel=\"stylesheet\" href=\"style.css\"></head>\
         <frameset><frame src=\"a.html\"></frameset></html>"
    );
}

#[test]
fn test_recombine_with_crlf_sources_is_idempotent() {
    let html = "<html><head><title>t</title></head><body><p>x</p></body></html>";
    let (css, js) = ("a{}\r\nb{}\r", "one();\r\ntwo();");

    for combiner in [Combiner::new(), Combiner::without_sanitizer()] {
        let once = combiner.combine(html, css, js).unwrap();
        let twice = combiner.combine(&once, css, js).unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice.matches("<style>").count(), 1);
        assert_eq!(twice.matches("<script>").count(), 1);
        assert!(twice.contains("<style>\na{}\nb{}\n</style>"));
        assert!(!twice.contains('\r'));
    }
}

#[test]
fn test_uppercase_tags_and_module_scripts() {
    let out = split("<HEAD><STYLE>p{}</STYLE></HEAD><BODY><SCRIPT TYPE=\"module\">import x from './x.js';</SCRIPT></BODY>").unwrap();
    assert_eq!(out.css, "p{}");
    assert_eq!(out.js, "import x from './x.js';");
}

#[test]
fn test_raw_text_kept_verbatim() {
    let out = split("<style>a::after{content:\"&amp; <b>\"}</style><script>if (a < b && c > d) {}</script>").unwrap();
    assert_eq!(out.css, "a::after{content:\"&amp; <b>\"}");
    assert_eq!(out.js, "if (a < b && c > d) {}");

    let html = combine("<p>x</p>", &out.css, &out.js).unwrap();
    assert!(html.contains("<style>\na::after{content:\"&amp; <b>\"}\n</style>"));
    assert!(html.contains("<script>\nif (a < b && c > d) {}\n</script>"));
}

#[test]
fn test_malformed_input_still_splits() {
    let out = split("<div><style>a{}<p>unclosed <script>go()").unwrap();
    // an unterminated raw text element swallows the rest of the input
    assert_eq!(out.css, "a{}<p>unclosed <script>go()");
    assert_eq!(out.js, "");
    assert!(out.html.starts_with("<!DOCTYPE html>\n"));
}

#[test]
fn test_split_keeps_other_markup_and_attributes() {
    let out = split(
        "<html data-theme=\"dark\"><head><meta name=\"viewport\" content=\"width=device-width\"><style>x{}</style></head><body class=\"home\"><!-- c --><p>&lt;hi&gt;</p></body></html>",
    )
    .unwrap();
    assert_eq!(
        out.html,
        "<!DOCTYPE html>\n<html data-theme=\"dark\"><head><meta name=\"viewport\" content=\"width=device-width\"><link rel=\"stylesheet\" href=\"style.css\"></head><body class=\"home\"><!-- c --><p>&lt;hi&gt;</p></body></html>"
    );
}

#[test]
fn test_combine_only_removes_exact_references() {
    let html = Combiner::without_sanitizer()
        .combine(
            "<head><link rel=\"stylesheet\" href=\"theme.css\"><link rel=\"stylesheet\" href=\"style.css\"></head><body><script src=\"vendor/script.js\"></script><script src=\"script.js\"></script></body>",
            "",
            "",
        )
        .unwrap();

    assert!(html.contains("href=\"theme.css\""));
    assert!(html.contains("src=\"vendor/script.js\""));
    assert!(!html.contains("href=\"style.css\""));
    assert!(!html.contains("src=\"script.js\""));
    assert!(!html.contains("<style"));
}

#[test]
fn test_combine_sanitizes_event_handlers() {
    let html = combine(
        "<body onload=\"steal()\"><a href=\"javascript:steal()\">x</a><img src=\"a.png\" onerror=\"steal()\"></body>",
        "",
        "",
    )
    .unwrap();
    assert!(!html.contains("steal"));
    assert!(html.contains("<img src=\"a.png\">"));
}

#[test]
fn test_combine_blank_html_kind() {
    let err = combine("", "a{}", "").unwrap_err();
    assert_eq!(err.kind(), FailureKind::Parse);
}

#[test]
fn test_session_roundtrip_through_panes() {
    let mut session = Session::default();
    let mut sink: Vec<Notification> = Vec::new();
    session.split.input = "<head><style>a{}</style></head><body><p>x</p><script>b()</script></body>".into();
    assert!(session.process_split(&mut sink));

    session.combine.html_in = session.split.html_out.clone();
    session.combine.css_in = session.split.css_out.clone();
    session.combine.js_in = session.split.js_out.clone();
    assert!(session.process_combine(&mut sink));

    let out = &session.combine.out;
    assert!(out.contains("<style>\na{}\n</style>"));
    assert!(out.contains("<p>x</p><script>\nb()\n</script>"));
    assert!(!out.contains("style.css"));
    assert!(sink.iter().all(|n| !n.is_error()));
}
