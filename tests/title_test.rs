use innertext::{hoist_title, Node};

#[test]
fn title_comes_from_the_leading_heading() {
    let mut doc = Node::root(vec![
        Node::element("h1", vec![Node::text("My  Document")]),
        Node::element("p", vec![Node::text("Body text.")]),
    ]);
    let mut title = None;

    assert!(hoist_title(&mut doc, &mut title));
    assert_eq!(title.as_deref(), Some("My Document"));
    assert_eq!(doc.children().len(), 1);
}

#[test]
fn heading_with_inline_markup_extracts_visible_text() {
    let mut doc = Node::root(vec![Node::element(
        "h1",
        vec![
            Node::text("Hello "),
            Node::element("em", vec![Node::text("there")]),
        ],
    )]);
    let mut title = None;

    assert!(hoist_title(&mut doc, &mut title));
    assert_eq!(title.as_deref(), Some("Hello there"));
}

#[test]
fn heading_after_metadata_comment_is_found() {
    let mut doc = Node::root(vec![
        Node::comment("title: ignored"),
        Node::element("h1", vec![Node::text("Real Title")]),
        Node::element("p", vec![Node::text("Body")]),
    ]);
    let mut title = None;

    assert!(hoist_title(&mut doc, &mut title));
    assert_eq!(title.as_deref(), Some("Real Title"));
    assert_eq!(doc.children().len(), 2);
}

#[test]
fn h2_is_not_a_title() {
    let mut doc = Node::root(vec![Node::element("h2", vec![Node::text("Sub")])]);
    let mut title = None;

    assert!(!hoist_title(&mut doc, &mut title));
    assert!(title.is_none());
    assert_eq!(doc.children().len(), 1);
}

#[test]
fn heading_deeper_in_the_document_is_not_a_title() {
    let mut doc = Node::root(vec![
        Node::element("p", vec![Node::text("intro")]),
        Node::element("h1", vec![Node::text("Late")]),
    ]);
    let mut title = None;

    assert!(!hoist_title(&mut doc, &mut title));
    assert!(title.is_none());
}
