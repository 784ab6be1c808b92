//! Style/script block classification and auto-link references

use splitkit_dom::{Document, DomResult, ElementData, NodeId};

use crate::{SCRIPT_FILENAME, STYLE_FILENAME};

/// Script types holding data rather than code
const STRUCTURED_DATA_TYPES: &[&str] = &["application/ld+json", "application/json"];

/// True when a script `type` attribute names structured data.
/// Parameters (`; charset=...`) and case are ignored.
pub(crate) fn is_structured_data_type(script_type: &str) -> bool {
    let essence = script_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    STRUCTURED_DATA_TYPES.contains(&essence.as_str())
}

/// Inline stylesheet, in any namespace
pub(crate) fn is_style_block(elem: &ElementData) -> bool {
    elem.local == "style"
}

/// Inline script whose text is executable JS, in any namespace
pub(crate) fn is_script_block(elem: &ElementData) -> bool {
    elem.local == "script"
        && !elem.has_attr("src")
        && !elem.get_attr("type").is_some_and(is_structured_data_type)
}

/// A `<link>` pointing at the split stylesheet
pub(crate) fn is_link_reference(elem: &ElementData) -> bool {
    elem.local == "link" && elem.get_attr("href") == Some(STYLE_FILENAME)
}

/// A `<script>` pointing at the split script
pub(crate) fn is_script_reference(elem: &ElementData) -> bool {
    elem.local == "script" && elem.get_attr("src") == Some(SCRIPT_FILENAME)
}

/// Attached elements with local name `tag` accepted by `filter`, in
/// document order
pub(crate) fn find_blocks(
    document: &Document,
    tag: &str,
    filter: impl Fn(&ElementData) -> bool,
) -> Vec<NodeId> {
    document
        .elements_by_local_name(tag)
        .into_iter()
        .filter(|&id| document.tree().element(id).is_some_and(&filter))
        .collect()
}

/// Append `<link rel="stylesheet" href="style.css">` to `head`
pub(crate) fn append_link_reference(document: &mut Document) -> DomResult<()> {
    let head = document.head();
    let mut link = ElementData::new("link");
    link.set_attr("rel", "stylesheet");
    link.set_attr("href", STYLE_FILENAME);

    let tree = document.tree_mut();
    let id = tree.create_element_with(link);
    tree.append_child(head, id)
}

/// Append `<script src="script.js"></script>` to `body`
pub(crate) fn append_script_reference(document: &mut Document) -> DomResult<()> {
    let body = document.body();
    let mut script = ElementData::new("script");
    script.set_attr("src", SCRIPT_FILENAME);

    let tree = document.tree_mut();
    let id = tree.create_element_with(script);
    tree.append_child(body, id)
}

/// Append an inline `tag` element holding `"\n" + text + "\n"` to `parent`
pub(crate) fn append_inline_block(
    document: &mut Document,
    parent: NodeId,
    tag: &str,
    text: &str,
) -> DomResult<()> {
    let tree = document.tree_mut();
    let id = tree.create_element(tag);
    tree.set_text_content(id, &format!("\n{text}\n"))?;
    tree.append_child(parent, id)
}
