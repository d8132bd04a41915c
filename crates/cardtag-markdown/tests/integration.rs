use cardtag_markdown::{convert, ElementFragment, Fragment, MAX_NESTING};
use proptest::prelude::*;

const ALLOWED: &[&str] = &[
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "strong",
    "em",
    "del",
    "code",
    "pre",
    "blockquote",
    "ul",
    "ol",
    "li",
    "a",
    "img",
    "br",
    "hr",
    "span",
];

fn walk<'a>(fragments: &'a [Fragment], out: &mut Vec<&'a ElementFragment>) {
    for fragment in fragments {
        if let Fragment::Element(element) = fragment {
            out.push(element);
            walk(&element.children, out);
        }
    }
}

fn elements(fragments: &[Fragment]) -> Vec<&ElementFragment> {
    let mut out = Vec::new();
    walk(fragments, &mut out);
    out
}

fn depth(fragments: &[Fragment]) -> usize {
    fragments
        .iter()
        .filter_map(Fragment::as_element)
        .map(|element| 1 + depth(&element.children))
        .max()
        .unwrap_or(0)
}

#[test]
fn script_block_is_text() {
    let fragments = convert("<script>alert('x')</script>");
    let all = elements(&fragments);
    assert!(all.iter().all(|element| element.name != "script"));
    let text: String = fragments.iter().map(Fragment::text_content).collect();
    assert!(text.contains("<script>"));
}

#[test]
fn multiple_paragraphs_keep_order() {
    let fragments = convert("first\n\nsecond\n\nthird");
    let texts: Vec<String> = fragments.iter().map(Fragment::text_content).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[test]
fn headings_map_to_levels() {
    let fragments = convert("# one\n\n### three");
    let names: Vec<&str> = fragments
        .iter()
        .filter_map(Fragment::as_element)
        .map(|element| element.name.as_str())
        .collect();
    assert_eq!(names, vec!["h1", "h3"]);
}

#[test]
fn soft_break_is_newline_text() {
    let fragments = convert("line one\nline two");
    assert_eq!(fragments[0].text_content(), "line one\nline two");
}

#[test]
fn hard_break_is_br() {
    let fragments = convert("line one  \nline two");
    let names: Vec<&str> = elements(&fragments).iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["p", "br"]);
}

#[test]
fn inline_code_and_rule() {
    let fragments = convert("use `x`\n\n---");
    let names: Vec<&str> = elements(&fragments).iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["p", "code", "hr"]);
}

#[test]
fn deeply_nested_quotes_are_flattened() {
    let input = format!("{} innermost", ">".repeat(5000));
    let fragments = convert(&input);
    assert_eq!(depth(&fragments), MAX_NESTING);
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].text_content(), "innermost");
}

#[test]
fn deeply_nested_lists_keep_every_item() {
    let input: String = (0..200)
        .map(|level| format!("{}- item{}\n", "  ".repeat(level), level))
        .collect();
    let fragments = convert(&input);
    assert!(depth(&fragments) <= MAX_NESTING);
    let text: String = fragments.iter().map(Fragment::text_content).collect();
    assert!(text.contains("item0"));
    assert!(text.contains("item199"));
}

#[test]
fn shallow_nesting_is_untouched() {
    let fragments = convert("> > quoted");
    assert_eq!(depth(&fragments), 3);
    let outer = fragments[0].as_element().unwrap();
    assert_eq!(outer.name, "blockquote");
}

proptest! {
    #[test]
    fn nesting_never_exceeds_limit(input in "[>*\\- ]{0,400}[a-z]{1,5}") {
        let fragments = convert(&input);
        prop_assert!(depth(&fragments) <= MAX_NESTING);
    }

    #[test]
    fn never_emits_unexpected_elements(input in ".{0,200}") {
        let fragments = convert(&input);
        for element in elements(&fragments) {
            prop_assert!(ALLOWED.contains(&element.name.as_str()), "unexpected element {}", element.name);
        }
    }

    #[test]
    fn html_tags_never_become_elements(tag in "(script|iframe|div|object|style)", body in "[a-z ]{0,20}") {
        let input = format!("<{tag}>{body}</{tag}> and *more*");
        let fragments = convert(&input);
        for element in elements(&fragments) {
            prop_assert_ne!(element.name.as_str(), tag.as_str());
        }
    }

    #[test]
    fn link_hrefs_are_always_safe(scheme in "[a-z]{1,10}", rest in "[a-z0-9/.]{1,20}") {
        let input = format!("[x]({scheme}:{rest})");
        let fragments = convert(&input);
        for element in elements(&fragments) {
            if let Some(href) = element.attribute("href") {
                prop_assert!(cardtag_markdown::is_safe_url(href));
            }
        }
    }
}
