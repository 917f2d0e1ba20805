//! End-to-end conversion tests, through both the tree API and HTML input.

use html_to_text::{ConversionError, ConversionOptions, Element, convert, convert_html, render, render_html};

fn html(input: &str) -> String {
    convert_html(input, &ConversionOptions::default()).unwrap()
}

fn tree(root: &Element) -> String {
    convert(root, &ConversionOptions::default()).unwrap()
}

fn root() -> Element {
    Element::new("div")
}

#[test]
fn test_paragraph() {
    assert_eq!(tree(&root().with_child(Element::new("p").with_text("Hello"))), "Hello");
    assert_eq!(html("<p>Hello</p>"), "Hello");
}

#[test]
fn test_heading_and_paragraph() {
    let doc = root()
        .with_child(Element::new("h2").with_text("Title"))
        .with_child(Element::new("p").with_text("Body"));
    assert_eq!(tree(&doc), "## Title\nBody");
    assert_eq!(html("<h2>Title</h2><p>Body</p>"), "## Title\nBody");
}

#[test]
fn test_unordered_list() {
    assert_eq!(html("<ul><li>A</li><li>B</li></ul>"), "• A\n• B");
}

#[test]
fn test_ordered_list() {
    assert_eq!(html("<ol><li>A</li><li>B</li></ol>"), "1. A\n1. B");
}

#[test]
fn test_table() {
    assert_eq!(html("<table><tr><td>1</td><td>2</td></tr></table>"), "| 1 | 2 |");
}

#[test]
fn test_pre() {
    assert_eq!(html("<pre>code</pre>"), "```\ncode\n```");
    assert_eq!(html("<pre>\ncode</pre>"), "```\ncode\n```");
}

#[test]
fn test_heading_levels() {
    for level in 1..=6 {
        let text = html(&format!("<h{level}>  Heading  </h{level}>"));
        assert_eq!(text, format!("{} Heading", "#".repeat(level)));
    }
}

#[test]
fn test_blockquote() {
    assert_eq!(html("<p>Intro</p><blockquote>Quoted</blockquote>"), "Intro\n> Quoted");
}

#[test]
fn test_line_breaks() {
    assert_eq!(html("<p>line one<br>line two<br/>line three</p>"), "line one\nline two\nline three");
}

#[test]
fn test_inline_markup_flows() {
    assert_eq!(
        html("<p>A <strong>bold</strong> and <a href=\"https://example.com\">linked</a> word.</p>"),
        "A bold and linked word."
    );
}

#[test]
fn test_source_whitespace_is_normalized() {
    let input = "
        <div>
            <h1>Report</h1>


            <p>
                First    paragraph.
            </p>



            <p>Second</p>
        </div>
    ";
    assert_eq!(html(input), "# Report\n\nFirst paragraph.\n\nSecond");
}

#[test]
fn test_nested_list_raw_indentation() {
    let raw = render_html(
        "<ul><li>a<ul><li>b<ol><li>c</li></ol></li></ul></li></ul>",
        &ConversionOptions::default(),
    )
    .unwrap();
    assert_eq!(raw, "\n• a\n  • b\n    1. c\n");
}

#[test]
fn test_nested_list_normalized() {
    // The inner list closes its line, so the next outer item starts after a blank line.
    assert_eq!(html("<ul><li>a<ul><li>b</li></ul></li><li>c</li></ul>"), "• a\n• b\n\n• c");
}

#[test]
fn test_table_with_sections() {
    let input = "<table><thead><tr><th>Name</th><th>Price</th></tr></thead>\
        <tbody><tr><td> Apple </td><td>1.20</td></tr><tr><td><em>Pear</em></td><td>0.90</td></tr></tbody></table>";
    assert_eq!(html(input), "| Name | Price |\n| Apple | 1.20 |\n| Pear | 0.90 |");
}

#[test]
fn test_whitespace_between_rows_is_kept() {
    let input = "<table>\n<tr><td>a</td></tr>\n<tr><td>b</td></tr>\n</table>";
    assert_eq!(html(input), "| a |\n\n| b |");
}

#[test]
fn test_document_mix() {
    let input = "<h1>Guide</h1><p>Steps:</p><ol><li>Install</li><li>Run</li></ol><pre>make</pre><p>Done.</p>";
    assert_eq!(
        html(input),
        "# Guide\nSteps:\n\n1. Install\n1. Run\n```\nmake\n```\nDone."
    );
}

#[test]
fn test_entities_decoded_but_markdown_not_escaped() {
    assert_eq!(html("<p>1 &lt; 2 &amp;&amp; *stars*</p>"), "1 < 2 && *stars*");
}

#[test]
fn test_scripts_dropped() {
    assert_eq!(html("<p>shown</p><script>document.write('hidden')</script>"), "shown");
}

#[test]
fn test_scripts_containing_markup_dropped() {
    assert_eq!(html("<script>if (a<b) {}</script><p>z</p>"), "z");
    assert_eq!(html("<script>var s = '<p>';</script><p>visible</p>"), "visible");
    assert_eq!(html("<style>a<b {}</style><p>styled</p>"), "styled");
}

#[test]
fn test_omitted_end_tags() {
    assert_eq!(html("<table><tr><td>1<td>2</tr></table>"), "| 1 | 2 |");
    assert_eq!(html("<ul><li>one<li>two</ul>"), "• one\n• two");
}

#[test]
fn test_horizontal_rule_adds_no_separator() {
    assert_eq!(html("a<hr>b"), "ab");
    assert_eq!(html("a<hr/>b"), "ab");
}

#[test]
fn test_empty_documents() {
    assert_eq!(html(""), "");
    assert_eq!(html("   \n\t "), "");
    assert_eq!(html("<div><p></p><ul></ul><table></table></div>"), "");
    assert_eq!(tree(&root()), "");
}

#[test]
fn test_tree_and_html_agree() {
    let doc = root()
        .with_child(Element::new("h3").with_text("Menu"))
        .with_child(
            Element::new("ul")
                .with_child(Element::new("li").with_text("Tea"))
                .with_child(Element::new("li").with_text("Coffee")),
        );
    assert_eq!(tree(&doc), html("<h3>Menu</h3><ul><li>Tea</li><li>Coffee</li></ul>"));
}

#[test]
fn test_render_is_unnormalized() {
    let doc = root().with_child(Element::new("p").with_text("  spaced  "));
    assert_eq!(render(&doc, &ConversionOptions::default()).unwrap(), "  spaced  \n");
}

#[test]
fn test_depth_limit_reported() {
    let input = format!("{}deep{}", "<div>".repeat(40), "</div>".repeat(40));
    let options = ConversionOptions {
        max_depth: 16,
        ..Default::default()
    };
    assert_eq!(
        convert_html(&input, &options),
        Err(ConversionError::DepthLimitExceeded { limit: 16 })
    );
    assert_eq!(html(&input), "deep");
}

#[test]
fn test_concurrent_conversions() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                convert_html(
                    &format!("<ul><li>item {i}</li></ul><table><tr><td>{i}</td></tr></table>"),
                    &ConversionOptions::default(),
                )
                .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("• item {i}\n\n| {i} |"));
    }
}
