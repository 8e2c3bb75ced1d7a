//! Property-style tests for the parsing module.
//!
//! Every case runs through `invariants::check` in addition to its own
//! assertions.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::parse_links;

#[rstest]
#[case("")]
#[case("plain text only")]
#[case("brackets [without] a target")]
#[case("parens (without) a label")]
#[case("unbalanced ]] [[ )) ((")]
#[case("a [b] c (d)")]
#[case("[](x)[](y)")]
#[case("[]()")]
fn text_without_links_is_unchanged(#[case] input: &str) {
    let parsed = parse_links(input);
    invariants::check(input, &parsed);
    assert_eq!(parsed.display_text, input);
    assert!(parsed.links.is_empty());
}

#[rstest]
#[case("[label](url)", "label", "url")]
#[case("before [label](url) after", "before label after", "url")]
#[case("[label]   (url)", "label", "url")]
#[case("[label]( url )", "label", "url")]
#[case("[a [nested] label](x)", "a [nested] label", "x")]
#[case("[empty target]()", "empty target", "")]
fn single_link_replaced_by_label(
    #[case] input: &str,
    #[case] display: &str,
    #[case] target: &str,
) {
    let parsed = parse_links(input);
    invariants::check(input, &parsed);
    assert_eq!(parsed.display_text, display);
    assert_eq!(parsed.links.len(), 1);
    assert_eq!(parsed.links[0].target, target);
}

#[rstest]
#[case("This has one [Markdown](URL) in it")]
#[case("This has [two](URL) separate [links]()")]
#[case("This has complex [mar[kd]own]    (URL) in it")]
#[case("This has one [inco]rre(ct) URL with [one correct](URL) URL")]
fn reparsing_display_text_is_a_no_op(#[case] input: &str) {
    let first = parse_links(input);
    invariants::check(input, &first);

    let second = parse_links(&first.display_text);
    invariants::check(&first.display_text, &second);
    assert_eq!(second.display_text, first.display_text);
    assert!(second.links.is_empty());
}

#[test]
fn links_keep_source_order() {
    let input = "[one](1) then [two](2) then [three](3)";
    let parsed = parse_links(input);
    invariants::check(input, &parsed);

    let targets: Vec<_> = parsed.mappings().map(|(_, target)| target).collect();
    assert_eq!(targets, vec!["1", "2", "3"]);
}

#[test]
fn long_mixed_input_holds_invariants() {
    let input = "[a](1) ]x[ [b] (2) [[c]](3) [d](4 [e](5)) (f) [g]  \n (7) [h](";
    let parsed = parse_links(input);
    invariants::check(input, &parsed);

    let labels: Vec<_> = parsed.links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["a", "b", "[c]", "e", "g"]);
    assert_eq!(parsed.display_text, "a ]x[ b [c] [d](4 e) (f) g [h](");
}
