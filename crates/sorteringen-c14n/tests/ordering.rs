use sorteringen_c14n::{canonical_start_tag, compare_attributes, is_sorted, sort_attributes};
use sorteringen_xml::{AttrNode, AttributeNode};
use std::cmp::Ordering;

fn pool() -> Vec<AttrNode> {
    vec![
        AttrNode::namespace_decl(None, "http://default"),
        AttrNode::namespace_decl(Some("a"), "http://a"),
        AttrNode::namespace_decl(Some("b"), "http://b"),
        AttrNode::namespace_decl(Some("b"), "http://b2"),
        AttrNode::namespace_decl(Some("xmlnsx"), "http://x"),
        AttrNode::unqualified("a", ""),
        AttrNode::unqualified("b", ""),
        AttrNode::unqualified("B", ""),
        AttrNode::unqualified("\u{e9}", ""),
        AttrNode::qualified("http://x", Some("x"), "a", ""),
        AttrNode::qualified("http://x", Some("y"), "a", ""),
        AttrNode::qualified("http://x", Some("x"), "z", ""),
        AttrNode::qualified("http://a", Some("p"), "z", ""),
        AttrNode::qualified("http://www.w3.org/XML/1998/namespace", Some("xml"), "lang", ""),
    ]
}

#[test]
fn reflexive_and_antisymmetric() {
    let nodes = pool();
    for a in &nodes {
        assert_eq!(compare_attributes(a, a), Ordering::Equal);
        for b in &nodes {
            assert_eq!(
                compare_attributes(a, b),
                compare_attributes(b, a).reverse(),
                "{} vs {}",
                a.qualified_name,
                b.qualified_name
            );
        }
    }
}

#[test]
fn transitive() {
    let nodes = pool();
    for a in &nodes {
        for b in &nodes {
            for c in &nodes {
                if compare_attributes(a, b) != Ordering::Greater
                    && compare_attributes(b, c) != Ordering::Greater
                {
                    assert_ne!(
                        compare_attributes(a, c),
                        Ordering::Greater,
                        "{} <= {} <= {}",
                        a.qualified_name,
                        b.qualified_name,
                        c.qualified_name
                    );
                }
            }
        }
    }
}

#[test]
fn namespace_partition() {
    let nodes = pool();
    for n in nodes.iter().filter(|n| n.is_namespace_decl()) {
        for a in nodes.iter().filter(|n| !n.is_namespace_decl()) {
            assert_eq!(compare_attributes(n, a), Ordering::Less);
            assert_eq!(compare_attributes(a, n), Ordering::Greater);
        }
    }
}

#[test]
fn default_namespace_precedes_all_declarations() {
    let nodes = pool();
    let default = &nodes[0];
    for n in nodes.iter().filter(|n| n.is_namespace_decl()) {
        assert_ne!(compare_attributes(default, n), Ordering::Greater);
    }
}

#[test]
fn unqualified_precedes_qualified() {
    let nodes = pool();
    let attrs: Vec<&AttrNode> = nodes.iter().filter(|n| !n.is_namespace_decl()).collect();
    for x in attrs.iter().filter(|n| n.namespace_uri().is_none()) {
        for y in attrs.iter().filter(|n| n.namespace_uri().is_some()) {
            assert_eq!(compare_attributes(*x, *y), Ordering::Less);
        }
    }
}

#[test]
fn end_to_end_order() {
    let mut nodes = vec![
        AttrNode::unqualified("b", ""),
        AttrNode::unqualified("a", ""),
        AttrNode::namespace_decl(Some("foo"), "http://foo"),
        AttrNode::namespace_decl(None, "http://default"),
        AttrNode::qualified("http://x", Some("x"), "z", ""),
        AttrNode::qualified("http://x", Some("x"), "a", ""),
    ];
    sort_attributes(&mut nodes);
    let names: Vec<&str> = nodes.iter().map(|n| n.qualified_name()).collect();
    assert_eq!(names, vec!["xmlns", "xmlns:foo", "a", "b", "x:a", "x:z"]);
    assert!(is_sorted(&nodes));
}

#[test]
fn sorting_sorted_input_is_a_no_op() {
    let mut once = pool();
    sort_attributes(&mut once);
    let mut twice = once.clone();
    sort_attributes(&mut twice);
    assert_eq!(once, twice);
}

#[test]
fn sorting_is_independent_of_input_order() {
    let mut forward = pool();
    let mut backward = pool();
    backward.reverse();
    // equivalent pairs keep input order, so keep one of each
    let distinct = |n: &AttrNode| n.value != "http://b2" && n.qualified_name != "y:a";
    forward.retain(distinct);
    backward.retain(distinct);
    sort_attributes(&mut forward);
    sort_attributes(&mut backward);
    assert_eq!(forward, backward);
}

#[test]
fn canonical_start_tags_from_document() {
    let xml = r#"<doc xmlns:b="http://b" xmlns:a="http://a" xmlns="http://d">
  <e a:attr="out" b:attr="sorted" attr2="all" attr="I'm" xml:lang="en"/>
</doc>"#;
    let doc = roxmltree::Document::parse(xml).unwrap();
    let tags: Vec<String> = doc
        .descendants()
        .filter(|n| n.is_element())
        .map(|n| canonical_start_tag(n).unwrap())
        .collect();
    assert_eq!(
        tags,
        vec![
            r#"<doc xmlns="http://d" xmlns:a="http://a" xmlns:b="http://b">"#.to_owned(),
            r#"<e attr="I'm" attr2="all" a:attr="out" b:attr="sorted" xml:lang="en">"#.to_owned(),
        ]
    );
}
