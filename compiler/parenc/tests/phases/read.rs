//! Reader phase: source text to tree.

use paren_ir::Node;
use parenc::{read_source, DEMO_INPUT};
use pretty_assertions::assert_eq;

#[test]
fn demo_input_reads_as_nested_form() {
    let tree = read_source(DEMO_INPUT).unwrap();
    assert_eq!(tree.to_string(), "(+ 1.000000 2.000000 (* 3.000000 4.000000))");
}

#[test]
fn rendered_tree_reads_back_identically() {
    let tree = read_source("(- (/ 9 3) (* 2 -1.5) ())").unwrap();
    let again = read_source(&tree.to_string()).unwrap();
    assert_eq!(again, tree);
}

#[test]
fn multi_line_input() {
    let source = "(+ 1\n   (* 2\n      3))\n";
    assert_eq!(
        read_source(source).unwrap(),
        Node::list(vec![
            Node::symbol("+"),
            Node::number(1.0),
            Node::list(vec![Node::symbol("*"), Node::number(2.0), Node::number(3.0)]),
        ])
    );
}
