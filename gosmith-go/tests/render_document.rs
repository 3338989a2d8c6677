mod common;

use gosmith_codegen::testing::assert_content_eq;
use gosmith_go::{Comment, Error, Func, FuncSignature, Newline, Package, Param, Root, stmts};

#[test]
fn test_reference_document() {
    let generated = common::reference_document().render(0).unwrap();
    insta::assert_snapshot!("full_document", generated);
}

#[test]
fn test_reference_document_with_indent() {
    let generated = common::reference_document().render(2).unwrap();
    let expected = "\t\t// THIS CODE WAS AUTO GENERATED

\t\tpackage mypkg

\t\timport (
\t\t\t\"fmt\"
\t\t)

\t\ttype MyInterface interface {
\t\t\tMyFunc(foo string) (string, error)
\t\t}

\t\ttype MyStruct struct {
\t\t\tFoo string
\t\t\tBar int64
\t\t}

\t\tfunc (m *MyStruct) MyFunc(foo string) (string, error) {
\t\t\t{
\t\t\t\tstr := \t\t\t\tfunc(bar string) string {
\t\t\t\t\treturn bar
\t\t\t\t}(foo)

\t\t\t\tif str == \"\" {
\t\t\t\t\tfor i := 0; i < 3; i++ {
\t\t\t\t\t\tfmt.Printf(\"%d\\n\", i)
\t\t\t\t\t}
\t\t\t\t}

\t\t\t\tswitch str {
\t\t\t\tcase \"\":
\t\t\t\t\t// empty string
\t\t\t\tcase \"foo\":
\t\t\t\t\t// foo string
\t\t\t\tdefault:
\t\t\t\t\t// default
\t\t\t\t}

\t\t\t\treturn str, nil
\t\t\t}
\t\t}
";
    assert_content_eq(expected, &generated);
}

#[test]
#[ignore = "needs gofmt on PATH; run with --ignored"]
fn test_syntax_check_keeps_unformatted_text() {
    common::require("gofmt");
    let root = common::reference_document();
    let checked = root.enable_syntax_checking().render(0).unwrap();
    assert_eq!(checked, root.render(0).unwrap());
}

#[test]
fn test_replacing_statements() {
    let root = common::reference_document().statements(stmts![Comment::new("modified")]);
    assert_eq!(root.render(0).unwrap(), "//modified\n");
}

#[test]
fn test_diverging_builds_share_a_base() {
    let base = Root::new().add_statements(stmts![Package::new("mypkg"), Newline]);
    let left = base.add_statement(Comment::new(" left"));
    let right = base.add_statement(Comment::new(" right"));

    assert_eq!(base.render(0).unwrap(), "package mypkg\n\n");
    assert_eq!(left.render(0).unwrap(), "package mypkg\n\n// left\n");
    assert_eq!(right.render(0).unwrap(), "package mypkg\n\n// right\n");
}

#[test]
fn test_missing_signature_fails_render() {
    let root = Root::new().add_statements(stmts![
        Comment::new(" THIS CODE WAS AUTO GENERATED"),
        Newline,
        Package::new("mypkg"),
        Newline,
        Func::new(None),
    ]);
    let err = root.render(0).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingChild {
            node: "func",
            child: "signature",
            ..
        }
    ));
    assert!(err.to_string().starts_with("func has no signature"));
}

#[test]
fn test_untyped_leading_parameter() {
    let root = Root::new().add_statement(Func::new(
        FuncSignature::new("f").add_parameters([Param::new("a", ""), Param::new("b", "string")]),
    ));
    assert_eq!(root.render(0).unwrap(), "func f(a, b string) {\n}\n");
}

#[test]
fn test_untyped_last_parameter_names_it() {
    let root = Root::new().add_statement(Func::new(
        FuncSignature::new("f").add_parameters([Param::new("a", "string"), Param::new("b", "")]),
    ));
    let err = root.render(0).unwrap_err();
    match &err {
        Error::ParameterTypeOrder { name, .. } => assert_eq!(name, "b"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("'b'"));
}
