#![allow(dead_code)]

use gosmith_codegen::testing::command_available;
use gosmith_go::{
    AnonymousFunc, AnonymousFuncSignature, Case, CodeBlock, Comment, DefaultCase, For, Func,
    FuncInvocation, FuncReceiver, FuncSignature, If, Import, Interface, Newline, Package, Param,
    RawStatement, ReturnStatement, Root, Stmt, Struct, Switch, stmts,
};

fn my_func_signature() -> FuncSignature {
    FuncSignature::new("MyFunc")
        .add_parameter(Param::new("foo", "string"))
        .add_return_types(["string", "error"])
}

fn declarations() -> Vec<Stmt> {
    stmts![
        Interface::new("MyInterface").add_signature(my_func_signature()),
        Newline,
        Struct::new("MyStruct")
            .add_field("Foo", "string")
            .add_field("Bar", "int64"),
        Newline,
    ]
}

fn my_func() -> Func {
    let closure = AnonymousFunc::new(
        AnonymousFuncSignature::new()
            .add_parameter(Param::new("bar", "string"))
            .add_return_types(["string"]),
    )
    .add_statement(ReturnStatement::new(["bar"]))
    .invocation(FuncInvocation::new(["foo"]));

    let branch = If::new(r#"str == """#).add_statement(
        For::new("i := 0; i < 3; i++").add_statement(RawStatement::new(r#"fmt.Printf("%d\n", i)"#)),
    );

    let switch = Switch::new("str")
        .add_cases([
            Case::new(r#""""#).add_statement(Comment::new(" empty string")),
            Case::new(r#""foo""#).add_statement(Comment::new(" foo string")),
        ])
        .default_case(DefaultCase::new().add_statement(Comment::new(" default")));

    Func::new(my_func_signature())
        .receiver(FuncReceiver::new("m", "*MyStruct"))
        .add_statement(CodeBlock::new().add_statements(stmts![
            RawStatement::new("str := ").with_newline(false),
            closure,
            Newline,
            branch,
            Newline,
            switch,
            Newline,
            ReturnStatement::new(["str", "nil"]),
        ]))
}

/// A file touching every node kind, with an explicit `import ("fmt")`.
pub fn reference_document() -> Root {
    Root::new()
        .add_statements(stmts![
            Comment::new(" THIS CODE WAS AUTO GENERATED"),
            Newline,
            Package::new("mypkg"),
            Newline,
            Import::new(["fmt"]),
            Newline,
        ])
        .add_statements(declarations())
        .add_statement(my_func())
}

/// The same file without the import block, for `goimports` to fill in.
pub fn document_without_imports() -> Root {
    Root::new()
        .add_statements(stmts![
            Comment::new(" THIS CODE WAS AUTO GENERATED"),
            Newline,
            Package::new("mypkg"),
        ])
        .add_statements(declarations())
        .add_statement(my_func())
}

/// `reference_document` after `gofmt`: the closure is pulled onto the
/// assignment line.
pub const FORMATTED_DOCUMENT: &str = r#"// THIS CODE WAS AUTO GENERATED

package mypkg

import (
	"fmt"
)

type MyInterface interface {
	MyFunc(foo string) (string, error)
}

type MyStruct struct {
	Foo string
	Bar int64
}

func (m *MyStruct) MyFunc(foo string) (string, error) {
	{
		str := func(bar string) string {
			return bar
		}(foo)

		if str == "" {
			for i := 0; i < 3; i++ {
				fmt.Printf("%d\n", i)
			}
		}

		switch str {
		case "":
			// empty string
		case "foo":
			// foo string
		default:
			// default
		}

		return str, nil
	}
}
"#;

/// A package with `count` small functions, each printing a long literal.
pub fn massive_document(count: usize) -> Root {
    let payload = format!("fmt.Println(\"{}\")", "@".repeat(140));
    (0..count).fold(
        Root::new().add_statements(stmts![
            Comment::new(" THIS CODE WAS AUTO GENERATED"),
            Newline,
            Package::new("mypkg"),
            Newline,
            Import::new(["fmt"]),
            Newline,
        ]),
        |root, i| {
            root.add_statement(
                Func::new(FuncSignature::new(format!("f{i}")))
                    .add_statement(RawStatement::new(payload.as_str())),
            )
        },
    )
}

/// Fail the calling test when `command` cannot be spawned. Tests that call
/// this are `#[ignore]`d and only run on request, so a missing tool is an
/// error rather than a silent pass.
pub fn require(command: &str) {
    assert!(
        command_available(command),
        "{command} is not installed or not on PATH"
    );
}
