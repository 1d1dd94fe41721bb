use crate::RegexTree;
use crate::parser::{ConditionalExpressionGrouping, Expr, SyntaxKind};

#[test]
fn numbered_condition() {
    let res = RegexTree::expect_valid_cst("(a)(?(1)b|c)");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        SimpleGrouping
          OpenParen "("
          Sequence
            Text
              TextToken "a"
          CloseParen ")"
        ConditionalCaptureGrouping
          OpenParen "("
          Question "?"
          OpenParen "("
          NumberToken "1"
          CloseParen ")"
          Alternation
            Sequence
              Text
                TextToken "b"
            Bar "|"
            Sequence
              Text
                TextToken "c"
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn named_condition() {
    let res = RegexTree::expect_valid_cst("(?<n>a)(?(n)b)");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CaptureGrouping
          OpenParen "("
          Question "?"
          LessThan "<"
          CaptureNameToken "n"
          GreaterThan ">"
          Sequence
            Text
              TextToken "a"
          CloseParen ")"
        ConditionalCaptureGrouping
          OpenParen "("
          Question "?"
          OpenParen "("
          CaptureNameToken "n"
          CloseParen ")"
          Sequence
            Text
              TextToken "b"
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn lookahead_condition() {
    let res = RegexTree::expect_valid_cst("(?(?=a)b|c)");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        ConditionalExpressionGrouping
          OpenParen "("
          Question "?"
          PositiveLookaheadGrouping
            OpenParen "("
            Question "?"
            Equals "="
            Sequence
              Text
                TextToken "a"
            CloseParen ")"
          Alternation
            Sequence
              Text
                TextToken "b"
            Bar "|"
            Sequence
              Text
                TextToken "c"
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn unknown_name_is_an_expression_condition() {
    let res = RegexTree::expect_valid_cst("(?(x)y)");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        ConditionalExpressionGrouping
          OpenParen "("
          Question "?"
          SimpleGrouping
            OpenParen "("
            Sequence
              Text
                TextToken "x"
            CloseParen ")"
          Sequence
            Text
              TextToken "y"
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn condition_accessors() {
    let tree = RegexTree::expect("(?(?!a)b|c)");
    let conditional = tree
        .syntax()
        .descendants()
        .find_map(ConditionalExpressionGrouping::cast)
        .unwrap();

    let condition = conditional.condition().unwrap();
    assert_eq!(condition.kind(), SyntaxKind::NegativeLookaheadGrouping);

    let Some(Expr::Alternation(result)) = conditional.result() else {
        panic!("expected an alternation");
    };
    assert_eq!(result.branches().len(), 2);
}
