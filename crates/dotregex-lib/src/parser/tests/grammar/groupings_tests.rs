use crate::{RegexOptions, RegexTree};

#[test]
fn simple_group() {
    let res = RegexTree::expect_valid_cst("(a)");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        SimpleGrouping
          OpenParen "("
          Sequence
            Text
              TextToken "a"
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn empty_group() {
    let res = RegexTree::expect_valid_cst("()");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        SimpleGrouping
          OpenParen "("
          Sequence
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn non_capturing_group() {
    let res = RegexTree::expect_valid_cst("(?:a)");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        NonCapturingGrouping
          OpenParen "("
          Question "?"
          Colon ":"
          Sequence
            Text
              TextToken "a"
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn named_capture_angle_brackets() {
    let res = RegexTree::expect_valid_cst("(?<year>a)");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CaptureGrouping
          OpenParen "("
          Question "?"
          LessThan "<"
          CaptureNameToken "year"
          GreaterThan ">"
          Sequence
            Text
              TextToken "a"
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn named_capture_quotes() {
    let res = RegexTree::expect_valid_cst("(?'x'a)");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CaptureGrouping
          OpenParen "("
          Question "?"
          SingleQuote "'"
          CaptureNameToken "x"
          SingleQuote "'"
          Sequence
            Text
              TextToken "a"
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn numbered_capture() {
    let res = RegexTree::expect_valid_cst("(?<3>a)");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CaptureGrouping
          OpenParen "("
          Question "?"
          LessThan "<"
          NumberToken "3"
          GreaterThan ">"
          Sequence
            Text
              TextToken "a"
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn balancing_group() {
    let res = RegexTree::expect_valid_cst("(?<o>a)(?<c-o>b)");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CaptureGrouping
          OpenParen "("
          Question "?"
          LessThan "<"
          CaptureNameToken "o"
          GreaterThan ">"
          Sequence
            Text
              TextToken "a"
          CloseParen ")"
        BalancingGrouping
          OpenParen "("
          Question "?"
          LessThan "<"
          CaptureNameToken "c"
          Minus "-"
          CaptureNameToken "o"
          GreaterThan ">"
          Sequence
            Text
              TextToken "b"
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn balancing_group_without_new_name() {
    let res = RegexTree::expect_valid_cst("(a)(?'-1'b)");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        SimpleGrouping
          OpenParen "("
          Sequence
            Text
              TextToken "a"
          CloseParen ")"
        BalancingGrouping
          OpenParen "("
          Question "?"
          SingleQuote "'"
          CaptureNameToken ""
          Minus "-"
          NumberToken "1"
          SingleQuote "'"
          Sequence
            Text
              TextToken "b"
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn lookarounds() {
    let res = RegexTree::expect_valid_cst("(?=a)(?!b)(?<=c)(?<!d)");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        PositiveLookaheadGrouping
          OpenParen "("
          Question "?"
          Equals "="
          Sequence
            Text
              TextToken "a"
          CloseParen ")"
        NegativeLookaheadGrouping
          OpenParen "("
          Question "?"
          Exclamation "!"
          Sequence
            Text
              TextToken "b"
          CloseParen ")"
        PositiveLookbehindGrouping
          OpenParen "("
          Question "?"
          LessThan "<"
          Equals "="
          Sequence
            Text
              TextToken "c"
          CloseParen ")"
        NegativeLookbehindGrouping
          OpenParen "("
          Question "?"
          LessThan "<"
          Exclamation "!"
          Sequence
            Text
              TextToken "d"
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn atomic_group() {
    let res = RegexTree::expect_valid_cst("(?>a+)");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        NonBacktrackingGrouping
          OpenParen "("
          Question "?"
          GreaterThan ">"
          Sequence
            OneOrMoreQuantifier
              Text
                TextToken "a"
              Plus "+"
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn simple_options_group() {
    let res = RegexTree::expect_valid_cst("(?i-s)a");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        SimpleOptionsGrouping
          OpenParen "("
          Question "?"
          OptionsToken "i-s"
          CloseParen ")"
        Text
          TextToken "a"
      EndOfFile ""
    "#);
}

#[test]
fn nested_options_group() {
    let res = RegexTree::expect_valid_cst("(?m:^a)");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        NestedOptionsGrouping
          OpenParen "("
          Question "?"
          OptionsToken "m"
          Colon ":"
          Sequence
            StartAnchor
              Caret "^"
            Text
              TextToken "a"
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn options_group_switches_on_free_spacing() {
    let res = RegexTree::expect_valid_cst_full("a (?x) b", RegexOptions::NONE);

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        Text
          TextToken "a "
        SimpleOptionsGrouping
          OpenParen "("
          Question "?"
          OptionsToken "x"
          CloseParen ")"
        Text
          WhitespaceTrivia " "
          TextToken "b"
      EndOfFile ""
    "#);
}

#[test]
fn free_spacing_ends_with_enclosing_group() {
    let res = RegexTree::expect_valid_cst_full("((?x) a) b", RegexOptions::NONE);

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        SimpleGrouping
          OpenParen "("
          Sequence
            SimpleOptionsGrouping
              OpenParen "("
              Question "?"
              OptionsToken "x"
              CloseParen ")"
            Text
              WhitespaceTrivia " "
              TextToken "a"
          CloseParen ")"
        Text
          TextToken " b"
      EndOfFile ""
    "#);
}

#[test]
fn scoped_free_spacing() {
    let res = RegexTree::expect_valid_cst_full("(?x: a ) b", RegexOptions::NONE);

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        NestedOptionsGrouping
          OpenParen "("
          Question "?"
          OptionsToken "x"
          Colon ":"
          Sequence
            Text
              WhitespaceTrivia " "
              TextToken "a"
          WhitespaceTrivia " "
          CloseParen ")"
        Text
          TextToken " b"
      EndOfFile ""
    "#);
}
