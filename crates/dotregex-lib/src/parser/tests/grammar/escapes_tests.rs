use crate::{RegexOptions, RegexTree};

#[test]
fn anchor_and_class_escapes() {
    let res = RegexTree::expect_valid_cst(r"\bx\W\A");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        AnchorEscape
          Backslash "\\"
          TextToken "b"
        Text
          TextToken "x"
        CharacterClassEscape
          Backslash "\\"
          TextToken "W"
        AnchorEscape
          Backslash "\\"
          TextToken "A"
      EndOfFile ""
    "#);
}

#[test]
fn simple_escapes() {
    let res = RegexTree::expect_valid_cst(r"\t\*");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        SimpleEscape
          Backslash "\\"
          TextToken "t"
        SimpleEscape
          Backslash "\\"
          TextToken "*"
      EndOfFile ""
    "#);
}

#[test]
fn hex_and_unicode_escapes() {
    let res = RegexTree::expect_valid_cst(r"\x41\u00e9");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        HexEscape
          Backslash "\\"
          TextToken "x"
          TextToken "41"
        UnicodeEscape
          Backslash "\\"
          TextToken "u"
          TextToken "00e9"
      EndOfFile ""
    "#);
}

#[test]
fn control_escape() {
    let res = RegexTree::expect_valid_cst(r"\cM\c[");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        ControlEscape
          Backslash "\\"
          TextToken "c"
          TextToken "M"
        ControlEscape
          Backslash "\\"
          TextToken "c"
          TextToken "["
      EndOfFile ""
    "#);
}

#[test]
fn octal_escapes() {
    let res = RegexTree::expect_valid_cst(r"\0\101\7777");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        OctalEscape
          Backslash "\\"
          TextToken "0"
        OctalEscape
          Backslash "\\"
          TextToken "101"
        OctalEscape
          Backslash "\\"
          TextToken "777"
        Text
          TextToken "7"
      EndOfFile ""
    "#);
}

#[test]
fn ecmascript_octal_stops_past_0x20() {
    let res = RegexTree::expect_valid_cst_with(r"\411", RegexOptions::ECMA_SCRIPT);

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        OctalEscape
          Backslash "\\"
          TextToken "41"
        Text
          TextToken "1"
      EndOfFile ""
    "#);
}

#[test]
fn category_escapes() {
    let res = RegexTree::expect_valid_cst(r"\p{L}\P{IsGreek}");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CategoryEscape
          Backslash "\\"
          TextToken "p"
          OpenBrace "{"
          EscapeCategoryToken "L"
          CloseBrace "}"
        CategoryEscape
          Backslash "\\"
          TextToken "P"
          OpenBrace "{"
          EscapeCategoryToken "IsGreek"
          CloseBrace "}"
      EndOfFile ""
    "#);
}

#[test]
fn numbered_backreference() {
    let res = RegexTree::expect_valid_cst(r"(a)\1");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        SimpleGrouping
          OpenParen "("
          Sequence
            Text
              TextToken "a"
          CloseParen ")"
        BackreferenceEscape
          Backslash "\\"
          NumberToken "1"
      EndOfFile ""
    "#);
}

#[test]
fn forward_backreference() {
    let res = RegexTree::expect_valid_cst(r"\1(a)");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        BackreferenceEscape
          Backslash "\\"
          NumberToken "1"
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
fn number_past_last_group_is_octal() {
    let res = RegexTree::expect_valid_cst(r"(a)\12");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        SimpleGrouping
          OpenParen "("
          Sequence
            Text
              TextToken "a"
          CloseParen ")"
        OctalEscape
          Backslash "\\"
          TextToken "12"
      EndOfFile ""
    "#);
}

#[test]
fn ecmascript_takes_longest_defined_prefix() {
    let res = RegexTree::expect_valid_cst_with(r"(a)\12", RegexOptions::ECMA_SCRIPT);

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        SimpleGrouping
          OpenParen "("
          Sequence
            Text
              TextToken "a"
          CloseParen ")"
        BackreferenceEscape
          Backslash "\\"
          NumberToken "1"
        Text
          TextToken "2"
      EndOfFile ""
    "#);
}

#[test]
fn named_backreferences() {
    let res = RegexTree::expect_valid_cst(r"(?<n>a)\k<n>\<n>\k'1'");

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
        KCaptureEscape
          Backslash "\\"
          TextToken "k"
          LessThan "<"
          CaptureNameToken "n"
          GreaterThan ">"
        CaptureEscape
          Backslash "\\"
          LessThan "<"
          CaptureNameToken "n"
          GreaterThan ">"
        KCaptureEscape
          Backslash "\\"
          TextToken "k"
          SingleQuote "'"
          NumberToken "1"
          SingleQuote "'"
      EndOfFile ""
    "#);
}

#[test]
fn incomplete_capture_escape_is_text() {
    let res = RegexTree::expect_valid_cst(r"\<a");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        SimpleEscape
          Backslash "\\"
          TextToken "<"
        Text
          TextToken "a"
      EndOfFile ""
    "#);
}

#[test]
fn ecmascript_allows_unknown_word_escape() {
    let res = RegexTree::expect_valid_cst_with(r"\q", RegexOptions::ECMA_SCRIPT);

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        SimpleEscape
          Backslash "\\"
          TextToken "q"
      EndOfFile ""
    "#);
}
