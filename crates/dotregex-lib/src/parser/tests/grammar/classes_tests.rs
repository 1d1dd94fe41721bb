use crate::{RegexOptions, RegexTree};

#[test]
fn simple_class() {
    let res = RegexTree::expect_valid_cst("[abc]");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CharacterClass
          OpenBracket "["
          Sequence
            Text
              TextToken "abc"
          CloseBracket "]"
      EndOfFile ""
    "#);
}

#[test]
fn negated_class() {
    let res = RegexTree::expect_valid_cst("[^a]");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        NegatedCharacterClass
          OpenBracket "["
          Caret "^"
          Sequence
            Text
              TextToken "a"
          CloseBracket "]"
      EndOfFile ""
    "#);
}

#[test]
fn leading_close_bracket_is_text() {
    let res = RegexTree::expect_valid_cst("[]a]");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CharacterClass
          OpenBracket "["
          Sequence
            Text
              TextToken "]a"
          CloseBracket "]"
      EndOfFile ""
    "#);
}

#[test]
fn range() {
    let res = RegexTree::expect_valid_cst("[a-z0]");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CharacterClass
          OpenBracket "["
          Sequence
            CharacterClassRange
              Text
                TextToken "a"
              Minus "-"
              Text
                TextToken "z"
            Text
              TextToken "0"
          CloseBracket "]"
      EndOfFile ""
    "#);
}

#[test]
fn trailing_minus_is_text() {
    let res = RegexTree::expect_valid_cst("[a-]");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CharacterClass
          OpenBracket "["
          Sequence
            Text
              TextToken "a-"
          CloseBracket "]"
      EndOfFile ""
    "#);
}

#[test]
fn special_chars_are_text_inside_class() {
    let res = RegexTree::expect_valid_cst("[.*+?(){}|$^]");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CharacterClass
          OpenBracket "["
          Sequence
            Text
              TextToken ".*+?(){}|$^"
          CloseBracket "]"
      EndOfFile ""
    "#);
}

#[test]
fn whitespace_is_text_inside_class_in_free_spacing() {
    let res = RegexTree::expect_valid_cst_full("[a b]", RegexOptions::IGNORE_PATTERN_WHITESPACE);

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CharacterClass
          OpenBracket "["
          Sequence
            Text
              TextToken "a b"
          CloseBracket "]"
      EndOfFile ""
    "#);
}

#[test]
fn class_escapes() {
    let res = RegexTree::expect_valid_cst(r"[\d\p{Lu}\-\n]");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CharacterClass
          OpenBracket "["
          Sequence
            CharacterClassEscape
              Backslash "\\"
              TextToken "d"
            CategoryEscape
              Backslash "\\"
              TextToken "p"
              OpenBrace "{"
              EscapeCategoryToken "Lu"
              CloseBrace "}"
            SimpleEscape
              Backslash "\\"
              TextToken "-"
            SimpleEscape
              Backslash "\\"
              TextToken "n"
          CloseBracket "]"
      EndOfFile ""
    "#);
}

#[test]
fn backspace_escape_inside_class() {
    let res = RegexTree::expect_valid_cst(r"[\b]");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CharacterClass
          OpenBracket "["
          Sequence
            SimpleEscape
              Backslash "\\"
              TextToken "b"
          CloseBracket "]"
      EndOfFile ""
    "#);
}

#[test]
fn escaped_range_endpoints() {
    let res = RegexTree::expect_valid_cst(r"[\x41-\u005A]");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CharacterClass
          OpenBracket "["
          Sequence
            CharacterClassRange
              HexEscape
                Backslash "\\"
                TextToken "x"
                TextToken "41"
              Minus "-"
              UnicodeEscape
                Backslash "\\"
                TextToken "u"
                TextToken "005A"
          CloseBracket "]"
      EndOfFile ""
    "#);
}

#[test]
fn escaped_minus_run_in_range() {
    let res = RegexTree::expect_valid_cst(r"[!-\-\-a]");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CharacterClass
          OpenBracket "["
          Sequence
            CharacterClassRange
              Text
                TextToken "!"
              Minus "-"
              Sequence
                SimpleEscape
                  Backslash "\\"
                  TextToken "-"
                SimpleEscape
                  Backslash "\\"
                  TextToken "-"
                Text
                  TextToken "a"
          CloseBracket "]"
      EndOfFile ""
    "#);
}

#[test]
fn subtraction() {
    let res = RegexTree::expect_valid_cst("[a-z-[aeiou]]");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CharacterClass
          OpenBracket "["
          Sequence
            CharacterClassRange
              Text
                TextToken "a"
              Minus "-"
              Text
                TextToken "z"
            CharacterClassSubtraction
              Minus "-"
              CharacterClass
                OpenBracket "["
                Sequence
                  Text
                    TextToken "aeiou"
                CloseBracket "]"
          CloseBracket "]"
      EndOfFile ""
    "#);
}

#[test]
fn posix_property() {
    let res = RegexTree::expect_valid_cst("[[:alpha:]x]");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CharacterClass
          OpenBracket "["
          Sequence
            PosixProperty
              TextToken "[:alpha:]"
            Text
              TextToken "x"
          CloseBracket "]"
      EndOfFile ""
    "#);
}

#[test]
fn bracket_colon_without_property_is_text() {
    let res = RegexTree::expect_valid_cst("[[:a]");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        CharacterClass
          OpenBracket "["
          Sequence
            Text
              TextToken "[:a"
          CloseBracket "]"
      EndOfFile ""
    "#);
}
