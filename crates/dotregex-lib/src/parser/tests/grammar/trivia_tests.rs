use indoc::indoc;

use crate::{RegexOptions, RegexTree};

#[test]
fn inline_comment_is_trivia() {
    let res = RegexTree::expect_valid_cst_full("a(?#note)b", RegexOptions::NONE);

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        Text
          TextToken "a"
        Text
          CommentTrivia "(?#note)"
          TextToken "b"
      EndOfFile ""
    "#);
}

#[test]
fn trivia_hidden_by_default() {
    let res = RegexTree::expect_valid_cst("a(?#note)b");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        Text
          TextToken "a"
        Text
          TextToken "b"
      EndOfFile ""
    "#);
}

#[test]
fn comment_between_atom_and_quantifier() {
    let res = RegexTree::expect_valid_cst_full("a(?#c)*", RegexOptions::NONE);

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        ZeroOrMoreQuantifier
          Text
            TextToken "a"
          CommentTrivia "(?#c)"
          Asterisk "*"
      EndOfFile ""
    "#);
}

#[test]
fn free_spacing_whitespace_and_line_comments() {
    let input = indoc! {r"
    a+  # letters
    \d
    "};

    let res = RegexTree::expect_valid_cst_full(input, RegexOptions::IGNORE_PATTERN_WHITESPACE);

    insta::assert_snapshot!(res, @r##"
    CompilationUnit
      Sequence
        OneOrMoreQuantifier
          Text
            TextToken "a"
          Plus "+"
        CharacterClassEscape
          WhitespaceTrivia "  "
          CommentTrivia "# letters"
          WhitespaceTrivia "\n"
          Backslash "\\"
          TextToken "d"
      WhitespaceTrivia "\n"
      EndOfFile ""
    "##);
}

#[test]
fn escaped_space_is_literal_in_free_spacing() {
    let res = RegexTree::expect_valid_cst_with(r"a\ b", RegexOptions::IGNORE_PATTERN_WHITESPACE);

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        Text
          TextToken "a"
        SimpleEscape
          Backslash "\\"
          TextToken " "
        Text
          TextToken "b"
      EndOfFile ""
    "#);
}

#[test]
fn whitespace_inside_braces_breaks_quantifier() {
    let res = RegexTree::expect_valid_cst_with("a{2 }", RegexOptions::IGNORE_PATTERN_WHITESPACE);

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        Text
          TextToken "a{2"
        Text
          TextToken "}"
      EndOfFile ""
    "#);
}

#[test]
fn whitespace_is_text_without_free_spacing() {
    let res = RegexTree::expect_valid_cst("a b # c");

    insta::assert_snapshot!(res, @r#"
    CompilationUnit
      Sequence
        Text
          TextToken "a b # c"
      EndOfFile ""
    "#);
}
