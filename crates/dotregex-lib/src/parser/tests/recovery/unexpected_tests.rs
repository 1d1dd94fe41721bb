use crate::RegexTree;

#[test]
fn stray_close_paren() {
    let res = RegexTree::expect_invalid(")");

    insta::assert_snapshot!(res, @"error at 0..1: Too many )'s");
}

#[test]
fn stray_close_paren_is_its_own_text() {
    let tree = RegexTree::expect("a)b");

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 1..2: Too many )'s");
    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Sequence
        Text
          TextToken "a"
        Text
          TextToken ")"
        Text
          TextToken "b"
      EndOfFile ""
    "#);
}

#[test]
fn quantifier_following_nothing() {
    let res = RegexTree::expect_invalid("*a");

    insta::assert_snapshot!(res, @"error at 0..1: Quantifier {x,y} following nothing");
}

#[test]
fn quantifier_after_alternation_bar() {
    let res = RegexTree::expect_invalid("a|+");

    insta::assert_snapshot!(res, @"error at 2..3: Quantifier {x,y} following nothing");
}

#[test]
fn quantifier_after_options_group() {
    let res = RegexTree::expect_invalid("(?i)*");

    insta::assert_snapshot!(res, @"error at 4..5: Quantifier {x,y} following nothing");
}

#[test]
fn nested_quantifier() {
    let res = RegexTree::expect_invalid("a**");

    insta::assert_snapshot!(res, @"error at 2..3: Nested quantifier *");
}

#[test]
fn nested_numeric_quantifier() {
    let res = RegexTree::expect_invalid("a{2}{3}");

    insta::assert_snapshot!(res, @"error at 4..5: Nested quantifier {");
}

#[test]
fn quantifier_after_lazy_quantifier() {
    let tree = RegexTree::expect("^[abcd]*?+$");

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 9..10: Nested quantifier +");
    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Sequence
        StartAnchor
          Caret "^"
        LazyQuantifier
          ZeroOrMoreQuantifier
            CharacterClass
              OpenBracket "["
              Sequence
                Text
                  TextToken "abcd"
              CloseBracket "]"
            Asterisk "*"
          Question "?"
        Text
          TextToken "+"
        EndAnchor
          Dollar "$"
      EndOfFile ""
    "#);
}

#[test]
fn question_after_lazy_quantifier() {
    let res = RegexTree::expect_invalid("a*??");

    insta::assert_snapshot!(res, @"error at 3..4: Nested quantifier ?");
}

#[test]
fn numeric_quantifier_following_nothing() {
    let res = RegexTree::expect_invalid("{2}");

    insta::assert_snapshot!(res, @"error at 0..1: Quantifier {x,y} following nothing");
}

#[test]
fn reversed_quantifier_bounds() {
    let res = RegexTree::expect_invalid("a{3,1}");

    insta::assert_snapshot!(res, @"error at 4..5: Illegal {x,y} with x > y");
}

#[test]
fn empty_question_group() {
    let res = RegexTree::expect_invalid("(?)");

    insta::assert_snapshot!(res, @"error at 1..2: Quantifier {x,y} following nothing");
}

#[test]
fn cut_question_group() {
    let res = RegexTree::expect_invalid("(?");

    insta::assert_snapshot!(res, @r"
    error at 0..1: Unrecognized grouping construct
    error at 1..2: Quantifier {x,y} following nothing
    error at 2..2: Not enough )'s
    ");
}

#[test]
fn unknown_group_construct() {
    let res = RegexTree::expect_invalid("(?z)");

    insta::assert_snapshot!(res, @r"
    error at 0..1: Unrecognized grouping construct
    error at 1..2: Quantifier {x,y} following nothing
    ");
}

#[test]
fn capture_number_zero() {
    let res = RegexTree::expect_invalid("(?<0>a)");

    insta::assert_snapshot!(res, @"error at 3..4: Capture number cannot be zero");
}

#[test]
fn capture_number_overflow() {
    let res = RegexTree::expect_invalid("(?<99999999999>a)");

    insta::assert_snapshot!(res, @"error at 3..14: Capture group numbers must be less than or equal to Int32.MaxValue");
}

#[test]
fn empty_group_name() {
    let res = RegexTree::expect_invalid("(?<>a)");

    insta::assert_snapshot!(res, @"error at 3..4: Invalid group name: Group names must begin with a word character");
}

#[test]
fn condition_cannot_be_comment() {
    let res = RegexTree::expect_invalid("(?(?#c)a)");

    insta::assert_snapshot!(res, @r"
    error at 0..1: Alternation conditions cannot be comments
    error at 2..3: Unrecognized grouping construct
    error at 3..4: Quantifier {x,y} following nothing
    ");
}

#[test]
fn condition_cannot_capture() {
    let res = RegexTree::expect_invalid("(?(?'n'a)b)");

    insta::assert_snapshot!(res, @"error at 0..1: Alternation conditions do not capture and cannot be named");
}

#[test]
fn condition_cannot_be_options() {
    let res = RegexTree::expect_invalid("(?(?N))");

    insta::assert_snapshot!(res, @r"
    error at 2..3: Unrecognized grouping construct
    error at 3..4: Quantifier {x,y} following nothing
    ");
}

#[test]
fn condition_cannot_toggle_options() {
    let res = RegexTree::expect_invalid("(?(?i)a|b)");

    insta::assert_snapshot!(res, @r"
    error at 2..3: Unrecognized grouping construct
    error at 3..4: Quantifier {x,y} following nothing
    ");
}

#[test]
fn condition_cannot_be_nested_options() {
    let tree = RegexTree::expect("(?(?i:a))");

    insta::assert_snapshot!(tree.dump_diagnostics(), @r"
    error at 2..3: Unrecognized grouping construct
    error at 3..4: Quantifier {x,y} following nothing
    ");
    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Sequence
        ConditionalExpressionGrouping
          OpenParen "("
          Question "?"
          SimpleGrouping
            OpenParen "("
            Sequence
              Text
                TextToken "?"
              Text
                TextToken "i:a"
            CloseParen ")"
          Sequence
          CloseParen ")"
      EndOfFile ""
    "#);
}

#[test]
fn too_many_alternates_in_conditional() {
    let res = RegexTree::expect_invalid("(a)(?(1)b|c|d)");

    insta::assert_snapshot!(res, @"error at 11..12: Too many | in (?()|)");
}

#[test]
fn malformed_condition() {
    let res = RegexTree::expect_invalid("(?(1x)a)");

    insta::assert_snapshot!(res, @r"
    error at 3..4: Malformed
    error at 7..8: Too many )'s
    ");
}

#[test]
fn reverse_range() {
    let res = RegexTree::expect_invalid("[z-a]");

    insta::assert_snapshot!(res, @"error at 2..3: [x-y] range in reverse order");
}

#[test]
fn class_in_range() {
    let res = RegexTree::expect_invalid(r"[a-\d]");

    insta::assert_snapshot!(res, @r"error at 3..5: Cannot include class \d in character range");
}

#[test]
fn subtraction_not_last() {
    let res = RegexTree::expect_invalid("[a-[b]c]");

    insta::assert_snapshot!(res, @"error at 2..2: A subtraction must be the last element in a character class");
}

#[test]
fn trailing_backslash() {
    let res = RegexTree::expect_invalid("\\");

    insta::assert_snapshot!(res, @r"error at 0..1: Illegal \\ at end of pattern");
}

#[test]
fn unrecognized_escape() {
    let res = RegexTree::expect_invalid(r"\q");

    insta::assert_snapshot!(res, @r"error at 1..2: Unrecognized escape sequence \q");
}

#[test]
fn missing_control_character() {
    let res = RegexTree::expect_invalid(r"\c");

    insta::assert_snapshot!(res, @"error at 1..2: Missing control character");
}

#[test]
fn unrecognized_control_character() {
    let tree = RegexTree::expect(r"\c1");

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 2..3: Unrecognized control character");
    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Sequence
        ControlEscape
          Backslash "\\"
          TextToken "c"
          TextToken ""
        Text
          TextToken "1"
      EndOfFile ""
    "#);
}

#[test]
fn insufficient_hex_digits() {
    let res = RegexTree::expect_invalid(r"\x4\u12");

    insta::assert_snapshot!(res, @r"
    error at 0..3: Insufficient hexadecimal digits
    error at 3..7: Insufficient hexadecimal digits
    ");
}

#[test]
fn unknown_property() {
    let res = RegexTree::expect_invalid(r"\p{Foo}");

    insta::assert_snapshot!(res, @"error at 3..6: Unknown property 'Foo'");
}

#[test]
fn empty_property() {
    let res = RegexTree::expect_invalid(r"\p{}x");

    insta::assert_snapshot!(res, @"error at 0..2: Unknown property ''");
}

#[test]
fn incomplete_category_escape() {
    let res = RegexTree::expect_invalid(r"\p{}");

    insta::assert_snapshot!(res, @r"error at 0..2: Incomplete \p{X} character escape");
}

#[test]
fn malformed_category_escape() {
    let res = RegexTree::expect_invalid(r"\pxyz");

    insta::assert_snapshot!(res, @r"error at 0..2: Malformed \p{X} character escape");
}

#[test]
fn malformed_named_back_reference() {
    let res = RegexTree::expect_invalid(r"\k");

    insta::assert_snapshot!(res, @r"error at 0..2: Malformed \k<...> named back reference");
}
