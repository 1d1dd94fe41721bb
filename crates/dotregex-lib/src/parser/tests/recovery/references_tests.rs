use crate::{RegexOptions, RegexTree};

#[test]
fn undefined_group_number() {
    let res = RegexTree::expect_invalid(r"\1");

    insta::assert_snapshot!(res, @"error at 1..2: Reference to undefined group number 1");
}

#[test]
fn undefined_forward_group_number() {
    let res = RegexTree::expect_invalid(r"\2(a)");

    insta::assert_snapshot!(res, @"error at 1..2: Reference to undefined group number 2");
}

#[test]
fn undefined_group_name() {
    let res = RegexTree::expect_invalid(r"\k<x>");

    insta::assert_snapshot!(res, @"error at 3..4: Reference to undefined group name x");
}

#[test]
fn undefined_group_number_in_k_escape() {
    let res = RegexTree::expect_invalid(r"\k<1>");

    insta::assert_snapshot!(res, @"error at 3..4: Reference to undefined group number 1");
}

#[test]
fn undefined_balanced_group() {
    let res = RegexTree::expect_invalid("(?<a-b>x)");

    insta::assert_snapshot!(res, @"error at 5..6: Reference to undefined group name b");
}

#[test]
fn undefined_balanced_group_without_name() {
    let res = RegexTree::expect_invalid("(?<-x>a)");

    insta::assert_snapshot!(res, @"error at 4..5: Reference to undefined group name x");
}

#[test]
fn undefined_conditional_group() {
    let res = RegexTree::expect_invalid("(?(2)a)");

    insta::assert_snapshot!(res, @"error at 3..4: Reference to undefined group");
}

#[test]
fn forward_named_condition() {
    let res = RegexTree::expect_valid_captures("(?(n)a)(?<n>b)", RegexOptions::NONE);

    insta::assert_snapshot!(res, @r#"
    0 0..14 "(?(n)a)(?<n>b)"
    1 7..14 "(?<n>b)"
    n 7..14 "(?<n>b)"
    "#);
}

#[test]
fn explicit_capture_disables_numbering() {
    let res = RegexTree::expect_invalid_with(r"(a)\1", RegexOptions::EXPLICIT_CAPTURE);

    insta::assert_snapshot!(res, @"error at 4..5: Reference to undefined group number 1");
}

#[test]
fn inline_explicit_capture() {
    let res = RegexTree::expect_invalid(r"(?n)(a)\1");

    insta::assert_snapshot!(res, @"error at 8..9: Reference to undefined group number 1");
}
