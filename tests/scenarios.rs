use anyhow::Result;
use proptest::prelude::*;

use regular::{
    BuildError, Delimiter, Expression, GrepFlags, Group, MatchFlags, Modifier, PatternBuilder,
    SplitFlags, Subject, quote,
};

#[test]
fn whitespace_matches_once() -> Result<()> {
    let response = Expression::new().whitespace().matches("1 8 7");
    assert!(response.is_valid());
    assert!(response.is_successful());
    assert_eq!(response.count(), 1);
    assert_eq!(response.matches(), [" "]);
    Ok(())
}

#[test]
fn digit_between_first_and_all() -> Result<()> {
    let expression = Expression::new().digit_between(6, 9)?;

    let first = expression.matches("my favourite number is 7");
    assert!(first.is_successful());
    assert_eq!(first.matches(), ["7"]);
    assert_eq!(first.count(), 1);

    let all = expression.matches_all("my favourite numbers are 7 and 9");
    assert!(all.is_successful());
    assert_eq!(all.matches(), ["7", "9"]);
    assert_eq!(all.count(), 2);
    assert_eq!(all.occurrences().len(), 2);
    Ok(())
}

#[test]
fn replace_unlimited() -> Result<()> {
    let response = Expression::new()
        .char("x")
        .replace("7", "my favourite number is x", None);
    assert!(response.is_successful());
    assert_eq!(response.count(), 1);
    assert_eq!(
        response.result().and_then(Subject::as_text),
        Some("my favourite number is 7")
    );
    Ok(())
}

#[test]
fn replace_each_element_of_a_list() -> Result<()> {
    let response = Expression::new().any_digit().replace("#", ["a1b2", "c3"], Some(1));
    assert_eq!(response.count(), 2);
    assert_eq!(
        response.result().and_then(Subject::as_list),
        Some(["a#b2".to_string(), "c#".to_string()].as_slice())
    );
    Ok(())
}

#[test]
fn split_on_literal() -> Result<()> {
    let response = Expression::new().char("x").split("axbxc", None, SplitFlags::NONE);
    assert!(response.is_successful());
    assert_eq!(response.texts(), ["a", "b", "c"]);
    assert_eq!(response.count(), 3);
    Ok(())
}

#[test]
fn grep_lowercase_words() -> Result<()> {
    let expression = Expression::new().char_range("a", "z")?.add("+");
    let items = ["a", "b", "cce", "a1", "1a", "1"];

    let kept = expression.grep(items, GrepFlags::NONE);
    assert_eq!(kept.matched(), ["a", "b", "cce", "a1", "1a"]);

    let dropped = expression.grep(items, GrepFlags::INVERT);
    assert_eq!(dropped.matched(), ["1"]);
    Ok(())
}

#[test]
fn phone_number_with_named_group() -> Result<()> {
    let expression = Expression::new()
        .add(r"\+")
        .digit(None)?
        .repeat(1, Some(3))
        .whitespace()
        .named_group("number", Group::new().digit(None)?.repeat(4, Some(10)));
    let response = expression.matches_with("+49 123456789", MatchFlags::NONE.with_offset_capture(), 0);
    assert!(response.is_successful());
    assert_eq!(response.named("number"), Some("123456789"));
    let occurrence = &response.occurrences()[0];
    assert_eq!(occurrence.name("number").and_then(|c| c.offset), Some(4));
    Ok(())
}

#[test]
fn modifiers_and_delimiter_reach_the_engine() -> Result<()> {
    let expression = Expression::new()
        .start_of_string()
        .not_digit(Some(9))?
        .char("abc")
        .set_delimiter(Delimiter::Hash)
        .set_modifier(Modifier::CaseInsensitive);
    assert_eq!(expression.to_expression(), "#^[^9][abc]#i");
    assert!(expression.matches("1Bx").is_successful());
    assert!(!expression.matches("9Bx").is_successful());
    Ok(())
}

#[test]
fn validation_errors() {
    assert_eq!(
        Expression::new().digit(Some(15)).err(),
        Some(BuildError::DigitRange(15))
    );
    assert_eq!(
        Expression::new().digit(Some(-1)).err(),
        Some(BuildError::DigitRange(-1))
    );
    assert_eq!(
        Expression::new().char_range("ab", "c").err(),
        Some(BuildError::CharacterLength("ab".to_string()))
    );
}

#[test]
fn bad_pattern_is_invalid_not_fatal() {
    let response = Expression::new().add("[").matches_all("[");
    assert!(!response.is_valid());
    assert!(!response.is_successful());
    assert!(response.matches().is_empty());
    assert!(response.error().is_some());
}

proptest! {
    #[test]
    fn quoted_text_matches_itself(
        s in any::<String>(),
        delimiter in prop::sample::select(Delimiter::ALL.to_vec()),
    ) {
        let response = Expression::from_pattern(&quote(&s, Some(delimiter)))
            .set_delimiter(delimiter)
            .matches(&s);
        prop_assert!(response.is_valid());
        prop_assert!(response.is_successful());
        prop_assert_eq!(response.occurrences()[0].whole(), s.as_str());
    }

    #[test]
    fn to_expression_is_pure(m in 0i32..=9, n in 0i32..=9, reps in 0usize..20) {
        let expression = Expression::new().digit_between(m, n).map(|e| e.repeat_at_least(reps));
        prop_assert!(expression.is_ok());
        if let Ok(expression) = expression {
            prop_assert_eq!(expression.to_expression(), expression.to_expression());
        }
    }
}
