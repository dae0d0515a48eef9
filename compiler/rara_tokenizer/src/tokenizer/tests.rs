use pretty_assertions::assert_eq;
use rara_ir::{ExpressionType, IdentifierType, Symbol};

use super::*;
use crate::hooks::LineComments;
use crate::matchers;

fn quote() -> TokenRule {
    TokenRule::new("quote", "\"", "\"")
}

fn locations(tokens: &[Token]) -> Vec<CodeLocation> {
    tokens.iter().map(|token| token.location).collect()
}

fn loc(ls: u32, cs: u32, le: u32, ce: u32) -> CodeLocation {
    CodeLocation::new(ls, cs, le, ce)
}

fn tokenizer_with<I: IntoIterator<Item = TokenRule>>(rules: I) -> Tokenizer {
    let mut tokenizer = Tokenizer::new();
    for rule in rules {
        if let Err(err) = tokenizer.register_rule(rule) {
            panic!("rule should register: {err}");
        }
    }
    tokenizer
}

fn scan<H: ScanHooks>(tokenizer: &mut Tokenizer<H>, text: &str) -> Vec<Token> {
    match tokenizer.tokenize(text) {
        Ok(tokens) => tokens,
        Err(failure) => panic!("scan of {text:?} failed: {}", failure.error),
    }
}

fn scan_failure<H: ScanHooks>(tokenizer: &mut Tokenizer<H>, text: &str) -> ScanFailure {
    match tokenizer.tokenize(text) {
        Ok(tokens) => panic!("scan of {text:?} should fail, got {tokens:?}"),
        Err(failure) => failure,
    }
}

#[test]
fn empty_text_without_rules() {
    let mut tokenizer = Tokenizer::new();
    assert!(scan(&mut tokenizer, "").is_empty());
    assert!(tokenizer.debug_rule_stack().is_empty());
    assert!(tokenizer.history().steps().is_empty());
    assert!(tokenizer.history().activations().is_empty());
}

#[test]
fn rules_on_empty_text_do_nothing() {
    let mut tokenizer = tokenizer_with([quote(), TokenRule::new("any", "", " ")]);
    assert!(scan(&mut tokenizer, "").is_empty());
    assert!(tokenizer.history().activations().is_empty());
}

#[test]
fn quoted_string() {
    let mut tokenizer = tokenizer_with([quote()]);
    let tokens = scan(&mut tokenizer, "\"hello world\"");

    assert_eq!(locations(&tokens), vec![loc(1, 1, 1, 13)]);
    assert!(tokenizer.debug_rule_stack().is_empty());
    assert_eq!(tokenizer.history().steps().len(), 13);
    assert_eq!(tokenizer.history().activations().len(), 1);
}

#[test]
fn leftward_rule_walks_back_to_its_terminator() {
    let rule = TokenRule::new("backquote", "\"", "'").with_direction(Direction::Left);
    let mut tokenizer = tokenizer_with([rule]);
    let tokens = scan(&mut tokenizer, "'hello world\"");

    assert_eq!(locations(&tokens), vec![loc(1, 1, 1, 13)]);
    assert_eq!(tokenizer.history().steps().len(), 2 * 13 - 1);
    let visited = tokenizer.history().visited_indices();
    let expected: Vec<usize> = (0..13).chain((0..12).rev()).collect();
    assert_eq!(visited, expected);
    assert!(tokenizer.debug_rule_stack().is_empty());
}

#[test]
fn identifier_stops_at_space() {
    let rule = TokenRule::new("identifier", "", " ").with_matcher(matchers::identifier());
    let mut tokenizer = tokenizer_with([rule]);
    let tokens = scan(&mut tokenizer, "a :: 2");

    assert_eq!(locations(&tokens), vec![loc(1, 1, 1, 2)]);
    assert_eq!(tokens[0].identifier_type, IdentifierType::IDENTIFIER);
    assert!(tokens[0].is_valid());
    assert_eq!(tokenizer.history().activations().len(), 1);
}

#[test]
fn direction_pivots_and_resumes() {
    let paren = TokenRule::new("paren", "(", "\"");
    let back = TokenRule::new("back", "\"", "\"").with_direction(Direction::Left);
    let mut tokenizer = tokenizer_with([paren, back]);
    let tokens = scan(&mut tokenizer, "a(b\"c");

    assert_eq!(
        tokenizer.history().visited_indices(),
        vec![0, 1, 2, 3, 2, 1, 2, 3, 4]
    );
    assert_eq!(
        locations(&tokens),
        vec![loc(1, 2, 1, 4), loc(1, 2, 1, 4), loc(1, 4, 1, 4)]
    );
    assert!(tokenizer.debug_rule_stack().is_empty());
}

#[test]
fn closing_rule_does_not_reopen_on_its_terminator() {
    let mut tokenizer = tokenizer_with([quote()]);
    let tokens = scan(&mut tokenizer, "\"a\"\"b\"");
    assert_eq!(locations(&tokens), vec![loc(1, 1, 1, 3), loc(1, 4, 1, 6)]);
}

#[test]
fn nested_activations_close_innermost_first() {
    let outer = TokenRule::new("outer", "[", "]");
    let inner = TokenRule::new("inner", "(", ")");
    let mut tokenizer = tokenizer_with([outer, inner]);
    let tokens = scan(&mut tokenizer, "[(a)]");
    assert_eq!(locations(&tokens), vec![loc(1, 2, 1, 4), loc(1, 1, 1, 5)]);
}

#[test]
fn same_terminator_closes_nested_activations_together() {
    let paren = TokenRule::new("paren", "(", ")");
    let mut tokenizer = tokenizer_with([paren]);
    let tokens = scan(&mut tokenizer, "((a))");
    assert_eq!(locations(&tokens), vec![loc(1, 2, 1, 4), loc(1, 1, 1, 4)]);
}

#[test]
fn one_character_closes_every_matching_top() {
    let outer = TokenRule::new("outer", "[", ";");
    let inner = TokenRule::new("inner", "(", ";");
    let mut tokenizer = tokenizer_with([outer, inner]);
    let tokens = scan(&mut tokenizer, "[(x;");
    assert_eq!(locations(&tokens), vec![loc(1, 2, 1, 4), loc(1, 1, 1, 4)]);
}

#[test]
fn non_matching_top_blocks_lower_activations() {
    let outer = TokenRule::new("outer", "[", "]");
    let inner = TokenRule::new("inner", "(", ")");
    let mut tokenizer = tokenizer_with([outer, inner]);
    let failure = scan_failure(&mut tokenizer, "[(]");

    assert!(failure.tokens.is_empty());
    assert_eq!(failure.error.code(), ErrorCode::UNTERMINATED_RIGHT);
    let open: Vec<&str> = tokenizer.debug_rule_stack().iter().map(Activation::name).collect();
    assert_eq!(open, vec!["outer", "inner"]);
}

#[test]
fn rules_fire_in_registration_order() {
    let first = TokenRule::new("first", "x", " ");
    let second = TokenRule::new("second", "", " ");
    let mut tokenizer = tokenizer_with([first, second]);
    let tokens = scan(&mut tokenizer, "x ");

    let open_order: Vec<&str> = tokenizer
        .history()
        .activations()
        .iter()
        .map(|record| record.activation.name())
        .collect();
    assert_eq!(open_order, vec!["first", "second"]);
    // Both close on the space, top first.
    assert_eq!(tokens.len(), 2);
}

#[test]
fn duplicate_rule_is_rejected() {
    let mut tokenizer = tokenizer_with([quote()]);
    let Err(err) = tokenizer.register_rule(TokenRule::new("quote", "'", "'")) else {
        panic!("duplicate name should be rejected");
    };
    assert_eq!(err.code(), ErrorCode::DUPLICATE_RULE);
    assert_eq!(tokenizer.rules().count(), 1);
}

#[test]
fn empty_terminator_is_rejected() {
    let mut tokenizer = Tokenizer::new();
    let Err(err) = tokenizer.register_rule(TokenRule::new("broken", "x", "")) else {
        panic!("empty terminator should be rejected");
    };
    assert_eq!(err.code(), ErrorCode::INVALID_RULE);
}

#[test]
fn unterminated_right_keeps_earlier_tokens() {
    let mut tokenizer = tokenizer_with([quote()]);
    let failure = scan_failure(&mut tokenizer, "\"a\" \"b");

    assert_eq!(locations(&failure.tokens), vec![loc(1, 1, 1, 3)]);
    assert_eq!(failure.error.code(), ErrorCode::UNTERMINATED_RIGHT);
    assert_eq!(failure.error.location(), Some(CodeLocation::point(1, 5)));
    assert!(failure.error.message().contains("`quote`"));
    assert_eq!(tokenizer.debug_rule_stack().len(), 1);
}

#[test]
fn unterminated_left_reaches_start() {
    let rule = TokenRule::new("back", "\"", "'").with_direction(Direction::Left);
    let mut tokenizer = tokenizer_with([rule]);
    let failure = scan_failure(&mut tokenizer, "ab\"");

    assert!(failure.tokens.is_empty());
    assert_eq!(failure.error.code(), ErrorCode::UNTERMINATED_LEFT);
    assert_eq!(failure.error.location(), Some(CodeLocation::point(1, 3)));
    assert_eq!(tokenizer.history().visited_indices(), vec![0, 1, 2, 1, 0]);
}

#[test]
fn ping_pong_hits_step_limit() {
    let back = TokenRule::new("back", "\"", "<").with_direction(Direction::Left);
    let tag = TokenRule::new("tag", "<", ">");
    let mut tokenizer = tokenizer_with([back, tag]).with_config(TokenizerConfig {
        max_steps: Some(10),
        ..TokenizerConfig::default()
    });
    let failure = scan_failure(&mut tokenizer, "<ab\"");

    assert!(failure.error.code().contains(ErrorCode::STEP_LIMIT));
    assert!(failure.error.code().contains(ErrorCode::UNTERMINATED));
    assert_eq!(failure.error.location(), Some(CodeLocation::point(1, 3)));
    assert_eq!(tokenizer.history().steps().len(), 10);
    // The leftward rule closed once on the way back to `<`.
    assert_eq!(locations(&failure.tokens), vec![loc(1, 1, 1, 4)]);
}

#[test]
fn default_step_budget_scales_with_text() {
    let back = TokenRule::new("back", "\"", "<").with_direction(Direction::Left);
    let tag = TokenRule::new("tag", "<", ">");
    let mut tokenizer = tokenizer_with([back, tag]);
    let failure = scan_failure(&mut tokenizer, "<ab\"");

    assert!(failure.error.intersects(ErrorCode::STEP_LIMIT));
    assert_eq!(tokenizer.history().steps().len(), 64 * 4 + 64);
}

#[test]
fn leftward_scan_restores_columns_across_lines() {
    let rule = TokenRule::new("back", "\"", "a").with_direction(Direction::Left);
    let mut tokenizer = tokenizer_with([rule]);
    let tokens = scan(&mut tokenizer, "xa\nbc\"");

    assert_eq!(locations(&tokens), vec![loc(1, 2, 2, 3)]);
    let coordinates: Vec<(usize, u32, u32)> = tokenizer
        .history()
        .steps()
        .iter()
        .map(|step| (step.index, step.line, step.column))
        .collect();
    assert_eq!(
        coordinates,
        vec![
            (0, 1, 1),
            (1, 1, 2),
            (2, 2, 0),
            (3, 2, 1),
            (4, 2, 2),
            (5, 2, 3),
            (4, 2, 2),
            (3, 2, 1),
            (2, 2, 0),
            (1, 1, 2),
            (0, 1, 1),
        ]
    );
}

#[test]
fn single_slot_memory_shifts_columns_after_newline() {
    let rule = TokenRule::new("back", "\"", "a").with_direction(Direction::Left);
    let mut tokenizer = tokenizer_with([rule]).with_config(TokenizerConfig {
        column_memory: ColumnMemory::SingleSlot,
        ..TokenizerConfig::default()
    });
    let tokens = scan(&mut tokenizer, "xa\nbc\"");

    // The newline is reported at the end of line 1, so `a` lands one column early.
    assert_eq!(locations(&tokens), vec![loc(1, 1, 2, 3)]);
}

#[test]
fn comments_are_skipped() {
    let mut tokenizer = Tokenizer::with_hooks(LineComments::new("//"));
    if let Err(err) = tokenizer.register_rule(quote()) {
        panic!("rule should register: {err}");
    }
    let tokens = scan(&mut tokenizer, "\"a\" // \"b\n\"c\"");

    assert_eq!(locations(&tokens), vec![loc(1, 1, 1, 3), loc(2, 1, 2, 3)]);
    assert_eq!(
        tokenizer.history().visited_indices(),
        vec![0, 1, 2, 3, 9, 10, 11, 12]
    );
}

#[test]
fn comment_at_end_of_text() {
    let mut tokenizer = Tokenizer::with_hooks(LineComments::new("#"));
    if let Err(err) = tokenizer.register_rule(quote()) {
        panic!("rule should register: {err}");
    }
    let tokens = scan(&mut tokenizer, "\"a\" # \"open");
    assert_eq!(locations(&tokens), vec![loc(1, 1, 1, 3)]);
}

fn comment_tokenizer_with(rule: TokenRule) -> Tokenizer<LineComments> {
    let mut tokenizer = Tokenizer::with_hooks(LineComments::new("//"));
    if let Err(err) = tokenizer.register_rule(rule) {
        panic!("rule should register: {err}");
    }
    tokenizer
}

#[test]
fn leftward_scan_skips_comments() {
    let back = TokenRule::new("back", "\"", "'").with_direction(Direction::Left);
    let mut tokenizer = comment_tokenizer_with(back);
    let tokens = scan(&mut tokenizer, "'x // don't\n\"");

    // The apostrophe inside the comment does not close the activation.
    assert_eq!(locations(&tokens), vec![loc(1, 1, 2, 1)]);
    assert_eq!(
        tokenizer.history().visited_indices(),
        vec![0, 1, 2, 11, 12, 11, 2, 1, 0]
    );
    assert!(tokenizer.debug_rule_stack().is_empty());
}

#[test]
fn leftward_scan_stops_at_comment_on_first_character() {
    let back = TokenRule::new("back", "\"", "'").with_direction(Direction::Left);
    let mut tokenizer = comment_tokenizer_with(back);
    let failure = scan_failure(&mut tokenizer, "// x'\n\"");

    assert!(failure.tokens.is_empty());
    assert_eq!(failure.error.code(), ErrorCode::UNTERMINATED_LEFT);
    assert_eq!(failure.error.location(), Some(CodeLocation::point(2, 1)));
    assert_eq!(tokenizer.history().visited_indices(), vec![5, 6, 5]);
}

struct NewlineTokens;

impl ScanHooks for NewlineTokens {
    fn handle_whitespace(&self, c: char, location: CodeLocation) -> Option<Token> {
        (c == '\n').then(|| {
            Token::new(
                location,
                Symbol::empty(),
                IdentifierType::TOKEN,
                ExpressionType::empty(),
            )
        })
    }
}

#[test]
fn whitespace_hook_emits_tokens() {
    let mut tokenizer = Tokenizer::with_hooks(NewlineTokens);
    let tokens = scan(&mut tokenizer, "a b\nc");

    assert_eq!(locations(&tokens), vec![CodeLocation::point(2, 0)]);
    assert_eq!(tokens[0].identifier_type, IdentifierType::TOKEN);
}

#[test]
fn labels_become_categories() {
    let rule = TokenRule::new("declaration", ":", " ")
        .with_symbol_label("decl_keyword")
        .with_identifier_type("token");
    let mut tokenizer = tokenizer_with([rule]);
    let tokens = scan(&mut tokenizer, "x : y");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].symbol, Symbol::DECL_KEYWORD);
    assert_eq!(tokens[0].identifier_type, IdentifierType::TOKEN);
    assert_eq!(tokens[0].expression_type, ExpressionType::DECLARATION);
}

#[test]
fn rerunning_gives_identical_output() {
    let rules = || {
        [
            TokenRule::new("paren", "(", "\""),
            TokenRule::new("back", "\"", "\"").with_direction(Direction::Left),
        ]
    };
    let text = "x (a\"b) (c\"d)";
    let mut first = tokenizer_with(rules());
    let mut second = tokenizer_with(rules());

    let once = scan(&mut first, text);
    let twice = scan(&mut first, text);
    let fresh = scan(&mut second, text);
    assert_eq!(once.len(), 6);
    assert_eq!(once, twice);
    assert_eq!(once, fresh);
    assert_eq!(first.tokens(), once.as_slice());
}

#[test]
fn failed_scan_does_not_leak_into_the_next() {
    let mut tokenizer = tokenizer_with([quote()]);
    let _ = scan_failure(&mut tokenizer, "\"open");
    let tokens = scan(&mut tokenizer, "\"closed\"");
    assert_eq!(locations(&tokens), vec![loc(1, 1, 1, 8)]);
    assert!(tokenizer.debug_rule_stack().is_empty());
}

#[test]
fn tokenizer_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Tokenizer>();
    assert_send_sync::<Tokenizer<LineComments>>();
    assert_send_sync::<ScanFailure>();
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn outcome(result: Result<Vec<Token>, ScanFailure>) -> (Vec<Token>, ErrorCode) {
        match result {
            Ok(tokens) => (tokens, ErrorCode::empty()),
            Err(failure) => (failure.tokens, failure.error.code()),
        }
    }

    fn rightward_rules() -> Tokenizer {
        tokenizer_with([
            quote(),
            TokenRule::new("paren", "(", ")"),
            TokenRule::new("word", "", " ").matching(|c, _, _| c.is_alphabetic()),
        ])
    }

    fn leftward_rules() -> Tokenizer {
        tokenizer_with([
            TokenRule::new("back", "\"", "(").with_direction(Direction::Left),
            TokenRule::new("angle", "<", "a").with_direction(Direction::Left),
        ])
    }

    fn mixed_rules() -> Tokenizer {
        tokenizer_with([
            quote(),
            TokenRule::new("paren", "(", ")"),
            TokenRule::new("back", "<", "(").with_direction(Direction::Left),
        ])
        .with_config(TokenizerConfig {
            max_steps: Some(2_000),
            ..TokenizerConfig::default()
        })
    }

    proptest! {
        #[test]
        fn wildcard_rule_opens_on_every_character(text in "[a-c()\" \n]{0,40}") {
            let mut tokenizer = tokenizer_with([TokenRule::new("any", "", "#")]);
            let (tokens, _) = outcome(tokenizer.tokenize(&text));
            prop_assert!(tokens.is_empty());
            prop_assert_eq!(tokenizer.debug_rule_stack().len(), text.chars().count());
        }

        #[test]
        fn rightward_tokens_have_valid_locations(text in "[a-c()\" \n]{0,40}") {
            let mut tokenizer = rightward_rules();
            let (tokens, _) = outcome(tokenizer.tokenize(&text));
            for token in &tokens {
                prop_assert!(token.location.is_valid(), "{:?} in {:?}", token, text);
            }
        }

        #[test]
        fn leftward_tokens_have_valid_locations(text in "[a-c(<\" \n]{0,40}") {
            let mut tokenizer = leftward_rules();
            let (tokens, _) = outcome(tokenizer.tokenize(&text));
            for token in &tokens {
                prop_assert!(token.location.is_valid(), "{:?} in {:?}", token, text);
            }
        }

        #[test]
        fn inner_activations_close_first(text in "[a-c()<\" \n]{0,40}") {
            let mut tokenizer = mixed_rules();
            let _ = tokenizer.tokenize(&text);
            let records = tokenizer.history().activations();
            for outer in records {
                for inner in records.iter().filter(|inner| outer.encloses(inner)) {
                    let outer_closed = outer.closed_at.unwrap_or(usize::MAX);
                    let inner_closed = inner.closed_at.unwrap_or(usize::MAX);
                    prop_assert!(inner_closed <= outer_closed);
                }
            }
        }

        #[test]
        fn coordinates_do_not_depend_on_direction(text in "[a-c()<\" \n]{0,40}") {
            let mut tokenizer = mixed_rules();
            let _ = tokenizer.tokenize(&text);
            let steps = tokenizer.history().steps();
            for step in steps {
                let Some(first) = steps.iter().find(|other| other.index == step.index) else {
                    continue;
                };
                prop_assert_eq!((first.line, first.column), (step.line, step.column));
            }
        }

        #[test]
        fn tokenizing_is_repeatable(text in "[a-c()<\" \n]{0,40}") {
            let mut tokenizer = mixed_rules();
            let once = outcome(tokenizer.tokenize(&text));
            let twice = outcome(tokenizer.tokenize(&text));
            let fresh = outcome(mixed_rules().tokenize(&text));
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(&once, &fresh);
        }
    }
}
