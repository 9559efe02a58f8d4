use suanjing::{Category, FailureKind, Lexer, PatternRegistry, State, Token, Tokenized};

const NUMERAL_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/numerals.txt");

fn lexer() -> Lexer {
    Lexer::from_numeral_file(NUMERAL_FILE).expect("failed to build lexer")
}

#[track_caller]
fn assert_tokens(result: &Tokenized, expected: &[(Category, &str)]) {
    let actual: Vec<(Category, &str)> = result
        .tokens
        .iter()
        .map(|token| (token.category, token.text.as_str()))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn empty_passage() {
    let mut lexer = lexer();
    let result = lexer.tokenize("");
    assert!(result.tokens.is_empty());
    assert!(result.is_complete());
    assert!(lexer.symbols().is_empty());
}

#[test]
fn opener_only() {
    let mut lexer = lexer();
    let result = lexer.tokenize("今有");
    assert!(result.is_complete());
    assert_tokens(
        &result,
        &[(Category::Lexeme, "今"), (Category::Lexeme, "有")],
    );
    // Neither token is a numeral or unit.
    assert!(lexer.symbols().is_empty());
}

#[test]
fn field_declaration() {
    let mut lexer = lexer();
    let result = lexer.tokenize("今有田广十二步");
    assert!(result.is_complete());
    assert_tokens(
        &result,
        &[
            (Category::Lexeme, "今"),
            (Category::Lexeme, "有"),
            (Category::Type, "田"),
            (Category::Type, "广"),
            (Category::Number, "十二"),
            (Category::Unit, "步"),
        ],
    );
    assert_eq!(lexer.symbols().len(), 2);
    assert_eq!(lexer.symbols().lookup("十二"), Some(Category::Number));
    assert_eq!(lexer.symbols().lookup("步"), Some(Category::Unit));
}

#[test]
fn full_problem_is_consumed_entirely() {
    let passage = "今有田广九亿零八百七十六万五千四百三十二步，从八亿八千万零一千零三步。问为田几何？";
    let mut lexer = lexer();
    let result = lexer.tokenize(passage);
    assert!(result.is_complete(), "failure: {:?}", result.failure);
    let rejoined: String = result
        .tokens
        .iter()
        .map(|token| token.text.as_str())
        .collect();
    assert_eq!(rejoined, passage);
    assert_eq!(
        lexer.symbols().lookup("九亿零八百七十六万五千四百三十二"),
        Some(Category::Number)
    );
    assert_eq!(
        lexer.symbols().lookup("八亿八千万零一千零三"),
        Some(Category::Number)
    );
    assert_eq!(lexer.symbols().lookup("步"), Some(Category::Unit));
    assert_eq!(lexer.symbols().len(), 3);
}

#[test]
fn fraction_problem() {
    let mut lexer = lexer();
    let result = lexer.tokenize("今有十八分之十二。问约之得几何？");
    assert!(result.is_complete(), "failure: {:?}", result.failure);
    assert_tokens(
        &result,
        &[
            (Category::Lexeme, "今"),
            (Category::Lexeme, "有"),
            (Category::Number, "十八"),
            (Category::Function, "分"),
            (Category::Function, "之"),
            (Category::Number, "十二"),
            (Category::Punctuation, "。"),
            (Category::Question, "问"),
            (Category::Question, "约之"),
            (Category::Question, "得"),
            (Category::Question, "几何"),
            (Category::Punctuation, "？"),
        ],
    );
}

#[test]
fn prefixed_field_problem() {
    let mut lexer = lexer();
    let result = lexer.tokenize("今有圭田广十二步，正从二十一步。问为田几何？");
    assert!(result.is_complete(), "failure: {:?}", result.failure);
    let rejoined: String = result
        .tokens
        .iter()
        .map(|token| token.text.as_str())
        .collect();
    assert_eq!(rejoined, "今有圭田广十二步，正从二十一步。问为田几何？");
    assert_eq!(result.tokens[2].category, Category::Prefix);
    assert_eq!(result.tokens[2].text, "圭");
}

#[test]
fn classic_problems_tokenize_fully() {
    let corpus = [
        "今有三分之一，五分之二。问合之得几何？",
        "今有九分之八，减其五分之一。问馀几何？",
        "今有八分之五，二十五分之十六。问孰多？多几何？",
        "今有三分之一，三分之二，四分之三。问减多益少，各几何而平？",
        "今有七人，分八钱三分钱之一。问人得几何？",
        "今有邪田，一头广三十步，一头广四十二步，正从六十四步。问为田几何？",
        "今有环田，中周九十二步，外周一百二十二步，径五步。问为田几何？",
    ];
    let mut lexer = lexer();
    for passage in corpus {
        let result = lexer.tokenize(passage);
        assert!(
            result.is_complete(),
            "passage {:?} failed: {:?}",
            passage,
            result.failure
        );
        let rejoined: String = result
            .tokens
            .iter()
            .map(|token| token.text.as_str())
            .collect();
        assert_eq!(rejoined, passage);
    }
}

#[test]
fn rejection_keeps_accepted_prefix() {
    let mut lexer = lexer();
    // A unit may not follow an opener.
    let result = lexer.tokenize("今有步");
    assert_tokens(
        &result,
        &[(Category::Lexeme, "今"), (Category::Lexeme, "有")],
    );
    let failure = result.failure.expect("expected a failure");
    assert_eq!(
        failure.kind,
        FailureKind::GrammarViolation {
            state: State::Lexeme,
            category: Category::Unit,
        }
    );
    assert_eq!(failure.offset, 6);
}

#[test]
fn out_of_vocabulary_text_is_rejected_by_the_grammar() {
    let mut lexer = lexer();
    let result = lexer.tokenize("今有hello");
    assert_tokens(
        &result,
        &[(Category::Lexeme, "今"), (Category::Lexeme, "有")],
    );
    let failure = result.failure.expect("expected a failure");
    assert_eq!(
        failure.kind,
        FailureKind::GrammarViolation {
            state: State::Lexeme,
            category: Category::Other,
        }
    );
}

#[test]
fn batch_failures_are_passage_local() {
    let mut lexer = lexer();
    let results = lexer.tokenize_texts(["步", "今有"]);
    assert_eq!(results.len(), 2);

    assert!(results[0].tokens.is_empty());
    let failure = results[0].failure.expect("expected a failure");
    assert_eq!(
        failure.kind,
        FailureKind::GrammarViolation {
            state: State::Start,
            category: Category::Unit,
        }
    );
    assert_eq!(failure.offset, 0);

    assert!(results[1].is_complete());
    assert_tokens(
        &results[1],
        &[(Category::Lexeme, "今"), (Category::Lexeme, "有")],
    );
}

#[test]
fn symbols_accumulate_across_a_batch() {
    let mut lexer = lexer();
    lexer.tokenize_texts(["今有田广十二步", "今有三人"]);
    assert_eq!(lexer.symbols().len(), 4);
    assert_eq!(lexer.symbols().lookup("三"), Some(Category::Number));
    assert_eq!(lexer.symbols().lookup("人"), Some(Category::Unit));

    lexer.clear_symbols();
    assert!(lexer.symbols().is_empty());
}

#[test]
fn symbol_table_is_last_write_wins() {
    let mut table = suanjing::SymbolTable::new();
    table.record(&Token::new(Category::Number, "步"));
    table.record(&Token::new(Category::Unit, "步"));
    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup("步"), Some(Category::Unit));

    // Other categories are ignored outright.
    table.record(&Token::new(Category::Lexeme, "今"));
    assert_eq!(table.len(), 1);
}

#[test]
fn summary_renders_tokens_or_placeholder() {
    let mut lexer = lexer();
    let result = lexer.tokenize("今有");
    assert_eq!(result.summary(), "LEXEME: '今', LEXEME: '有'");

    let result = lexer.tokenize("");
    assert_eq!(result.summary(), "No question processed.");
}

#[test]
fn missing_numeral_resource_is_fatal() {
    let err = Lexer::from_numeral_file("no-such-resource.txt");
    assert!(matches!(
        err,
        Err(suanjing::BuildError::NumeralResource { .. })
    ));
}

#[test]
fn malformed_numeral_pattern_is_fatal() {
    let err = Lexer::new(PatternRegistry::with_numeral_pattern("("));
    assert!(matches!(err, Err(suanjing::BuildError::InvalidRegex(_))));
}
