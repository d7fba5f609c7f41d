use tablexer::{lex, lex_lossy, tokenize, Token};

const SAMPLES: &[&str] = &[
    "",
    "def f = [@ ~ 1]",
    "@.1 ** 2.5e3 <= -3u ; x_1 != 'y'",
    "{\n\t\"multi\nline\" , 'a\\'b' }\n",
    "[. 1, 2, 3 .] >> 4 << 5 ? 6 : 7",
    "define undef def= == === !=-1",
    "a-1 - -2 --3 1.0.2",
];

fn concat(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn round_trip_reproduces_input() {
    for src in SAMPLES {
        let tokens = lex(src).unwrap();
        assert_eq!(&concat(&tokens), src);
    }
}

#[test]
fn tokenize_is_deterministic() {
    for src in SAMPLES {
        assert_eq!(lex(src).unwrap(), lex(src).unwrap());
        let lazy: Vec<Token> = tokenize(src).map(Result::unwrap).collect();
        assert_eq!(lazy, lex(src).unwrap());
    }
}

#[test]
fn tokens_are_contiguous_and_non_empty() {
    for src in SAMPLES {
        let tokens = lex(src).unwrap();
        let mut expected_start = 0;
        for token in &tokens {
            assert!(!token.span.is_empty(), "empty token in {src:?}");
            assert_eq!(token.span.start, expected_start);
            assert_eq!(&src[token.span.start..token.span.end], token.text);
            expected_start = token.span.end;
        }
        assert_eq!(expected_start, src.len());
    }
}

#[test]
fn lossy_round_trip_with_bad_input() {
    for src in ["#!!!", "a $ b", "\"open", "é@", "x\n#\ny"] {
        let (tokens, errors) = lex_lossy(src);
        assert!(!errors.is_empty(), "expected errors for {src:?}");
        assert_eq!(concat(&tokens), src);
    }
}

#[test]
fn independent_inputs_lex_in_parallel() {
    let handles: Vec<_> = SAMPLES
        .iter()
        .map(|src| std::thread::spawn(move || lex(src).unwrap()))
        .collect();
    for (handle, src) in handles.into_iter().zip(SAMPLES) {
        assert_eq!(handle.join().unwrap(), lex(src).unwrap());
    }
}

const ALPHABET: &[char] = &[
    '"', '\'', '\\', '-', '1', '.', '=', '#', 'é', 'a', 'e', '<', ' ', '\n',
];

/// 字母表上长度 0..=max_len 的全部字符串。
fn all_strings(max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut layer = vec![String::new()];
    for _ in 0..max_len {
        layer = layer
            .iter()
            .flat_map(|prefix| {
                ALPHABET.iter().map(move |ch| {
                    let mut s = prefix.clone();
                    s.push(*ch);
                    s
                })
            })
            .collect();
        out.extend(layer.iter().cloned());
    }
    out
}

fn assert_contiguous(src: &str, tokens: &[Token]) {
    let mut expected_start = 0;
    for token in tokens {
        assert!(!token.span.is_empty(), "empty token in {src:?}");
        assert_eq!(token.span.start, expected_start, "gap in {src:?}");
        assert_eq!(&src[token.span.start..token.span.end], token.text);
        expected_start = token.span.end;
    }
    assert_eq!(expected_start, src.len(), "uncovered tail in {src:?}");
}

#[test]
fn exhaustive_short_inputs() {
    for src in all_strings(3) {
        let (lossy, errors) = lex_lossy(&src);
        assert_eq!(concat(&lossy), src);
        assert_contiguous(&src, &lossy);
        let error_tokens: Vec<&Token> = lossy
            .iter()
            .filter(|t| t.kind == tablexer::TokenKind::Error)
            .collect();
        assert_eq!(error_tokens.len(), errors.len(), "in {src:?}");

        let strict = lex(&src);
        let again = lex(&src);
        match (strict, again) {
            (Ok(tokens), Ok(again)) => {
                assert_eq!(tokens, again);
                assert_eq!(tokens, lossy);
                assert_eq!(concat(&tokens), src);
            }
            (Err(err), Err(again)) => {
                assert_eq!(err.offset(), again.offset());
                assert_eq!(err.offset(), Some(error_tokens[0].offset()), "in {src:?}");
                let prefix: Vec<Token> = tokenize(&src).map_while(Result::ok).collect();
                assert_eq!(prefix[..], lossy[..prefix.len()]);
            }
            _ => panic!("nondeterministic result for {src:?}"),
        }
    }
}
