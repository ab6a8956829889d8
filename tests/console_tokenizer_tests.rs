//! Tokenizer tests

use rust_uart_console::console::tokenizer::{tokenize, TokenTable};

#[test]
fn test_tokenize_command_and_args() {
    let tokens = tokenize("add 3 4");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens.command(), "add");
    assert_eq!(tokens.arg(0), Some("3"));
    assert_eq!(tokens.arg(1), Some("4"));
    assert_eq!(tokens.arg(2), None);
}

#[test]
fn test_tokenize_collapses_spaces() {
    let tokens = tokenize("  add  3   4 ");

    let all: Vec<&str> = tokens.iter().collect();
    assert_eq!(all, vec!["add", "3", "4"]);
}

#[test]
fn test_tokenize_empty_line() {
    let tokens = tokenize("");
    assert!(tokens.is_empty());
    assert_eq!(tokens.command(), "");

    let tokens = tokenize("     ");
    assert!(tokens.is_empty());
}

#[test]
fn test_tokenize_drops_tokens_past_limit() {
    let tokens = TokenTable::<3, 8>::parse("a b c d e");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens.get(2), "c");
    assert_eq!(tokens.get(3), "");
}

#[test]
fn test_tokenize_truncates_long_token() {
    let tokens = TokenTable::<4, 6>::parse("abcdefghij 12");

    assert_eq!(tokens.get(0), "abcde");
    assert_eq!(tokens.get(1), "12");
}

#[test]
fn test_tokenize_refill_replaces() {
    let mut tokens: TokenTable = TokenTable::new();
    tokens.fill("mul 6 7");
    tokens.fill("ls");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens.command(), "ls");

    tokens.clear();
    assert!(tokens.is_empty());
}
