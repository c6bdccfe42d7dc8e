//! Word/punctuation tokenizer

/// A token in the claim text
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Lowercased word; may contain digits, underscores and inner apostrophes
    Word(String),
    /// Punctuation or line break; candidate phrases never cross it
    Boundary,
}

/// Split text into lowercased words and phrase boundaries
pub(crate) fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_alphanumeric() || c == '_' {
            word.extend(c.to_lowercase());
            continue;
        }

        // Keep apostrophes inside words ("newton's", "don't")
        if (c == '\'' || c == '\u{2019}')
            && !word.is_empty()
            && chars.peek().is_some_and(|next| next.is_alphanumeric())
        {
            word.push('\'');
            continue;
        }

        flush(&mut word, &mut tokens);
        if c == '\n' || !c.is_whitespace() {
            push_boundary(&mut tokens);
        }
    }
    flush(&mut word, &mut tokens);

    tokens
}

fn flush(word: &mut String, tokens: &mut Vec<Token>) {
    if !word.is_empty() {
        tokens.push(Token::Word(std::mem::take(word)));
    }
}

fn push_boundary(tokens: &mut Vec<Token>) {
    if !matches!(tokens.last(), Some(Token::Boundary)) {
        tokens.push(Token::Boundary);
    }
}
