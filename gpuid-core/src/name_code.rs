use crate::normalize::Tokens;

pub const PADDING: char = '_';

/// Copies the last word to position 3 (or the end of shorter lists) and drops whatever ends up last.
///
/// With four words or fewer the list comes back unchanged; from five words on the last word
/// takes the fourth place and the former fourth word is pushed out.
pub fn switch_words_order(mut words: Tokens) -> Tokens {
    if let Some(last) = words.last().cloned() {
        let at = words.len().min(3);
        words.insert(at, last);
        words.pop();
    }
    words
}

/// Packs the words into exactly `length` characters, giving each word an equal share.
pub fn cut_name(words: &[String], length: usize) -> String {
    let mut code = String::with_capacity(length);
    if !words.is_empty() {
        let keep = (length + words.len() - 1) / words.len();
        for word in words {
            code.extend(word.chars().take(keep));
        }
    }
    let mut code: String = code.chars().take(length).collect();
    let missing = length.saturating_sub(code.chars().count());
    code.extend(std::iter::repeat(PADDING).take(missing));
    code
}

pub fn name_code(words: Tokens, length: usize) -> String {
    cut_name(&switch_words_order(words), length)
}
