//! Four-character Soundex variant.
//!
//! Differs from textbook Soundex: the first letter is never coded, and
//! vowels are dropped before repeats collapse, so `1 A 1` becomes a single `1`.
//! Only ASCII letters survive; accented letters are stripped rather than
//! transliterated, so "pogačar" is coded as "pogaar".

/// Length of every non-empty code
pub const CODE_LEN: usize = 4;

fn digit(letter: u8) -> Option<u8> {
    match letter {
        b'B' | b'F' | b'P' | b'V' => Some(b'1'),
        b'C' | b'G' | b'J' | b'K' | b'Q' | b'S' | b'X' | b'Z' => Some(b'2'),
        b'D' | b'T' => Some(b'3'),
        b'L' => Some(b'4'),
        b'M' | b'N' => Some(b'5'),
        b'R' => Some(b'6'),
        // A E I O U H W Y
        _ => None,
    }
}

/// Encode a single word. Returns an empty string when the word has no ASCII letters.
pub fn phonetic_code(word: &str) -> String {
    let letters: Vec<u8> = word
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase())
        .collect();

    let Some((&first, rest)) = letters.split_first() else {
        return String::new();
    };

    let mut digits: Vec<u8> = rest.iter().copied().filter_map(digit).collect();
    digits.dedup();

    let mut code = String::with_capacity(CODE_LEN);
    code.push(char::from(first));
    code.extend(digits.into_iter().map(char::from).take(CODE_LEN - 1));
    while code.len() < CODE_LEN {
        code.push('0');
    }
    code
}
