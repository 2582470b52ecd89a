/// The closed set of words the language recognizes.
///
/// Every entry is either a keyword or a builtin. No entry may be a single-edit
/// typo of another entry, otherwise a candidate could resolve to two canonical
/// words at once.
pub const VOCABULARY: &[&str] = &["def", "return", "if", "elif", "else", "and", "or", "not", "True",
                                  "False", "print"];

/// Returns `true` if `word` is spelled exactly like a vocabulary entry.
///
/// # Example
/// ```
/// use pyhton::interpreter::typo::is_vocabulary_word;
///
/// assert!(is_vocabulary_word("elif"));
/// assert!(!is_vocabulary_word("elfi"));
/// ```
#[must_use]
pub fn is_vocabulary_word(word: &str) -> bool {
    VOCABULARY.contains(&word)
}

/// Resolves a candidate word to the vocabulary entry it is a typo of.
///
/// The candidate must differ from the entry by exactly one doubled letter, one
/// missing letter or one pair of swapped neighbours. An exact spelling is not a
/// typo and yields `None`; callers test exact membership separately with
/// [`is_vocabulary_word`].
///
/// # Example
/// ```
/// use pyhton::interpreter::typo::find_original_word;
///
/// assert_eq!(find_original_word("prrint"), Some("print"));
/// assert_eq!(find_original_word("pritn"), Some("print"));
/// assert_eq!(find_original_word("prnt"), Some("print"));
/// assert_eq!(find_original_word("print"), None);
/// assert_eq!(find_original_word("defff"), None);
/// ```
#[must_use]
pub fn find_original_word(candidate: &str) -> Option<&'static str> {
    VOCABULARY.iter()
              .copied()
              .find(|word| is_valid_typo(candidate, word))
}

/// Tests whether `candidate` is a single-edit typo of `word`.
///
/// # Example
/// ```
/// use pyhton::interpreter::typo::is_valid_typo;
///
/// assert!(is_valid_typo("deff", "def"));
/// assert!(is_valid_typo("esle", "else"));
/// assert!(is_valid_typo("", "a"));
/// assert!(!is_valid_typo("def", "def"));
/// ```
#[must_use]
pub fn is_valid_typo(candidate: &str, word: &str) -> bool {
    if candidate == word {
        return false;
    }

    let candidate: Vec<char> = candidate.chars().collect();
    let word: Vec<char> = word.chars().collect();

    is_doubled_letter(&candidate, &word)
    || is_missing_letter(&candidate, &word)
    || is_swapped_letters(&candidate, &word)
}

/// Lists every distinct single-edit typo of `word`, in generation order.
///
/// Doubled-letter variants come first, then missing-letter variants, then
/// swapped neighbours. The word itself is never included, even when a swap of
/// two equal letters would reproduce it.
///
/// # Example
/// ```
/// use pyhton::interpreter::typo::typos_of;
///
/// assert_eq!(typos_of("or"), vec!["oor", "orr", "r", "o", "ro"]);
/// ```
#[must_use]
pub fn typos_of(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut typos: Vec<String> = Vec::new();
    let mut push = |typo: String| {
        if typo != word && !typos.contains(&typo) {
            typos.push(typo);
        }
    };

    for i in 0..chars.len() {
        let mut doubled = chars.clone();
        doubled.insert(i, chars[i]);
        push(doubled.into_iter().collect());
    }
    for i in 0..chars.len() {
        let mut missing = chars.clone();
        missing.remove(i);
        push(missing.into_iter().collect());
    }
    for i in 0..chars.len().saturating_sub(1) {
        let mut swapped = chars.clone();
        swapped.swap(i, i + 1);
        push(swapped.into_iter().collect());
    }

    typos
}

fn is_doubled_letter(candidate: &[char], word: &[char]) -> bool {
    if candidate.len() != word.len() + 1 {
        return false;
    }

    (0..word.len()).any(|i| {
                       candidate[..=i] == word[..=i]
                       && candidate[i + 1] == word[i]
                       && candidate[i + 2..] == word[i + 1..]
                   })
}

fn is_missing_letter(candidate: &[char], word: &[char]) -> bool {
    if candidate.len() + 1 != word.len() {
        return false;
    }

    (0..word.len()).any(|i| candidate[..i] == word[..i] && candidate[i..] == word[i + 1..])
}

fn is_swapped_letters(candidate: &[char], word: &[char]) -> bool {
    if candidate.len() != word.len() || word.len() < 2 {
        return false;
    }

    (0..word.len() - 1).any(|i| {
                           candidate[..i] == word[..i]
                           && candidate[i] == word[i + 1]
                           && candidate[i + 1] == word[i]
                           && candidate[i + 2..] == word[i + 2..]
                       })
}
