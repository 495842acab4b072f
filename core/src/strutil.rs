//! String-ending arithmetic shared by the decomposition engine.
//!
//! All positions are counted in characters, never bytes, so non-ASCII input
//! (e.g. "naïve") is cut safely. Functions here are pure: validation against
//! the word list is passed in by the caller.

use crate::rules::NO_RESTORE_MARKER;

/// Number of characters in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the boundary `n` characters from the right of `word`.
fn boundary_from_right(word: &str, n: usize) -> Option<usize> {
    let len = char_len(word);
    if n > len {
        return None;
    }
    let keep = len - n;
    Some(
        word.char_indices()
            .nth(keep)
            .map(|(idx, _)| idx)
            .unwrap_or(word.len()),
    )
}

/// Index of the first ending in `endings` that `word` ends with.
pub fn ends_with_any<S: AsRef<str>>(word: &str, endings: &[S]) -> Option<usize> {
    endings.iter().position(|e| word.ends_with(e.as_ref()))
}

/// Cut `word` in front of the first matching ending.
///
/// `cities` with endings `[ied, ies]` gives `("cit", "ies")`.
pub fn crude_root_suffix<S: AsRef<str>>(word: &str, endings: &[S]) -> Option<(String, String)> {
    let idx = ends_with_any(word, endings)?;
    let ending = endings[idx].as_ref();
    let head = word.strip_suffix(ending)?;
    Some((head.to_string(), ending.to_string()))
}

/// Cut `offset` characters from the right of `word` and append `addon` to the
/// head. The head must keep at least one character.
///
/// The [`NO_RESTORE_MARKER`] addon appends nothing.
pub fn split_from_right(word: &str, offset: usize, addon: &str) -> Option<(String, String)> {
    if offset >= char_len(word) {
        return None;
    }
    let cut = boundary_from_right(word, offset)?;
    let mut head = word[..cut].to_string();
    if addon != NO_RESTORE_MARKER {
        head.push_str(addon);
    }
    Some((head, word[cut..].to_string()))
}

/// Split a word ending in ed, er, est or ing into stem and inflection,
/// restoring a silent `e` when that yields a word.
///
/// `hoping -> (hope, ing)`, `working -> (work, ing)`, `lover -> (love, er)`.
pub fn cut_ed_er_est_ing<F>(word: &str, is_word: F) -> (String, String)
where
    F: Fn(&str) -> bool,
{
    if word.ends_with("est") || word.ends_with("ing") {
        let cut = boundary_from_right(word, 3).unwrap_or(0);
        let (base, inflection) = word.split_at(cut);
        let restored = format!("{}e", base);
        if is_word(&restored) {
            return (restored, inflection.to_string());
        }
        (base.to_string(), inflection.to_string())
    } else {
        // ed / er: "lover" drops only the "r" when "love" is a word
        let one = boundary_from_right(word, 1).unwrap_or(0);
        let candidate = &word[..one];
        let two = boundary_from_right(word, 2).unwrap_or(0);
        if is_word(candidate) {
            return (candidate.to_string(), word[two..].to_string());
        }
        (word[..two].to_string(), word[two..].to_string())
    }
}

/// Split a matched ending into the fragment carried back to the stem and the
/// inflection.
///
/// - `shes -> (sh, es)`, `ves -> (f, es)`
/// - `otter -> (ot, er)` when the 2nd and 3rd characters double
/// - `ties -> (ty, es)`, `ried -> (ry, ed)` otherwise
///
/// Endings shorter than three characters cannot be split and yield `None`,
/// except for the es-class handled first.
pub fn split_ending(ending: &str) -> Option<(String, String)> {
    if ending.ends_with("es") && !ending.ends_with("ies") {
        let fragment = if ending.starts_with('v') {
            "f".to_string()
        } else {
            let cut = boundary_from_right(ending, 2)?;
            ending[..cut].to_string()
        };
        return Some((fragment, "es".to_string()));
    }

    let chars: Vec<char> = ending.chars().collect();
    if chars.len() < 3 {
        return None;
    }
    if chars[1] == chars[2] {
        let fragment: String = chars[..2].iter().collect();
        let inflection: String = chars[3..].iter().collect();
        Some((fragment, inflection))
    } else {
        let fragment = format!("{}y", chars[0]);
        let inflection: String = chars[2..].iter().collect();
        Some((fragment, inflection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crude_split_uses_first_matching_ending() {
        let endings = ["ied", "ies", "s"];
        assert_eq!(
            crude_root_suffix("cities", &endings),
            Some(("cit".to_string(), "ies".to_string()))
        );
        assert_eq!(crude_root_suffix("city", &endings), None);
    }

    #[test]
    fn split_from_right_keeps_a_head() {
        assert_eq!(
            split_from_right("cities", 3, "y"),
            Some(("city".to_string(), "ies".to_string()))
        );
        assert_eq!(
            split_from_right("begging", 4, NO_RESTORE_MARKER),
            Some(("beg".to_string(), "ging".to_string()))
        );
        assert_eq!(split_from_right("ing", 3, ""), None);
    }

    #[test]
    fn split_from_right_is_char_safe() {
        assert_eq!(
            split_from_right("naïves", 1, ""),
            Some(("naïve".to_string(), "s".to_string()))
        );
    }

    #[test]
    fn silent_e_restoration() {
        let words = ["hope", "work", "love"];
        let is_word = |w: &str| words.contains(&w);
        assert_eq!(
            cut_ed_er_est_ing("hoping", is_word),
            ("hope".to_string(), "ing".to_string())
        );
        assert_eq!(
            cut_ed_er_est_ing("working", is_word),
            ("work".to_string(), "ing".to_string())
        );
        assert_eq!(
            cut_ed_er_est_ing("lover", is_word),
            ("love".to_string(), "er".to_string())
        );
        assert_eq!(
            cut_ed_er_est_ing("worked", is_word),
            ("work".to_string(), "ed".to_string())
        );
    }

    #[test]
    fn ending_tail_splits() {
        assert_eq!(split_ending("shes"), Some(("sh".to_string(), "es".to_string())));
        assert_eq!(split_ending("ves"), Some(("f".to_string(), "es".to_string())));
        assert_eq!(split_ending("otter"), Some(("ot".to_string(), "er".to_string())));
        assert_eq!(split_ending("ties"), Some(("ty".to_string(), "es".to_string())));
        assert_eq!(split_ending("ried"), Some(("ry".to_string(), "ed".to_string())));
        assert_eq!(split_ending("ed"), None);
    }
}
