//! Naming convention for default event actions

/// Handler name a listener looks up when no action was registered for `event`
///
/// The first letter of every word is upper-cased, spaces are removed and the
/// result is prefixed with `on`: `"uc first"` becomes `"onUcFirst"`. Words are
/// separated by space, tab, carriage return, newline, form feed or vertical tab;
/// separators other than spaces are kept. Only ASCII letters change case.
///
/// Handlers are matched ignoring ASCII case, so `"UC FIRST"` also resolves to an
/// `onUcFirst` handler.
pub fn default_action_name(event: &str) -> String {
    let mut name = String::with_capacity(event.len() + 2);
    name.push_str("on");

    let mut word_start = true;
    for c in event.chars() {
        if word_start {
            name.push(c.to_ascii_uppercase());
        } else {
            name.push(c);
        }
        word_start = is_word_separator(c);
    }

    name.retain(|c| c != ' ');
    name
}

fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C' | '\x0B')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        assert_eq!(default_action_name("uppercase"), "onUppercase");
    }

    #[test]
    fn test_words_are_joined() {
        assert_eq!(default_action_name("uc first"), "onUcFirst");
        assert_eq!(default_action_name("file saved now"), "onFileSavedNow");
    }

    #[test]
    fn test_existing_capitals_are_kept() {
        assert_eq!(default_action_name("HTTP request"), "onHTTPRequest");
    }

    #[test]
    fn test_repeated_spaces() {
        assert_eq!(default_action_name("a  b"), "onAB");
    }

    #[test]
    fn test_tab_separates_words_but_is_kept() {
        assert_eq!(default_action_name("a\tb"), "onA\tB");
    }

    #[test]
    fn test_vertical_tab_separates_words() {
        assert_eq!(default_action_name("a\x0Bb"), "onA\x0BB");
    }

    #[test]
    fn test_only_ascii_letters_change_case() {
        assert_eq!(default_action_name("\u{df}x"), "on\u{df}x");
        assert_eq!(default_action_name("x \u{e9}t\u{e9}"), "onX\u{e9}t\u{e9}");
    }

    #[test]
    fn test_non_ascii_whitespace_does_not_start_a_word() {
        assert_eq!(default_action_name("a\u{a0}b"), "onA\u{a0}b");
    }

    #[test]
    fn test_empty_event() {
        assert_eq!(default_action_name(""), "on");
    }
}
