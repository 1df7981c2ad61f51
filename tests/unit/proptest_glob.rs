//! Property-based tests for glob translation
//!
//! Uses proptest to verify properties that should hold for all inputs.

use globrx::core::{GlobPattern, translate};
use glob::MatchOptions;
use proptest::prelude::*;

const PATH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

proptest! {
    /// A glob without metacharacters matches exactly itself
    #[test]
    fn literal_matches_itself(s in "[a-zA-Z0-9_./ +()|^$-]{0,20}") {
        let pattern = GlobPattern::new(&s).unwrap();
        prop_assert!(pattern.is_match(&s));
        let longer = format!("{s}x");
        prop_assert!(!pattern.is_match(&longer));
    }

    /// Translation never panics and is deterministic
    #[test]
    fn translation_is_stable(s in "\\PC{0,16}") {
        let first = translate(&s);
        let second = translate(&s);
        prop_assert_eq!(&first, &second);
        if let Err(e) = first {
            prop_assert_eq!(e.glob(), s.as_str());
        }
    }

    /// Every word of a brace list is matched, nothing else is
    #[test]
    fn brace_list_matches_each_word(words in prop::collection::vec("[a-z]{1,6}", 1..5)) {
        let glob = format!("{{{}}}", words.join(","));
        let pattern = GlobPattern::new(&glob).unwrap();
        for w in &words {
            prop_assert!(pattern.is_match(w));
        }
        prop_assert!(!pattern.is_match("0"));
    }

    /// Single stars never match across a slash
    #[test]
    fn star_never_crosses_slash(a in "[a-z]{0,5}", b in "[a-z]{0,5}") {
        let pattern = GlobPattern::new("*").unwrap();
        let path = format!("{a}/{b}");
        prop_assert!(!pattern.is_match(&path));
        let pattern = GlobPattern::new("**").unwrap();
        prop_assert!(pattern.is_match(&path));
    }

    /// Agrees with the glob crate on the shared subset of the syntax
    #[test]
    fn agrees_with_glob_crate(p in "[ab./*?]{0,8}", c in "[ab./]{0,8}") {
        prop_assume!(!p.contains("**"));
        let ours = GlobPattern::new(&p).unwrap().is_match(&c);
        let theirs = glob::Pattern::new(&p).unwrap().matches_with(&c, PATH_OPTIONS);
        prop_assert_eq!(ours, theirs, "glob {:?} on {:?}", p, c);
    }
}
