//! Glob matching for ignore patterns.
//!
//! Implements the pattern syntax used by vault ignore lists:
//! - `*` matches any run of characters within a path segment (never `/`)
//! - `**` as a whole segment matches zero or more path segments
//! - `?` matches exactly one character
//! - `[abc]` matches any character in the set
//! - `[a-z]` matches any character in the range
//! - `[!abc]` or `[^abc]` matches any character NOT in the set
//!
//! Patterns come from configuration, not a shell, so there is no brace
//! expansion and no escape sequences.

/// Match a `/`-separated path against a glob pattern.
///
/// The pattern must cover the entire path. Because `**` may match zero
/// segments, `dir/**` also matches `dir` itself, which lets callers prune
/// an ignored directory without descending into it.
///
/// # Examples
/// ```
/// use vaultscope::glob::glob_match;
///
/// assert!(glob_match("*.tmp", "draft.tmp"));
/// assert!(glob_match(".obsidian/**", ".obsidian/workspace.json"));
/// assert!(glob_match(".obsidian/**", ".obsidian"));
/// assert!(!glob_match("*.tmp", "notes/draft.tmp"));
/// ```
pub fn glob_match(pattern: &str, path: &str) -> bool {
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();
    match_segments(&pattern_segments, &path_segments)
}

fn match_segments(pattern: &[&str], path: &[&str]) -> bool {
    match pattern.first() {
        None => path.is_empty(),
        Some(&"**") => {
            // Zero segments, or consume one path segment and retry.
            if match_segments(&pattern[1..], path) {
                return true;
            }
            !path.is_empty() && match_segments(pattern, &path[1..])
        }
        Some(segment) => match path.first() {
            Some(part) => {
                segment_match(segment, part) && match_segments(&pattern[1..], &path[1..])
            }
            None => false,
        },
    }
}

/// Match a single path segment against a single pattern segment.
fn segment_match(pattern: &str, input: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let input: Vec<char> = input.chars().collect();
    match_chars(&pattern, 0, &input, 0)
}

/// Recursive matching with backtracking for `*`.
fn match_chars(pattern: &[char], pi: usize, input: &[char], ii: usize) -> bool {
    // Both exhausted - match!
    if pi >= pattern.len() && ii >= input.len() {
        return true;
    }

    // Pattern exhausted but input remains - no match
    if pi >= pattern.len() {
        return false;
    }

    match pattern[pi] {
        '*' => {
            // Collapse consecutive stars
            let mut next_pi = pi;
            while next_pi < pattern.len() && pattern[next_pi] == '*' {
                next_pi += 1;
            }

            // Star at end matches everything remaining
            if next_pi >= pattern.len() {
                return true;
            }

            // Try matching star with 0, 1, 2, ... characters
            for skip in 0..=(input.len() - ii) {
                if match_chars(pattern, next_pi, input, ii + skip) {
                    return true;
                }
            }
            false
        }

        '?' => {
            if ii >= input.len() {
                return false;
            }
            match_chars(pattern, pi + 1, input, ii + 1)
        }

        '[' => {
            if ii >= input.len() {
                return false;
            }

            let (matches, consumed) = parse_char_class(&pattern[pi..], input[ii]);
            if matches {
                match_chars(pattern, pi + consumed, input, ii + 1)
            } else {
                false
            }
        }

        c => {
            if ii >= input.len() {
                return false;
            }
            if c == input[ii] {
                match_chars(pattern, pi + 1, input, ii + 1)
            } else {
                false
            }
        }
    }
}

/// Parse a character class `[...]` and test the character against it.
///
/// Returns (matches, consumed) where consumed is how many pattern chars the
/// class occupies. An unclosed bracket is treated as a literal `[`.
fn parse_char_class(pattern: &[char], ch: char) -> (bool, usize) {
    let mut idx = 1;
    let mut negate = false;

    if idx < pattern.len() && (pattern[idx] == '!' || pattern[idx] == '^') {
        negate = true;
        idx += 1;
    }

    // `]` as the first class member is a literal
    let first_member = idx;
    let mut matched = false;
    let mut closed = false;

    while idx < pattern.len() {
        let c = pattern[idx];

        if c == ']' && idx > first_member {
            idx += 1;
            closed = true;
            break;
        }

        // Range a-z
        if idx + 2 < pattern.len() && pattern[idx + 1] == '-' && pattern[idx + 2] != ']' {
            if ch >= c && ch <= pattern[idx + 2] {
                matched = true;
            }
            idx += 3;
            continue;
        }

        if c == ch {
            matched = true;
        }
        idx += 1;
    }

    if !closed {
        return (ch == '[', 1);
    }

    (if negate { !matched } else { matched }, idx)
}
