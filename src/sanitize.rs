//! Scrubbing for user-submitted text before it reaches the query layer.

/// Strip the `$` operator sigil from a submitted field. Stored values
/// must never carry query-operator keys.
pub fn scrub(input: &str) -> String {
    input.replace('$', "")
}

/// Escape LIKE pattern metacharacters so the input matches literally.
/// Used together with `ESCAPE '\'` in the prefix query.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '%' | '_' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrub_strips_operator_sigils() {
        assert_eq!(scrub("$where"), "where");
        assert_eq!(scrub("pay $5 for $gt"), "pay 5 for gt");
    }

    #[test]
    fn scrub_leaves_plain_text_alone() {
        assert_eq!(scrub("Hello World"), "Hello World");
    }

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("100%_done"), "100\\%\\_done");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn escape_like_passes_ordinary_titles() {
        assert_eq!(escape_like("hello world"), "hello world");
    }
}
