//! Finds variables interpolated into string literal text.
//!
//! Matches the same occurrences as the pattern
//! `[^\\]\$\{?([A-Za-z_\x7f-\xff][A-Za-z0-9_\x7f-\xff]*)` applied to the raw
//! bytes: each match consumes the character before the sigil, and matching
//! resumes right after the name, so `"$a$b"` yields only `a`.

/// A variable reference inside a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpolation<'a> {
    /// Variable name without sigil or brace.
    pub name: &'a str,
    /// Byte offset of the name within the literal text.
    pub offset: usize,
    /// The two bytes before the sigil are `::` or `->`.
    pub property_access: bool,
}

/// Iterator over the interpolated variables of one literal.
#[derive(Debug, Clone)]
pub struct Interpolations<'a> {
    content: &'a str,
    cursor: usize,
}

impl<'a> Interpolations<'a> {
    /// Starts scanning `content`.
    #[must_use]
    pub fn new(content: &'a str) -> Self {
        Self { content, cursor: 0 }
    }
}

impl<'a> Iterator for Interpolations<'a> {
    type Item = Interpolation<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.content.as_bytes();
        let mut i = self.cursor;

        while i + 1 < bytes.len() {
            if bytes[i] != b'\\' && bytes[i + 1] == b'$' {
                let mut start = i + 2;
                if bytes.get(start) == Some(&b'{') {
                    start += 1;
                }
                if bytes.get(start).copied().is_some_and(is_name_start) {
                    let len = bytes[start..]
                        .iter()
                        .take_while(|b| is_name_char(**b))
                        .count();
                    let end = start + len;
                    self.cursor = end;
                    return Some(Interpolation {
                        // Name bytes start after an ASCII sigil and stop before
                        // an ASCII byte, so both ends are char boundaries.
                        name: &self.content[start..end],
                        offset: start,
                        property_access: is_property_access(bytes, start),
                    });
                }
            }
            i += 1;
        }

        self.cursor = bytes.len();
        None
    }
}

fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x7f
}

fn is_name_char(b: u8) -> bool {
    is_name_start(b) || b.is_ascii_digit()
}

/// Checks the two bytes at `offset - 3 .. offset - 1`.
///
/// For `$name` these are the two bytes before the sigil; for `${name}` the
/// window includes the sigil itself and never matches.
fn is_property_access(bytes: &[u8], offset: usize) -> bool {
    offset >= 3 && matches!(&bytes[offset - 3..offset - 1], b"::" | b"->")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(content: &str) -> Vec<&str> {
        Interpolations::new(content).map(|m| m.name).collect()
    }

    #[test]
    fn finds_simple_and_braced_variables() {
        assert_eq!(names(r#""Value: $my_var end""#), vec!["my_var"]);
        assert_eq!(names(r#""${fooBar} and {$baz}""#), vec!["fooBar", "baz"]);
    }

    #[test]
    fn reports_offsets() {
        let found: Vec<_> = Interpolations::new(r#""x $abc""#).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].offset, 4);
        assert!(!found[0].property_access);
    }

    #[test]
    fn escaped_sigil_is_ignored() {
        assert!(names(r#""cost: \$price""#).is_empty());
    }

    #[test]
    fn sigil_at_start_has_no_preceding_char() {
        assert_eq!(names("$foo $bar"), vec!["bar"]);
    }

    #[test]
    fn adjacent_variables_follow_non_overlapping_matches() {
        assert_eq!(names(r#""$a$b""#), vec!["a"]);
        assert_eq!(names(r#""$a $b""#), vec!["a", "b"]);
    }

    #[test]
    fn names_cannot_start_with_digit() {
        assert!(names(r#""$1abc""#).is_empty());
        assert!(names(r#""${ x}""#).is_empty());
    }

    #[test]
    fn property_access_prefix() {
        let found: Vec<_> = Interpolations::new(r#""$obj->$prop_name""#).collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "obj");
        assert!(!found[0].property_access);
        assert_eq!(found[1].name, "prop_name");
        assert!(found[1].property_access);

        let found: Vec<_> = Interpolations::new(r#""{Foo::$bar_baz}""#).collect();
        assert_eq!(found.len(), 1);
        assert!(found[0].property_access);
    }

    #[test]
    fn this_property_only_matches_this() {
        assert_eq!(names(r#""Value: $this->prop""#), vec!["this"]);
    }

    #[test]
    fn high_bytes_are_name_characters() {
        assert_eq!(names("\"$größe!\""), vec!["größe"]);
    }
}
