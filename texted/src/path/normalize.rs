//! Syntactic path normalization.
//!
//! These functions work on the characters of a path only. They never look at
//! the filesystem, so they accept components that do not exist and they do
//! not follow symlinks.

/// Remove the last segment of `path` in place.
///
/// A single trailing `/` is dropped first, then the string is cut at the last
/// remaining `/`. Strings of one character or less are left alone, which keeps
/// a bare `/` intact. When no separator remains the buffer becomes empty.
///
/// # Examples
///
/// ```
/// use texted::path::normalize::strip_last_segment;
///
/// let mut path = String::from("/home/user/");
/// strip_last_segment(&mut path);
/// assert_eq!(path, "/home");
///
/// let mut root = String::from("/");
/// strip_last_segment(&mut root);
/// assert_eq!(root, "/");
/// ```
pub fn strip_last_segment(path: &mut String) {
    if path.len() <= 1 {
        return;
    }
    if path.ends_with('/') {
        path.pop();
    }
    match path.rfind('/') {
        Some(idx) => path.truncate(idx),
        None => path.clear(),
    }
}

/// Remove `./` segments and fold `..` into the preceding segment.
///
/// The scan is a single left-to-right pass with two characters of lookahead
/// at every `.`:
/// - `./` is dropped.
/// - `..` at the end of the input or before a `/` strips the last segment of
///   the output written so far. The following `/` is copied normally, except
///   when an unrooted output was stripped to nothing, so a relative input
///   stays relative.
/// - anything else is copied as is.
///
/// # Examples
///
/// ```
/// use texted::path::normalize::eliminate_dot_segments;
///
/// assert_eq!(eliminate_dot_segments("/a/./b"), "/a/b");
/// assert_eq!(eliminate_dot_segments("/a/b/../c"), "/a/c");
/// assert_eq!(eliminate_dot_segments("/a/.hidden"), "/a/.hidden");
/// assert_eq!(eliminate_dot_segments("a/../c"), "c");
/// ```
#[must_use]
pub fn eliminate_dot_segments(cur: &str) -> String {
    let bytes = cur.as_bytes();
    let mut out = String::with_capacity(cur.len());
    let rooted = cur.starts_with('/');
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'.' {
            match bytes.get(i + 1) {
                Some(b'/') => {
                    i += 2;
                    continue;
                }
                Some(b'.') if matches!(bytes.get(i + 2), None | Some(b'/')) => {
                    strip_last_segment(&mut out);
                    i += 2;
                    if !rooted && out.is_empty() && bytes.get(i) == Some(&b'/') {
                        i += 1;
                    }
                    continue;
                }
                _ => {}
            }
        }

        // `i` only ever advances past ASCII bytes or whole characters, so it
        // always sits on a char boundary here.
        let width = cur[i..].chars().next().map_or(1, char::len_utf8);
        out.push_str(&cur[i..i + width]);
        i += width;
    }

    out
}
