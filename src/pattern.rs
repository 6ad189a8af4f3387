use std::fmt;

use crate::symbol::{Symbol, Symbols};

/// Tests whether the text matches the wildcard pattern.
///
/// Patterns may contain two wildcards:
/// - `*` matches zero or more characters
/// - `?` matches exactly one character
///
/// Every other pattern character matches itself only, and the whole text must
/// be covered; there is no partial or anchored mode. There is no escape
/// syntax either, so `*` and `?` always act as wildcards and `\` is an
/// ordinary character.
///
/// The scan keeps a single backtracking checkpoint and allocates nothing.
/// Worst case time is proportional to the product of the two lengths and is
/// only approached by star-heavy patterns; typical patterns are matched in
/// a single pass.
///
/// # Examples
///
/// ```
/// use wildscan::matches;
///
/// assert!(matches("*.txt", "readme.txt"));
/// assert!(!matches("*.txt", "readme.md"));
///
/// assert!(matches("a?c", "abc"));
/// assert!(!matches("a?c", "ac"));
/// ```
///
/// Matching is generic over the symbol sequence, so byte slices work the
/// same way as strings:
///
/// ```
/// use wildscan::matches;
///
/// assert!(matches(&b"GET /api/*"[..], &b"GET /api/users"[..]));
/// ```
pub fn matches<P, T>(pattern: P, text: T) -> bool
where
    P: Symbols,
    T: Symbols<Symbol = P::Symbol>,
{
    let mut pp = 0;
    let mut tp = 0;

    // Lock-step scan up to the first star.
    loop {
        match pattern.next(pp) {
            Some((s, _)) if s == P::Symbol::MANY => break,
            Some((s, after)) => {
                let Some((d, next)) = text.next(tp) else {
                    return false;
                };
                if s != P::Symbol::ONE && s != d {
                    return false;
                }
                pp = after;
                tp = next;
            }
            None => return text.next(tp).is_none(),
        }
    }

    // The checkpoint marks the position right after the latest star run and
    // the text position where that star's absorption tentatively ends.
    let mut saved_pp = pp;
    let mut saved_tp = tp;

    loop {
        match (pattern.next(pp), text.next(tp)) {
            (Some((s, after)), _) if s == P::Symbol::MANY => {
                pp = after;
                while let Some((s, after)) = pattern.next(pp) {
                    if s != P::Symbol::MANY {
                        break;
                    }
                    pp = after;
                }
                match pattern.next(pp) {
                    None => return true,
                    Some((s, _)) if s != P::Symbol::ONE => {
                        let Some(found) = text.seek(tp, s) else {
                            return false;
                        };
                        tp = found;
                    }
                    Some(_) => {}
                }
                saved_pp = pp;
                saved_tp = tp;
            }
            (Some((s, after)), Some((d, next))) if s == P::Symbol::ONE || s == d => {
                pp = after;
                tp = next;
            }
            (None, None) => return true,
            (_, None) => return false,
            _ => loop {
                // Mismatch: rewind so the latest star absorbs one more symbol.
                // A `?` run right after that star consumes from wherever the
                // star stops, so each skipped `?` shifts both saved cursors.
                match pattern.next(saved_pp) {
                    Some((s, after)) if s == P::Symbol::ONE => {
                        let Some((_, next)) = text.next(saved_tp) else {
                            return false;
                        };
                        saved_pp = after;
                        saved_tp = next;
                    }
                    Some((s, _)) => {
                        let Some((_, from)) = text.next(saved_tp) else {
                            return false;
                        };
                        let Some(found) = text.seek(from, s) else {
                            return false;
                        };
                        saved_tp = found;
                        pp = saved_pp;
                        tp = found;
                        break;
                    }
                    None => return true,
                }
            },
        }
    }
}

/// A reusable wildcard pattern.
///
/// The pattern holds its source sequence as given, borrowed or owned, and
/// runs the same matcher as [`matches`] without any preprocessing, so
/// construction is free and infallible.
///
/// # Examples
///
/// ```
/// use wildscan::Pattern;
///
/// let pattern = Pattern::new("*.txt");
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
///
/// let pattern = Pattern::new("test?.log");
/// assert!(pattern.matches("test1.log"));
/// assert!(!pattern.matches("test.log"));
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Pattern<S> {
    source: S,
}

impl<S> Pattern<S>
where
    S: Symbols,
{
    /// Creates a new pattern from a symbol sequence.
    ///
    /// All sequences are valid patterns; `*` and `?` are wildcards wherever
    /// they occur and every other symbol stands for itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildscan::Pattern;
    ///
    /// let owned = Pattern::new(String::from("hello*"));
    /// assert!(owned.matches("hello world"));
    ///
    /// let bytes = Pattern::new(&b"v?.*"[..]);
    /// assert!(bytes.matches(&b"v2.11"[..]));
    /// ```
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Tests whether the pattern matches the given text.
    ///
    /// The text may be any sequence with the same symbol type as the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildscan::Pattern;
    ///
    /// let pattern = Pattern::new("*.rs");
    /// assert!(pattern.matches("main.rs"));
    /// assert!(pattern.matches("lib.rs"));
    /// assert!(!pattern.matches("main.txt"));
    /// ```
    #[inline]
    pub fn matches<T>(&self, text: T) -> bool
    where
        T: Symbols<Symbol = S::Symbol>,
    {
        matches(&self.source, text)
    }

    /// Returns the source sequence the pattern was created from.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Tests whether the pattern contains no wildcards and thus can only
    /// match its own source.
    ///
    /// Callers holding many patterns can use this to route literal ones
    /// through plain equality.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildscan::Pattern;
    ///
    /// assert!(Pattern::new("readme.txt").is_literal());
    /// assert!(!Pattern::new("readme.*").is_literal());
    /// assert!(!Pattern::new("readme.tx?").is_literal());
    /// ```
    pub fn is_literal(&self) -> bool {
        self.source.seek(0, S::Symbol::MANY).is_none()
            && self.source.seek(0, S::Symbol::ONE).is_none()
    }
}

impl<S> fmt::Display for Pattern<S>
where
    S: fmt::Display,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}
