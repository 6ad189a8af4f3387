use memchr::memchr;

// ---

/// An element of a pattern or text sequence.
///
/// Two values are reserved for wildcard use in patterns: [`MANY`](Symbol::MANY)
/// matches any run of symbols and [`ONE`](Symbol::ONE) matches exactly one symbol.
pub trait Symbol: Copy + Eq {
    /// The `*` wildcard, matching zero or more arbitrary symbols.
    const MANY: Self;
    /// The `?` wildcard, matching exactly one arbitrary symbol.
    const ONE: Self;
}

impl Symbol for u8 {
    const MANY: Self = b'*';
    const ONE: Self = b'?';
}

impl Symbol for u16 {
    const MANY: Self = b'*' as u16;
    const ONE: Self = b'?' as u16;
}

impl Symbol for char {
    const MANY: Self = '*';
    const ONE: Self = '?';
}

// ---

/// A finite sequence of symbols navigated by opaque monotonically increasing positions.
///
/// Positions start at zero and are only meaningful when produced by
/// [`next`](Symbols::next) or [`seek`](Symbols::seek) of the same sequence.
/// For strings they are byte offsets, for slices plain indices.
pub trait Symbols {
    type Symbol: Symbol;

    /// Returns the symbol at `pos` along with the position right after it,
    /// or [`None`] if the sequence ends at `pos`.
    fn next(&self, pos: usize) -> Option<(Self::Symbol, usize)>;

    /// Returns the position of the first occurrence of `symbol` at or after `from`.
    #[inline]
    fn seek(&self, from: usize, symbol: Self::Symbol) -> Option<usize> {
        scan(self, from, symbol)
    }
}

fn scan<S>(sequence: &S, mut pos: usize, symbol: S::Symbol) -> Option<usize>
where
    S: Symbols + ?Sized,
{
    while let Some((current, next)) = sequence.next(pos) {
        if current == symbol {
            return Some(pos);
        }
        pos = next;
    }
    None
}

// ---

impl<S> Symbols for &S
where
    S: Symbols + ?Sized,
{
    type Symbol = S::Symbol;

    #[inline(always)]
    fn next(&self, pos: usize) -> Option<(Self::Symbol, usize)> {
        (**self).next(pos)
    }

    #[inline(always)]
    fn seek(&self, from: usize, symbol: Self::Symbol) -> Option<usize> {
        (**self).seek(from, symbol)
    }
}

// ---

impl Symbols for str {
    type Symbol = char;

    #[inline]
    fn next(&self, pos: usize) -> Option<(char, usize)> {
        let ch = self.get(pos..)?.chars().next()?;
        Some((ch, pos + ch.len_utf8()))
    }

    fn seek(&self, from: usize, symbol: char) -> Option<usize> {
        // ASCII bytes never occur inside multi-byte sequences, so a byte scan
        // cannot land off a character boundary.
        if symbol.is_ascii() {
            let tail = self.as_bytes().get(from..)?;
            memchr(symbol as u8, tail).map(|offset| from + offset)
        } else {
            scan(self, from, symbol)
        }
    }
}

impl Symbols for String {
    type Symbol = char;

    #[inline(always)]
    fn next(&self, pos: usize) -> Option<(char, usize)> {
        self.as_str().next(pos)
    }

    #[inline(always)]
    fn seek(&self, from: usize, symbol: char) -> Option<usize> {
        self.as_str().seek(from, symbol)
    }
}

// ---

impl Symbols for [u8] {
    type Symbol = u8;

    #[inline]
    fn next(&self, pos: usize) -> Option<(u8, usize)> {
        self.get(pos).map(|&byte| (byte, pos + 1))
    }

    fn seek(&self, from: usize, symbol: u8) -> Option<usize> {
        let tail = self.get(from..)?;
        memchr(symbol, tail).map(|offset| from + offset)
    }
}

impl Symbols for Vec<u8> {
    type Symbol = u8;

    #[inline(always)]
    fn next(&self, pos: usize) -> Option<(u8, usize)> {
        self.as_slice().next(pos)
    }

    #[inline(always)]
    fn seek(&self, from: usize, symbol: u8) -> Option<usize> {
        self.as_slice().seek(from, symbol)
    }
}

// ---

impl Symbols for [u16] {
    type Symbol = u16;

    #[inline]
    fn next(&self, pos: usize) -> Option<(u16, usize)> {
        self.get(pos).map(|&unit| (unit, pos + 1))
    }
}

impl Symbols for Vec<u16> {
    type Symbol = u16;

    #[inline(always)]
    fn next(&self, pos: usize) -> Option<(u16, usize)> {
        self.as_slice().next(pos)
    }

    #[inline(always)]
    fn seek(&self, from: usize, symbol: u16) -> Option<usize> {
        self.as_slice().seek(from, symbol)
    }
}

// ---

impl Symbols for [char] {
    type Symbol = char;

    #[inline]
    fn next(&self, pos: usize) -> Option<(char, usize)> {
        self.get(pos).map(|&ch| (ch, pos + 1))
    }
}

impl Symbols for Vec<char> {
    type Symbol = char;

    #[inline(always)]
    fn next(&self, pos: usize) -> Option<(char, usize)> {
        self.as_slice().next(pos)
    }

    #[inline(always)]
    fn seek(&self, from: usize, symbol: char) -> Option<usize> {
        self.as_slice().seek(from, symbol)
    }
}
