//! Tab completion over the command table
//!
//! Stateless: each tab press scans the candidates once.

/// Outcome of completing a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion<'a> {
    NoMatch,
    /// Exactly one candidate starts with the prefix.
    Unique(&'a str),
    /// Number of candidates sharing the prefix (two or more).
    Ambiguous(usize),
}

/// Complete `prefix` against `candidates` (exact byte-prefix match).
pub fn complete<'a, I>(prefix: &str, candidates: I) -> Completion<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut count = 0;
    let mut last = None;

    for c in candidates {
        if c.starts_with(prefix) {
            count += 1;
            last = Some(c);
        }
    }

    match (count, last) {
        (1, Some(name)) => Completion::Unique(name),
        (0, _) | (_, None) => Completion::NoMatch,
        (n, _) => Completion::Ambiguous(n),
    }
}

/// Candidates starting with `prefix`, in table order.
pub fn matches<'p, 'a, I>(prefix: &'p str, candidates: I) -> impl Iterator<Item = &'a str> + 'p
where
    'a: 'p,
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'p,
{
    candidates.into_iter().filter(move |c| c.starts_with(prefix))
}
