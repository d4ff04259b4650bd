//! Built-in sorting functions.

use std::cmp::Ordering;
use std::sync::{Arc, LazyLock};

use crate::value::CellValue;

use super::{SortingFn, SortingFns};

static SORTING_FNS: LazyLock<Arc<SortingFns>> = LazyLock::new(|| {
    let entries = [
        ("alphanumeric", Arc::new(alphanumeric) as SortingFn),
        (
            "alphanumericCaseSensitive",
            Arc::new(alphanumeric_case_sensitive) as SortingFn,
        ),
        ("basic", Arc::new(basic) as SortingFn),
        ("datetime", Arc::new(datetime) as SortingFn),
        ("fuzzy", Arc::new(fuzzy) as SortingFn),
        ("text", Arc::new(text) as SortingFn),
        ("textCaseSensitive", Arc::new(text_case_sensitive) as SortingFn),
    ];
    Arc::new(entries.into_iter().collect())
});

/// The built-in sorting functions.
pub fn sorting_fns() -> Arc<SortingFns> {
    Arc::clone(&SORTING_FNS)
}

/// Natural ordering ignoring case: `"row2" < "row10"`.
pub fn alphanumeric(a: &CellValue, b: &CellValue) -> Ordering {
    natural_cmp(&a.to_string().to_lowercase(), &b.to_string().to_lowercase())
}

/// Natural ordering with case: `"B" < "a"`.
pub fn alphanumeric_case_sensitive(a: &CellValue, b: &CellValue) -> Ordering {
    natural_cmp(&a.to_string(), &b.to_string())
}

/// Plain text ordering ignoring case.
pub fn text(a: &CellValue, b: &CellValue) -> Ordering {
    a.normalized_text().cmp(&b.normalized_text())
}

/// Plain text ordering with case.
pub fn text_case_sensitive(a: &CellValue, b: &CellValue) -> Ordering {
    a.to_string().cmp(&b.to_string())
}

/// Chronological ordering. Values that aren't timestamps sort first.
pub fn datetime(a: &CellValue, b: &CellValue) -> Ordering {
    a.as_datetime().cmp(&b.as_datetime())
}

/// Numbers numerically, everything else as text.
pub fn basic(a: &CellValue, b: &CellValue) -> Ordering {
    a.loose_cmp(b)
}

/// Ordering used for columns sorted by fuzzy rank.
///
/// Rank ordering happens where the filter scores are known; between two
/// equally ranked rows this falls back to [`alphanumeric`].
pub fn fuzzy(a: &CellValue, b: &CellValue) -> Ordering {
    alphanumeric(a, b)
}

/// Compare strings treating runs of ASCII digits as numbers.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a_chunks = chunks(a);
    let mut b_chunks = chunks(b);
    loop {
        match (a_chunks.next(), b_chunks.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (is_digits(x), is_digits(y)) {
                    (true, true) => {
                        let x = x.trim_start_matches('0');
                        let y = y.trim_start_matches('0');
                        x.len().cmp(&y.len()).then_with(|| x.cmp(y))
                    }
                    // Numbers sort before text.
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    (false, false) => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Split into maximal runs of digits and non-digits.
fn chunks(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digit = first.is_ascii_digit();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digit)
            .map_or(rest.len(), |(i, _)| i);
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_cmp() {
        assert_eq!(natural_cmp("row2", "row10"), Ordering::Less);
        assert_eq!(natural_cmp("row10", "row10"), Ordering::Equal);
        assert_eq!(natural_cmp("a", "a1"), Ordering::Less);
        assert_eq!(natural_cmp("007", "7"), Ordering::Equal);
        assert_eq!(natural_cmp("1abc", "abc"), Ordering::Less);
    }

    #[test]
    fn test_chunks() {
        let parts: Vec<&str> = chunks("ab12cd3").collect();
        assert_eq!(parts, vec!["ab", "12", "cd", "3"]);
    }
}
