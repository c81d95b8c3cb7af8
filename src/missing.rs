//! Compact encoding of missed line numbers.
//!
//! Zero-hit lines `[1, 2, 5, 6, 7, 10]` become `["1-2", "5-7", "10"]`.

use log::warn;

use crate::document::Element;

/// Read the leading integer of an attribute, ignoring anything after it, so
/// `"0.0"` reads as 0 and `"12 "` as 12.
fn parse_int(element: &Element, attr: &str) -> Option<i64> {
    let value = element.attr(attr)?.trim_start();
    let sign_len = usize::from(value.starts_with(['-', '+']));
    let digits_len = value[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len() - sign_len);
    if digits_len == 0 {
        return None;
    }
    value[..sign_len + digits_len].parse().ok()
}

/// Line numbers of the records whose `hits` is exactly zero, in input order.
///
/// Records whose `number` cannot be read are skipped.
pub fn unhit_lines<'a>(lines: impl IntoIterator<Item = &'a Element>) -> Vec<u32> {
    lines
        .into_iter()
        .filter(|line| parse_int(line, "hits") == Some(0))
        .filter_map(|line| {
            let number = parse_int(line, "number").and_then(|n| u32::try_from(n).ok());
            if number.is_none() {
                warn!(
                    "Skipping unhit line with invalid number {:?}",
                    line.attr("number")
                );
            }
            number
        })
        .collect()
}

fn interval_token(begin: u32, end: u32) -> String {
    if begin == end {
        begin.to_string()
    } else {
        format!("{}-{}", begin, end)
    }
}

/// Group ascending line numbers into maximal contiguous runs.
///
/// The input is not sorted here; callers pass numbers in document order.
#[must_use]
pub fn missing_lines(numbers: &[u32]) -> Vec<String> {
    let mut intervals = Vec::new();
    // (begin, prev) of the run being built
    let mut run: Option<(u32, u32)> = None;

    for &number in numbers {
        run = match run {
            None => Some((number, number)),
            Some((begin, prev)) if prev.checked_add(1) == Some(number) => Some((begin, number)),
            Some((begin, prev)) => {
                intervals.push(interval_token(begin, prev));
                Some((number, number))
            }
        };
    }
    if let Some((begin, prev)) = run {
        intervals.push(interval_token(begin, prev));
    }

    intervals
}

/// Missed-line tokens for a class's `line` records.
pub fn generate_missing<'a>(lines: impl IntoIterator<Item = &'a Element>) -> Vec<String> {
    missing_lines(&unhit_lines(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(number: &str, hits: &str) -> Element {
        Element::new()
            .with_attr("number", number)
            .with_attr("hits", hits)
    }

    /// Turn tokens back into the line numbers they cover.
    fn expand(tokens: &[String]) -> Vec<u32> {
        tokens
            .iter()
            .flat_map(|token| match token.split_once('-') {
                Some((a, b)) => (a.parse::<u32>().unwrap()..=b.parse::<u32>().unwrap()).collect(),
                None => vec![token.parse::<u32>().unwrap()],
            })
            .collect()
    }

    #[test]
    fn test_missing_lines_examples() {
        assert!(missing_lines(&[]).is_empty());
        assert_eq!(missing_lines(&[1]), vec!["1"]);
        assert_eq!(missing_lines(&[1, 2, 3]), vec!["1-3"]);
        assert_eq!(
            missing_lines(&[1, 2, 5, 6, 7, 10]),
            vec!["1-2", "5-7", "10"]
        );
    }

    #[test]
    fn test_isolated_lines_after_a_run_are_kept() {
        assert_eq!(missing_lines(&[1, 2, 5]), vec!["1-2", "5"]);
        assert_eq!(missing_lines(&[3, 5, 7]), vec!["3", "5", "7"]);
        assert_eq!(missing_lines(&[4, 9, 10]), vec!["4", "9-10"]);
    }

    #[test]
    fn test_no_overflow_at_upper_bound() {
        assert_eq!(
            missing_lines(&[u32::MAX - 1, u32::MAX]),
            vec![format!("{}-{}", u32::MAX - 1, u32::MAX)]
        );
    }

    #[test]
    fn test_tokens_reexpand_to_input_and_are_maximal() {
        let inputs: Vec<Vec<u32>> = vec![
            vec![1, 2, 3, 4],
            vec![2, 4, 6, 8],
            vec![1, 3, 4, 5, 9, 10, 12, 20, 21, 22, 23],
            vec![100],
            vec![7, 8, 10, 11, 13],
        ];
        for input in inputs {
            let tokens = missing_lines(&input);
            assert_eq!(expand(&tokens), input, "tokens {tokens:?}");

            // Adjacent tokens must leave a gap, or they would have merged.
            for pair in tokens.windows(2) {
                let left_end = *expand(&pair[..1]).last().unwrap();
                let right_start = expand(&pair[1..])[0];
                assert!(right_start > left_end + 1, "{pair:?} could merge");
            }
        }
    }

    #[test]
    fn test_unhit_lines_filters_on_zero_hits() {
        let lines = vec![
            line("1", "1"),
            line("2", "0"),
            line("3", "0"),
            line("4", "12"),
            line("5", "0"),
        ];
        assert_eq!(unhit_lines(&lines), vec![2, 3, 5]);
        assert_eq!(generate_missing(&lines), vec!["2-3", "5"]);
    }

    #[test]
    fn test_unhit_lines_skips_unreadable_records() {
        let lines = vec![
            line("1", "0"),
            line("x", "0"),
            line("3", "abc"),
            Element::new().with_attr("number", "4"),
        ];
        assert_eq!(unhit_lines(&lines), vec![1]);
    }

    #[test]
    fn test_leading_integer_is_read() {
        let lines = vec![
            line("1", "0.0"),
            line("2", "0"),
            line("3", "-0"),
            line(" 4", "0 "),
            line("5.0", "0"),
            line("6", "0.5"),
            line("8", "1e3"),
            line("-9", "0"),
        ];
        assert_eq!(unhit_lines(&lines), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(generate_missing(&lines), vec!["1-6"]);
    }

    #[test]
    fn test_document_order_is_preserved() {
        let lines = vec![line("9", "0"), line("3", "0"), line("4", "0")];
        assert_eq!(generate_missing(&lines), vec!["9", "3-4"]);
    }
}
