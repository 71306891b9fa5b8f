//! "Did you mean?" suggestions for misspelled command names.

/// Levenshtein edit distance, two-row variant.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_len = b.chars().count();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b.chars().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + cost); // substitution
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

/// How many edits still count as a typo, by name length.
fn threshold(name_len: usize) -> usize {
    match name_len {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=10 => 3,
        n => (n / 2).min(5),
    }
}

/// The closest candidate within the typo threshold, if any.
///
/// Ties keep the earliest candidate, so callers control preference by order.
pub fn suggest_similar<'a>(
    name: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    let limit = threshold(name.len());
    let mut best: Option<(&str, usize)> = None;

    for candidate in candidates {
        if name.len().abs_diff(candidate.len()) > limit {
            continue;
        }
        let distance = edit_distance(name, candidate);
        if distance <= limit && !matches!(best, Some((_, d)) if distance >= d) {
            best = Some((candidate, distance));
        }
    }

    best.map(|(s, _)| s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("move", "move"), 0);
        assert_eq!(edit_distance("", "wait"), 4);
        assert_eq!(edit_distance("wait", ""), 4);
    }

    #[test]
    fn finds_close_command() {
        let commands = ["attack", "charge_attack", "move", "defend"];
        assert_eq!(suggest_similar("atack", commands.into_iter()), Some("attack"));
        assert_eq!(suggest_similar("defnd", commands.into_iter()), Some("defend"));
    }

    #[test]
    fn ignores_unrelated_names() {
        let commands = ["attack", "move"];
        assert_eq!(suggest_similar("xyzzy", commands.into_iter()), None);
        assert_eq!(suggest_similar("", commands.into_iter()), None);
    }
}
