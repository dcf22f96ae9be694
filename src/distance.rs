//! Levenshtein edit distance over Unicode scalar values.

/// Minimum number of single-character insertions, deletions or substitutions
/// turning `a` into `b`.
pub fn distance(a: &str, b: &str) -> usize {
    bounded_levenshtein(a, b, usize::MAX)
}

/// Edit distance between `a` and `b` if it is at most `max_dist`.
///
/// Gives up as soon as a whole row of the table exceeds `max_dist`, so
/// rejecting a far-away candidate is usually much cheaper than computing
/// its full distance.
pub fn distance_within(a: &str, b: &str, max_dist: usize) -> Option<usize> {
    let dist = bounded_levenshtein(a, b, max_dist);
    (dist <= max_dist).then_some(dist)
}

/// Two-row Levenshtein. Returns `max_dist + 1` (saturating) once the
/// distance is known to exceed `max_dist`.
fn bounded_levenshtein(a: &str, b: &str, max_dist: usize) -> usize {
    let over = max_dist.saturating_add(1);
    let (a_len, b_len) = (a.chars().count(), b.chars().count());
    let (shorter, longer) = if a_len <= b_len { (a, b) } else { (b, a) };
    if a_len.abs_diff(b_len) > max_dist {
        return over;
    }

    // Columns run over the shorter string so the rows stay O(min(len)).
    let short: Vec<char> = shorter.chars().collect();
    let n = short.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, lc) in longer.chars().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];

        for (j, &sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            let ins = curr[j] + 1;
            let del = prev[j + 1] + 1;
            let sub = prev[j] + cost;
            curr[j + 1] = ins.min(del).min(sub);
            row_min = row_min.min(curr[j + 1]);
        }

        if row_min > max_dist {
            return over;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    if prev[n] > max_dist { over } else { prev[n] }
}
