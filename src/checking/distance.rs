/// Damerau-Levenshtein edit distance between two strings, counted in
/// chars. Insertions, deletions, substitutions, and transpositions of
/// adjacent characters each cost 1. This is the classic dynamic
/// programming matrix with the transposition relaxation looking at the
/// diagonal two steps back when the two preceding characters are swapped.
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a
        .chars()
        .collect();
    let b: Vec<char> = b
        .chars()
        .collect();

    let m = a.len();
    let n = b.len();

    let mut d = vec![vec![0; n + 1]; m + 1];

    for (i, row) in d
        .iter_mut()
        .enumerate()
    {
        row[0] = i;
    }
    for j in 0..=n {
        d[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };

            let mut best = (d[i - 1][j] + 1) // deletion
                .min(d[i][j - 1] + 1) // insertion
                .min(d[i - 1][j - 1] + cost); // substitution

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(d[i - 2][j - 2] + 1); // transposition
            }

            d[i][j] = best;
        }
    }

    d[m][n]
}
