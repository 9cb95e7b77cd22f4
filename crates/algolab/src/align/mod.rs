//! Needleman-Wunsch global sequence alignment, O(nm).
//!
//! Fills the full (n+1) x (m+1) score matrix, then traces one optimal
//! alignment back from the corner. Traceback prefers diagonal, then up,
//! then left, so the reported alignment is deterministic.

use nalgebra::DMatrix;

/// Scoring parameters. Defaults are the classic (+1, -1, -2).
#[derive(Clone, Copy, Debug)]
pub struct ScoreCfg {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_score: i32,
}

impl Default for ScoreCfg {
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch_score: -1,
            gap_score: -2,
        }
    }
}

/// One optimal global alignment. Stripping `-` from `top` (resp. `bottom`)
/// restores the first (resp. second) input sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub top: String,
    pub bottom: String,
    pub score: i32,
}

#[inline]
fn pair_score(a: char, b: char, cfg: ScoreCfg) -> i32 {
    if a == b {
        cfg.match_score
    } else {
        cfg.mismatch_score
    }
}

/// Align `s1` against `s2` globally. Returns the filled score matrix
/// (rows follow `s1`, columns follow `s2`) and one optimal alignment.
pub fn global_align(s1: &str, s2: &str, cfg: ScoreCfg) -> (DMatrix<i32>, Alignment) {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let n = a.len();
    let m = b.len();

    let mut f = DMatrix::<i32>::zeros(n + 1, m + 1);
    for i in 1..=n {
        f[(i, 0)] = f[(i - 1, 0)] + cfg.gap_score;
    }
    for j in 1..=m {
        f[(0, j)] = f[(0, j - 1)] + cfg.gap_score;
    }
    for i in 1..=n {
        for j in 1..=m {
            let diag = f[(i - 1, j - 1)] + pair_score(a[i - 1], b[j - 1], cfg);
            let up = f[(i - 1, j)] + cfg.gap_score;
            let left = f[(i, j - 1)] + cfg.gap_score;
            f[(i, j)] = diag.max(up).max(left);
        }
    }

    let mut top = Vec::new();
    let mut bottom = Vec::new();
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        let cur = f[(i, j)];
        if i > 0 && j > 0 && cur == f[(i - 1, j - 1)] + pair_score(a[i - 1], b[j - 1], cfg) {
            top.push(a[i - 1]);
            bottom.push(b[j - 1]);
            i -= 1;
            j -= 1;
        } else if i > 0 && cur == f[(i - 1, j)] + cfg.gap_score {
            top.push(a[i - 1]);
            bottom.push('-');
            i -= 1;
        } else {
            top.push('-');
            bottom.push(b[j - 1]);
            j -= 1;
        }
    }
    top.reverse();
    bottom.reverse();

    let alignment = Alignment {
        top: top.into_iter().collect(),
        bottom: bottom.into_iter().collect(),
        score: f[(n, m)],
    };
    (f, alignment)
}

/// Labelled rendering of the score matrix for terminal output.
pub fn format_matrix(f: &DMatrix<i32>, s1: &str, s2: &str) -> String {
    let row_labels: Vec<char> = std::iter::once('_').chain(s1.chars()).collect();
    let col_labels: Vec<char> = std::iter::once('_').chain(s2.chars()).collect();

    let w = f
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1)
        .max(2);

    let mut lines = Vec::with_capacity(f.nrows() + 1);
    let header: Vec<String> = col_labels.iter().map(|c| format!("{c:>w$}")).collect();
    lines.push(format!("{:w$} {}", "", header.join(" ")));
    for i in 0..f.nrows() {
        let cells: Vec<String> = (0..f.ncols()).map(|j| format!("{:>w$}", f[(i, j)])).collect();
        lines.push(format!("{:>w$} {}", row_labels[i], cells.join(" ")));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recompute_score(al: &Alignment, cfg: ScoreCfg) -> i32 {
        al.top
            .chars()
            .zip(al.bottom.chars())
            .map(|(x, y)| {
                if x == '-' || y == '-' {
                    cfg.gap_score
                } else {
                    pair_score(x, y, cfg)
                }
            })
            .sum()
    }

    #[test]
    fn identical_sequences_align_without_gaps() {
        let (f, al) = global_align("ACGT", "ACGT", ScoreCfg::default());
        assert_eq!(al.top, "ACGT");
        assert_eq!(al.bottom, "ACGT");
        assert_eq!(al.score, 4);
        assert_eq!(f[(4, 4)], 4);
    }

    #[test]
    fn single_mismatch_beats_two_gaps() {
        // One mismatch costs -1; routing around it needs two gaps at -2 each.
        let (_, al) = global_align("ACGT", "ACCT", ScoreCfg::default());
        assert_eq!(al.score, 2);
        assert_eq!(al.top.len(), 4);
    }

    #[test]
    fn empty_side_is_all_gaps() {
        let cfg = ScoreCfg::default();
        let (f, al) = global_align("AAA", "", cfg);
        assert_eq!(al.top, "AAA");
        assert_eq!(al.bottom, "---");
        assert_eq!(al.score, 3 * cfg.gap_score);
        assert_eq!(f.nrows(), 4);
        assert_eq!(f.ncols(), 1);

        let (_, al) = global_align("", "G", cfg);
        assert_eq!(al.top, "-");
        assert_eq!(al.bottom, "G");
        assert_eq!(al.score, cfg.gap_score);
    }

    #[test]
    fn alignment_restores_inputs_and_score_is_consistent() {
        let cfg = ScoreCfg::default();
        for (s1, s2) in [("GATTACA", "GCATGCU"), ("ACGT", "ACCT"), ("ATGCT", "AGCT")] {
            let (f, al) = global_align(s1, s2, cfg);
            assert_eq!(al.top.len(), al.bottom.len());
            assert_eq!(al.top.replace('-', ""), s1);
            assert_eq!(al.bottom.replace('-', ""), s2);
            assert_eq!(al.score, f[(s1.len(), s2.len())]);
            assert_eq!(al.score, recompute_score(&al, cfg));
        }
    }

    #[test]
    fn matrix_rendering_is_labelled() {
        let (f, _) = global_align("AG", "A", ScoreCfg::default());
        let text = format_matrix(&f, "AG", "A");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].trim_start().starts_with('_'));
        assert!(lines[2].trim_start().starts_with('A'));
        assert!(lines[3].trim_start().starts_with('G'));
    }
}
