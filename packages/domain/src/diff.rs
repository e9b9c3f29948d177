//! Line-level diff for template and draft version history.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    Same(String),
    Added(String),
    Removed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
}

/// Largest LCS table `line_diff` builds. Bigger changed regions are shown
/// as a block removal followed by a block addition.
pub const MAX_DIFF_CELLS: usize = 4_000_000;

/// Diff `old` against `new` line by line using a longest common subsequence.
/// Removals are emitted before additions within a changed run.
pub fn line_diff(old: &str, new: &str) -> Vec<DiffLine> {
    let a: Vec<&str> = old.lines().collect();
    let b: Vec<&str> = new.lines().collect();

    let prefix = a.iter().zip(&b).take_while(|(x, y)| x == y).count();
    let suffix = a[prefix..]
        .iter()
        .rev()
        .zip(b[prefix..].iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    let (a_mid, b_mid) = (&a[prefix..a.len() - suffix], &b[prefix..b.len() - suffix]);

    let mut out = Vec::with_capacity(a.len().max(b.len()));
    out.extend(a[..prefix].iter().map(|l| DiffLine::Same(l.to_string())));
    if a_mid.len().saturating_mul(b_mid.len()) > MAX_DIFF_CELLS {
        out.extend(a_mid.iter().map(|l| DiffLine::Removed(l.to_string())));
        out.extend(b_mid.iter().map(|l| DiffLine::Added(l.to_string())));
    } else {
        lcs_diff(a_mid, b_mid, &mut out);
    }
    out.extend(a[a.len() - suffix..].iter().map(|l| DiffLine::Same(l.to_string())));
    out
}

fn lcs_diff(a: &[&str], b: &[&str], out: &mut Vec<DiffLine>) {
    // lcs[i][j] = LCS length of a[i..] and b[j..]
    let mut lcs = vec![vec![0u32; b.len() + 1]; a.len() + 1];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            out.push(DiffLine::Same(a[i].to_string()));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            out.push(DiffLine::Removed(a[i].to_string()));
            i += 1;
        } else {
            out.push(DiffLine::Added(b[j].to_string()));
            j += 1;
        }
    }
    out.extend(a[i..].iter().map(|l| DiffLine::Removed(l.to_string())));
    out.extend(b[j..].iter().map(|l| DiffLine::Added(l.to_string())));
}

pub fn diff_stats(lines: &[DiffLine]) -> DiffStats {
    lines.iter().fold(DiffStats::default(), |mut stats, line| {
        match line {
            DiffLine::Added(_) => stats.added += 1,
            DiffLine::Removed(_) => stats.removed += 1,
            DiffLine::Same(_) => {}
        }
        stats
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts() {
        let diff = line_diff("a\nb", "a\nb");
        assert_eq!(diff, vec![DiffLine::Same("a".into()), DiffLine::Same("b".into())]);
        assert_eq!(diff_stats(&diff), DiffStats::default());
    }

    #[test]
    fn test_changed_middle_line() {
        let diff = line_diff("hello\nold line\nbye", "hello\nnew line\nbye");
        assert_eq!(
            diff,
            vec![
                DiffLine::Same("hello".into()),
                DiffLine::Removed("old line".into()),
                DiffLine::Added("new line".into()),
                DiffLine::Same("bye".into()),
            ]
        );
        assert_eq!(diff_stats(&diff), DiffStats { added: 1, removed: 1 });
    }

    #[test]
    fn test_append_and_empty_sides() {
        assert_eq!(line_diff("", "x"), vec![DiffLine::Added("x".into())]);
        assert_eq!(line_diff("x", ""), vec![DiffLine::Removed("x".into())]);
        let diff = line_diff("a", "a\nb");
        assert_eq!(diff_stats(&diff), DiffStats { added: 1, removed: 0 });
    }

    #[test]
    fn test_large_rewrite_falls_back_to_block_replace() {
        let old: String = (0..2500).map(|i| format!("old {i}\n")).collect();
        let new: String = (0..2500).map(|i| format!("new {i}\n")).collect();
        let old = format!("title\n{old}end");
        let new = format!("title\n{new}end");

        let diff = line_diff(&old, &new);
        assert_eq!(diff.first(), Some(&DiffLine::Same("title".into())));
        assert_eq!(diff.last(), Some(&DiffLine::Same("end".into())));
        assert_eq!(diff[1], DiffLine::Removed("old 0".into()));
        assert_eq!(diff[2501], DiffLine::Added("new 0".into()));
        assert_eq!(diff_stats(&diff), DiffStats { added: 2500, removed: 2500 });
    }
}
