//! Longest-common-subsequence alignment
//!
//! Shared by the line pass and the token pass: build the LCS length table,
//! then walk it back from the bottom-right corner into an edit script.

/// One step of an edit script over two sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// `a[a] == b[b]`, both sides advance
    Keep { a: usize, b: usize },
    /// Element only present in the first sequence
    Delete(usize),
    /// Element only present in the second sequence
    Insert(usize),
}

/// LCS length table of size `(m + 1) x (n + 1)`, stored row-major.
///
/// `get(i, j)` is the LCS length of `a[..i]` and `b[..j]`.
struct LcsTable {
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let cols = b.len() + 1;
        let mut table = Self {
            cols,
            cells: vec![0; (a.len() + 1) * cols],
        };

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let value = if a[i - 1] == b[j - 1] {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i - 1, j).max(table.get(i, j - 1))
                };
                table.cells[i * cols + j] = value;
            }
        }

        table
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }
}

/// Compute the edit script turning `a` into `b`, in forward order.
///
/// Backtracking prefers `Delete` whenever both neighbours carry the same
/// LCS length. Output ordering depends on it.
pub(crate) fn edit_script<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Step> {
    let table = LcsTable::build(a, b);
    let mut steps = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (a.len(), b.len());

    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            steps.push(Step::Keep { a: i - 1, b: j - 1 });
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) >= table.get(i, j - 1) {
            steps.push(Step::Delete(i - 1));
            i -= 1;
        } else {
            steps.push(Step::Insert(j - 1));
            j -= 1;
        }
    }
    while i > 0 {
        steps.push(Step::Delete(i - 1));
        i -= 1;
    }
    while j > 0 {
        steps.push(Step::Insert(j - 1));
        j -= 1;
    }

    steps.reverse();
    steps
}

/// Length of the longest common subsequence (test-only helper)
#[cfg(test)]
pub(crate) fn lcs_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    LcsTable::build(a, b).get(a.len(), b.len())
}
