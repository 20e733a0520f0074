//! Levenshtein distance, its operation trace, and column alignment.

/// One step of an edit trace, read as "how `input` diverges from `target`".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStep {
    Match { input: usize, target: usize },
    Substitute { input: usize, target: usize },
    /// `input[input]` has no counterpart in the target.
    Extra { input: usize },
    /// `target[target]` is absent from the input; `input` is where it belongs.
    Missing { input: usize, target: usize },
}

/// An aligned pair of characters, or a gap opposite an unmatched one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Pair(char, char),
    Gap,
}

/// Classic edit distance with unit insert/delete/substitute costs.
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Full distance matrix in row-major order: `cell(i, j)` is the distance of
/// `a[..i]` to `b[..j]`.
struct Matrix {
    cells: Vec<usize>,
    width: usize,
}

impl Matrix {
    fn build(a: &[char], b: &[char]) -> Self {
        let width = b.len() + 1;
        let mut cells = vec![0; (a.len() + 1) * width];
        for (j, cell) in cells[..width].iter_mut().enumerate() {
            *cell = j;
        }

        for (i, ca) in a.iter().enumerate() {
            let (done, rest) = cells.split_at_mut((i + 1) * width);
            let prev = &done[i * width..];
            let curr = &mut rest[..width];
            curr[0] = i + 1;
            for (j, cb) in b.iter().enumerate() {
                let cost = usize::from(ca != cb);
                curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
            }
        }

        Self { cells, width }
    }

    fn cell(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }
}

/// Minimal edit trace from `target` to `input`, in reading order.
///
/// On ties the backtrace prefers the diagonal, then a missing character,
/// then an extra one, so the trace is deterministic.
pub fn edit_trace(input: &[char], target: &[char]) -> Vec<EditStep> {
    let m = Matrix::build(input, target);
    let (mut i, mut j) = (input.len(), target.len());
    let mut steps = Vec::with_capacity(i.max(j));

    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let same = input[i - 1] == target[j - 1];
            if m.cell(i, j) == m.cell(i - 1, j - 1) + usize::from(!same) {
                let (input, target) = (i - 1, j - 1);
                steps.push(if same {
                    EditStep::Match { input, target }
                } else {
                    EditStep::Substitute { input, target }
                });
                i -= 1;
                j -= 1;
                continue;
            }
        }

        if j > 0 && m.cell(i, j) == m.cell(i, j - 1) + 1 {
            steps.push(EditStep::Missing {
                input: i,
                target: j - 1,
            });
            j -= 1;
        } else {
            steps.push(EditStep::Extra { input: i - 1 });
            i -= 1;
        }
    }

    steps.reverse();
    steps
}

/// Aligns two strings for per-column comparison.
///
/// Equal lengths compare position by position. Unequal lengths follow the
/// [`edit_trace`], with a [`Column::Gap`] for every unmatched character.
pub fn align(a: &[char], b: &[char]) -> Vec<Column> {
    if a.len() == b.len() {
        return a
            .iter()
            .zip(b)
            .map(|(&x, &y)| Column::Pair(x, y))
            .collect();
    }

    edit_trace(a, b)
        .into_iter()
        .map(|step| match step {
            EditStep::Match { input, target } | EditStep::Substitute { input, target } => {
                Column::Pair(a[input], b[target])
            }
            EditStep::Extra { .. } | EditStep::Missing { .. } => Column::Gap,
        })
        .collect()
}
