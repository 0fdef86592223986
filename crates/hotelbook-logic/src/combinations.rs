//! k-subset enumeration in "exclude-then-include" order.
//!
//! The cross-floor search walks every `k`-subset of the available rooms.
//! Ties are broken by whichever subset is seen first, so the walk order is
//! part of the allocator's contract: it must match a recursive scan that,
//! for each element in turn, explores the subsets *without* it before the
//! subsets *with* it.
//!
//! That order is the descending lexicographic order of sorted index tuples.
//! For `n = 4, k = 2`:
//!
//! ```text
//! [2,3] [1,3] [1,2] [0,3] [0,2] [0,1]
//! ```
//!
//! [`ExcludeFirstCombinations`] produces it iteratively with a single
//! reused buffer, stepping each tuple to its lexicographic predecessor.
//!
//! ```
//! use hotelbook_logic::combinations::ExcludeFirstCombinations;
//!
//! let mut combos = ExcludeFirstCombinations::new(3, 2);
//! assert_eq!(combos.advance(), Some(&[1, 2][..]));
//! assert_eq!(combos.advance(), Some(&[0, 2][..]));
//! assert_eq!(combos.advance(), Some(&[0, 1][..]));
//! assert_eq!(combos.advance(), None);
//! ```

/// `C(n, k)`, saturating at `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u64 = 1;
    for i in 0..k {
        // acc * (n - i) / (i + 1) stays integral at every step
        acc = match acc.checked_mul((n - i) as u64) {
            Some(v) => v / (i as u64 + 1),
            None => return u64::MAX,
        };
    }
    acc
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Fresh,
    Active,
    Done,
}

/// Iterative generator of index subsets of `0..n` with `k` elements.
#[derive(Debug, Clone)]
pub struct ExcludeFirstCombinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    cursor: Cursor,
}

impl ExcludeFirstCombinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: Vec::with_capacity(k),
            cursor: Cursor::Fresh,
        }
    }

    /// Number of subsets the full walk yields.
    pub fn len(&self) -> u64 {
        binomial(self.n, self.k)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Step to the next subset and return its ascending indices.
    pub fn advance(&mut self) -> Option<&[usize]> {
        match self.cursor {
            Cursor::Done => return None,
            Cursor::Fresh => {
                if self.k > self.n {
                    self.cursor = Cursor::Done;
                    return None;
                }
                self.indices.clear();
                self.indices.extend(self.n - self.k..self.n);
                self.cursor = Cursor::Active;
            }
            Cursor::Active => {
                if !self.step_back() {
                    self.cursor = Cursor::Done;
                    return None;
                }
            }
        }
        Some(self.indices.as_slice())
    }

    /// Replace `indices` with its lexicographic predecessor.
    fn step_back(&mut self) -> bool {
        let base = self.n - self.k;
        for j in (0..self.k).rev() {
            let floor = if j == 0 { 0 } else { self.indices[j - 1] + 1 };
            if self.indices[j] > floor {
                self.indices[j] -= 1;
                for i in j + 1..self.k {
                    self.indices[i] = base + i;
                }
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference: recursive binary choice, exclusion explored first.
    fn recursive_order(n: usize, k: usize) -> Vec<Vec<usize>> {
        fn walk(i: usize, n: usize, k: usize, chosen: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
            if chosen.len() == k {
                out.push(chosen.clone());
                return;
            }
            if i == n {
                return;
            }
            walk(i + 1, n, k, chosen, out);
            chosen.push(i);
            walk(i + 1, n, k, chosen, out);
            chosen.pop();
        }
        let mut out = Vec::new();
        walk(0, n, k, &mut Vec::new(), &mut out);
        out
    }

    fn collect(n: usize, k: usize) -> Vec<Vec<usize>> {
        let mut combos = ExcludeFirstCombinations::new(n, k);
        let mut out = Vec::new();
        while let Some(c) = combos.advance() {
            out.push(c.to_vec());
        }
        out
    }

    #[test]
    fn test_matches_recursive_order() {
        for n in 0..=8 {
            for k in 0..=5 {
                assert_eq!(collect(n, k), recursive_order(n, k), "n={} k={}", n, k);
            }
        }
    }

    #[test]
    fn test_four_choose_two_order() {
        assert_eq!(
            collect(4, 2),
            vec![
                vec![2, 3],
                vec![1, 3],
                vec![1, 2],
                vec![0, 3],
                vec![0, 2],
                vec![0, 1]
            ]
        );
    }

    #[test]
    fn test_k_larger_than_n_yields_nothing() {
        let mut combos = ExcludeFirstCombinations::new(2, 3);
        assert!(combos.is_empty());
        assert_eq!(combos.advance(), None);
        assert_eq!(combos.advance(), None);
    }

    #[test]
    fn test_empty_subset_yielded_once() {
        assert_eq!(collect(5, 0), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(40, 5), 658_008);
        assert_eq!(binomial(97, 5), 64_446_024);
        assert_eq!(binomial(3, 4), 0);
        assert_eq!(binomial(7, 0), 1);
    }

    #[test]
    fn test_len_matches_walk() {
        for (n, k) in [(10, 3), (12, 5), (6, 6)] {
            assert_eq!(collect(n, k).len() as u64, ExcludeFirstCombinations::new(n, k).len());
        }
    }
}
