//! The divide-and-conquer engine and the public `Aligner` facade.
//!
//! The recursion follows Hirschberg (1975) and Myers & Miller (1988): a forward sweep
//! to the midpoint row, a reverse sweep from the opposite end, and a recursion on the
//! two halves joined at the optimal column. Gap costs differ by which sequence the gap
//! falls in (query = A, target = B) and by position class (left end, interior, right
//! end), so the midpoint search considers both a clean diagonal split (`P0`) and a
//! split inside a length->=2 gap in B (`P1`).

use log::{debug, trace};

use crate::alphabet::code_of;
use crate::cigar::{self, CigarBuilder, CigarOp};
use crate::errors::AlignError;
use crate::scoring::{PositionClass, ScoreMatrix, Scoring, Side};

/// A sentinel standing in for negative infinity, with enough headroom that
/// `sentinel - gap_open - gap_extend` never underflows for realistic gap costs.
const NEG_INF: i64 = i64::MIN / 2;

fn subst_score(matrix: &ScoreMatrix, a_byte: u8, b_byte: u8) -> i64 {
    matrix.score(code_of(a_byte), code_of(b_byte))
}

/// Alignment statistics recomputed from a CIGAR string against the original sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignStats {
    /// The alignment score the CIGAR implies under this aligner's scoring
    pub score: i64,
    /// Total number of aligned columns (M + I + D positions)
    pub length: i64,
    /// Number of `M` columns where the codes are ambiguity-compatible
    pub matches: i64,
    /// Number of `M` columns where the codes are not ambiguity-compatible
    pub mismatches: i64,
    /// Number of gap runs (I or D tokens), not gap positions
    pub gaps: i64,
}

/// A linear-space global pairwise aligner over the IUPAC nucleotide alphabet.
///
/// One instance owns its substitution matrix, scratch vectors and CIGAR buffer, and is
/// meant to be reused across many [`align`](Aligner::align) calls; `align` resets the
/// CIGAR and grows scratch as needed but never rebuilds the substitution matrix.
/// Concurrent calls on the same instance are not supported; independent instances share
/// no state and may run in parallel.
pub struct Aligner {
    scoring: Scoring,
    n_as_mismatch: bool,
    matrix: ScoreMatrix,
    cigar: CigarBuilder,
    hh: Vec<i64>,
    ee: Vec<i64>,
    xx: Vec<i64>,
    yy: Vec<i64>,
}

impl Aligner {
    /// Builds an aligner, constructing its 16x16 substitution matrix once from `scoring`
    /// and `n_as_mismatch`. The matrix is never regenerated by subsequent `align` calls.
    pub fn new(scoring: Scoring, n_as_mismatch: bool) -> Aligner {
        let matrix = ScoreMatrix::build(&scoring, n_as_mismatch);
        debug!("built substitution matrix (n_as_mismatch={n_as_mismatch})");
        Aligner {
            scoring,
            n_as_mismatch,
            matrix,
            cigar: CigarBuilder::new(),
            hh: Vec::new(),
            ee: Vec::new(),
            xx: Vec::new(),
            yy: Vec::new(),
        }
    }

    fn grow_scratch(&mut self, n: usize) -> Result<(), AlignError> {
        if self.hh.len() >= n {
            return Ok(());
        }
        for v in [&mut self.hh, &mut self.ee, &mut self.xx, &mut self.yy] {
            let additional = n - v.len();
            v.try_reserve(additional).map_err(|_| AlignError::ScratchAllocation)?;
            v.resize(n, 0);
        }
        Ok(())
    }

    /// Computes the optimal global alignment of `a` against `b` and returns its CIGAR.
    ///
    /// Empty inputs yield `""` when both are empty, `D(a.len())` when only `b` is empty,
    /// and `I(b.len())` when only `a` is empty. The CIGAR buffer and scratch vectors are
    /// owned by this instance and reused on the next call; the scoring configuration is
    /// left untouched.
    pub fn align(&mut self, a: &[u8], b: &[u8]) -> Result<&str, AlignError> {
        let start = std::time::Instant::now();
        self.cigar.reset();
        self.grow_scratch(b.len() + 1)?;
        self.diff(
            a,
            b,
            0,
            0,
            a.len() as i64,
            b.len() as i64,
            false,
            false,
            true,
            true,
            true,
            true,
        );
        self.cigar.flush();
        trace!(
            "align: {}x{} -> {}-char CIGAR in {:?}",
            a.len(),
            b.len(),
            self.cigar.as_str().len(),
            start.elapsed()
        );
        Ok(self.cigar.as_str())
    }

    /// Recomputes score/length/matches/mismatches/gaps from `cigar` against `a` and `b`.
    ///
    /// `cigar` need not have been produced by `self`; any string obeying the grammar of
    /// [`cigar::parse`] is accepted, but a run that reads past the end of either sequence
    /// is reported as [`AlignError::CigarOutOfBounds`].
    pub fn alignstats(&self, cigar: &str, a: &[u8], b: &[u8]) -> Result<AlignStats, AlignError> {
        let tokens = cigar::parse(cigar)?;
        let n_tokens = tokens.len();

        let mut score = 0i64;
        let mut length = 0i64;
        let mut matches = 0i64;
        let mut mismatches = 0i64;
        let mut gaps = 0i64;
        let mut a_pos = 0usize;
        let mut b_pos = 0usize;

        for (idx, (count, op)) in tokens.into_iter().enumerate() {
            let is_last = idx + 1 == n_tokens;
            match op {
                CigarOp::Match => {
                    length += count;
                    for _ in 0..count {
                        if a_pos >= a.len() {
                            return Err(AlignError::CigarOutOfBounds { which: "a" });
                        }
                        if b_pos >= b.len() {
                            return Err(AlignError::CigarOutOfBounds { which: "b" });
                        }
                        let a_code = code_of(a[a_pos]);
                        let b_code = code_of(b[b_pos]);
                        score += self.matrix.score(a_code, b_code);
                        if self.n_as_mismatch && (a_code == 15 || b_code == 15) {
                            mismatches += 1;
                        } else if (a_code & b_code) != 0 {
                            matches += 1;
                        } else {
                            mismatches += 1;
                        }
                        a_pos += 1;
                        b_pos += 1;
                    }
                }
                CigarOp::Ins => {
                    if b_pos + count as usize > b.len() {
                        return Err(AlignError::CigarOutOfBounds { which: "b" });
                    }
                    let class = position_class(a_pos, b_pos, is_last);
                    let g = self.scoring.gap_open(Side::Query, class)
                        + count * self.scoring.gap_extend(Side::Query, class);
                    score -= g;
                    gaps += 1;
                    length += count;
                    b_pos += count as usize;
                }
                CigarOp::Del => {
                    if a_pos + count as usize > a.len() {
                        return Err(AlignError::CigarOutOfBounds { which: "a" });
                    }
                    let class = position_class(a_pos, b_pos, is_last);
                    let g = self.scoring.gap_open(Side::Target, class)
                        + count * self.scoring.gap_extend(Side::Target, class);
                    score -= g;
                    gaps += 1;
                    length += count;
                    a_pos += count as usize;
                }
            }
        }

        Ok(AlignStats { score, length, matches, mismatches, gaps })
    }

    /// Appends the optimal edit script for `A[a_start..a_start+a_len)` vs.
    /// `B[b_start..b_start+b_len)` to the CIGAR buffer.
    ///
    /// `gap_b_left`/`gap_b_right` say whether the outer alignment already opened a gap
    /// in B at this subproblem's left/right boundary (so no further open penalty is
    /// charged there); `a_left`/`a_right`/`b_left`/`b_right` say whether this subproblem
    /// touches the true outer end of A/B, selecting left/interior/right gap costs.
    #[allow(clippy::too_many_arguments)]
    fn diff(
        &mut self,
        a: &[u8],
        b: &[u8],
        a_start: i64,
        b_start: i64,
        a_len: i64,
        b_len: i64,
        gap_b_left: bool,
        gap_b_right: bool,
        a_left: bool,
        a_right: bool,
        b_left: bool,
        b_right: bool,
    ) {
        if b_len == 0 {
            if a_len > 0 {
                self.cigar.add(CigarOp::Del, a_len);
            }
            return;
        }
        if a_len == 0 {
            self.cigar.add(CigarOp::Ins, b_len);
            return;
        }
        if a_len == 1 {
            self.diff_single(
                a, b, a_start, b_start, b_len, gap_b_left, gap_b_right, a_left, a_right, b_left,
                b_right,
            );
            return;
        }
        self.diff_general(
            a, b, a_start, b_start, a_len, b_len, gap_b_left, gap_b_right, a_left, a_right,
            b_left, b_right,
        );
    }

    /// C3: aligns a single symbol from A against `b_len >= 1` symbols from B, by
    /// enumerating three placement families and picking the best (ties broken by
    /// evaluation order: delete-then-insert, then insert-then-delete, then each
    /// substitution position left to right).
    #[allow(clippy::too_many_arguments)]
    fn diff_single(
        &mut self,
        a: &[u8],
        b: &[u8],
        a_start: i64,
        b_start: i64,
        b_len: i64,
        gap_b_left: bool,
        gap_b_right: bool,
        a_left: bool,
        a_right: bool,
        b_left: bool,
        b_right: bool,
    ) {
        let sc = &self.scoring;
        let b_left_class = if b_left { PositionClass::Left } else { PositionClass::Interior };
        let b_right_class = if b_right { PositionClass::Right } else { PositionClass::Interior };
        let a_left_class = if a_left { PositionClass::Left } else { PositionClass::Interior };
        let a_right_class = if a_right { PositionClass::Right } else { PositionClass::Interior };

        // Possibility 1: delete A's symbol, then insert the b_len-run of B to its right.
        let mut score = 0i64;
        if !gap_b_left {
            score -= sc.gap_open(Side::Target, b_left_class);
        }
        score -= sc.gap_extend(Side::Target, b_left_class);
        score -= sc.gap_open(Side::Query, a_right_class) + b_len * sc.gap_extend(Side::Query, a_right_class);

        let mut max_score = score;
        let mut best: i64 = -1;

        // Possibility 2: insert the b_len-run of B, then delete A's symbol.
        let mut score = -(sc.gap_open(Side::Query, a_left_class) + b_len * sc.gap_extend(Side::Query, a_left_class));
        if !gap_b_right {
            score -= sc.gap_open(Side::Target, b_right_class);
        }
        score -= sc.gap_extend(Side::Target, b_right_class);
        if score > max_score {
            max_score = score;
            best = b_len;
        }

        // Possibility 3: match/mismatch A's symbol against B[i], with B's remainder
        // inserted on either side.
        for i in 0..b_len {
            let mut score = 0i64;
            if i > 0 {
                score -= sc.gap_open(Side::Query, a_left_class) + i * sc.gap_extend(Side::Query, a_left_class);
            }
            score += subst_score(&self.matrix, a[a_start as usize], b[(b_start + i) as usize]);
            if i < b_len - 1 {
                let rest = b_len - 1 - i;
                score -= sc.gap_open(Side::Query, a_right_class) + rest * sc.gap_extend(Side::Query, a_right_class);
            }
            if score > max_score {
                max_score = score;
                best = i;
            }
        }

        if best == -1 {
            self.cigar.add(CigarOp::Del, 1);
            self.cigar.add(CigarOp::Ins, b_len);
        } else if best == b_len {
            self.cigar.add(CigarOp::Ins, b_len);
            self.cigar.add(CigarOp::Del, 1);
        } else {
            if best > 0 {
                self.cigar.add(CigarOp::Ins, best);
            }
            self.cigar.add(CigarOp::Match, 1);
            if best < b_len - 1 {
                self.cigar.add(CigarOp::Ins, b_len - 1 - best);
            }
        }
    }

    /// C4: the general recursive case, `a_len >= 2, b_len >= 1`. Splits A at its
    /// midpoint, sweeps forward scores (`HH`/`EE`) from the left and reverse scores
    /// (`XX`/`YY`) from the right, and recurses on the two halves joined at whichever
    /// midpoint column scores best.
    #[allow(clippy::too_many_arguments)]
    fn diff_general(
        &mut self,
        a: &[u8],
        b: &[u8],
        a_start: i64,
        b_start: i64,
        a_len: i64,
        b_len: i64,
        gap_b_left: bool,
        gap_b_right: bool,
        a_left: bool,
        a_right: bool,
        b_left: bool,
        b_right: bool,
    ) {
        let split = a_len / 2;
        let bl = b_len as usize;

        // ---------- forward phase: HH/EE over A[0..split) vs B
        self.hh[0] = 0;
        self.ee[0] = 0;
        let a_left_class = if a_left { PositionClass::Left } else { PositionClass::Interior };
        for j in 1..=bl {
            self.hh[j] = -(self.scoring.gap_open(Side::Query, a_left_class)
                + (j as i64) * self.scoring.gap_extend(Side::Query, a_left_class));
            self.ee[j] = NEG_INF;
        }

        let b_left_class = if b_left { PositionClass::Left } else { PositionClass::Interior };
        let go_q_i = self.scoring.gap_open(Side::Query, PositionClass::Interior);
        let ge_q_i = self.scoring.gap_extend(Side::Query, PositionClass::Interior);
        let go_t_r = self.scoring.gap_open(Side::Target, PositionClass::Right);
        let ge_t_r = self.scoring.gap_extend(Side::Target, PositionClass::Right);
        let go_t_i = self.scoring.gap_open(Side::Target, PositionClass::Interior);
        let ge_t_i = self.scoring.gap_extend(Side::Target, PositionClass::Interior);

        for i in 1..=split {
            let mut p = self.hh[0];
            let open_b = if gap_b_left { 0 } else { self.scoring.gap_open(Side::Target, b_left_class) };
            let mut h = -(open_b + i * self.scoring.gap_extend(Side::Target, b_left_class));
            self.hh[0] = h;
            let mut f = NEG_INF;

            for j in 1..=bl {
                f = f.max(h - go_q_i) - ge_q_i;

                self.ee[j] = if b_right && j == bl {
                    self.ee[j].max(self.hh[j] - go_t_r) - ge_t_r
                } else {
                    self.ee[j].max(self.hh[j] - go_t_i) - ge_t_i
                };

                h = p + subst_score(&self.matrix, a[(a_start + i - 1) as usize], b[(b_start + j as i64 - 1) as usize]);
                h = h.max(f);
                h = h.max(self.ee[j]);
                p = self.hh[j];
                self.hh[j] = h;
            }
        }
        self.ee[0] = self.hh[0];

        // ---------- reverse phase: XX/YY over A[split..a_len) vs B, from the right end
        self.xx[0] = 0;
        self.yy[0] = 0;
        let a_right_class = if a_right { PositionClass::Right } else { PositionClass::Interior };
        for j in 1..=bl {
            self.xx[j] = -(self.scoring.gap_open(Side::Query, a_right_class)
                + (j as i64) * self.scoring.gap_extend(Side::Query, a_right_class));
            self.yy[j] = NEG_INF;
        }

        let b_right_class = if b_right { PositionClass::Right } else { PositionClass::Interior };
        let go_t_l = self.scoring.gap_open(Side::Target, PositionClass::Left);
        let ge_t_l = self.scoring.gap_extend(Side::Target, PositionClass::Left);

        let rev_len = a_len - split;
        for i in 1..=rev_len {
            let mut p = self.xx[0];
            let open_b = if gap_b_right { 0 } else { self.scoring.gap_open(Side::Target, b_right_class) };
            let mut h = -(open_b + i * self.scoring.gap_extend(Side::Target, b_right_class));
            self.xx[0] = h;
            let mut f = NEG_INF;

            for j in 1..=bl {
                f = f.max(h - go_q_i) - ge_q_i;

                self.yy[j] = if b_left && j == bl {
                    self.yy[j].max(self.xx[j] - go_t_l) - ge_t_l
                } else {
                    self.yy[j].max(self.xx[j] - go_t_i) - ge_t_i
                };

                h = p
                    + subst_score(
                        &self.matrix,
                        a[(a_start + a_len - i) as usize],
                        b[(b_start + b_len - j as i64) as usize],
                    );
                h = h.max(f);
                h = h.max(self.yy[j]);
                p = self.xx[j];
                self.xx[j] = h;
            }
        }
        self.yy[0] = self.xx[0];

        // ---------- midpoint selection
        let mut max_score0 = NEG_INF;
        let mut best0: i64 = -1;
        for k in 0..=bl {
            let score = self.hh[k] + self.xx[bl - k];
            if score > max_score0 {
                max_score0 = score;
                best0 = k as i64;
            }
        }

        let mut max_score1 = NEG_INF;
        let mut best1: i64 = -1;
        for k in 0..=bl {
            let g = if b_left && k == 0 {
                go_t_l
            } else if b_right && k == bl {
                go_t_r
            } else {
                go_t_i
            };
            let score = self.ee[k] + self.yy[bl - k] + g;
            if score > max_score1 {
                max_score1 = score;
                best1 = k as i64;
            }
        }

        let (split_inside_gap, best) = if max_score0 > max_score1 {
            (false, best0)
        } else if max_score1 > max_score0 {
            (true, best1)
        } else if best0 <= best1 {
            (false, best0)
        } else {
            (true, best1)
        };

        if !split_inside_gap {
            self.diff(
                a, b, a_start, b_start, split, best, gap_b_left, false, a_left, false, b_left,
                b_right && best == b_len,
            );
            self.diff(
                a,
                b,
                a_start + split,
                b_start + best,
                a_len - split,
                b_len - best,
                false,
                gap_b_right,
                false,
                a_right,
                b_left && best == 0,
                b_right,
            );
        } else {
            self.diff(
                a,
                b,
                a_start,
                b_start,
                split - 1,
                best,
                gap_b_left,
                true,
                a_left,
                false,
                b_left,
                b_right && best == b_len,
            );
            self.cigar.add(CigarOp::Del, 2);
            self.diff(
                a,
                b,
                a_start + split + 1,
                b_start + best,
                a_len - split - 1,
                b_len - best,
                true,
                gap_b_right,
                false,
                a_right,
                b_left && best == 0,
                b_right,
            );
        }
    }
}

fn position_class(a_pos: usize, b_pos: usize, is_last: bool) -> PositionClass {
    if a_pos == 0 && b_pos == 0 {
        PositionClass::Left
    } else if is_last {
        PositionClass::Right
    } else {
        PositionClass::Interior
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scoring() -> Scoring {
        // match=+2, mismatch=-4, all gap_open=4, all gap_extension=2
        Scoring::new(2, -4, 4, 4, 4, 4, 4, 4, 2, 2, 2, 2, 2, 2).unwrap()
    }

    fn aligner() -> Aligner {
        Aligner::new(scoring(), false)
    }

    #[test]
    fn empty_both_sides() {
        let mut al = aligner();
        assert_eq!(al.align(b"", b"").unwrap(), "");
    }

    #[test]
    fn empty_b_side() {
        let mut al = aligner();
        assert_eq!(al.align(b"AAAA", b"").unwrap(), "4D");
    }

    #[test]
    fn empty_a_side() {
        let mut al = aligner();
        assert_eq!(al.align(b"", b"AAAA").unwrap(), "4I");
    }

    #[test]
    fn identity_alignment() {
        let mut al = aligner();
        let cigar = al.align(b"ACGTACGT", b"ACGTACGT").unwrap().to_string();
        assert_eq!(cigar, "8M");
        let stats = al.alignstats(&cigar, b"ACGTACGT", b"ACGTACGT").unwrap();
        assert_eq!(stats.matches, 8);
        assert_eq!(stats.mismatches, 0);
        assert_eq!(stats.gaps, 0);
    }

    #[test]
    fn identity_single_symbol_has_no_count() {
        let mut al = aligner();
        assert_eq!(al.align(b"A", b"A").unwrap(), "M");
    }

    #[test]
    fn s1_identical_sequences() {
        let mut al = aligner();
        let cigar = al.align(b"ACGT", b"ACGT").unwrap().to_string();
        assert_eq!(cigar, "4M");
        let stats = al.alignstats(&cigar, b"ACGT", b"ACGT").unwrap();
        assert_eq!(stats.score, 8);
        assert_eq!(stats.matches, 4);
        assert_eq!(stats.mismatches, 0);
        assert_eq!(stats.gaps, 0);
    }

    #[test]
    fn s2_single_mismatch() {
        let mut al = aligner();
        let cigar = al.align(b"ACGT", b"AGGT").unwrap().to_string();
        assert_eq!(cigar, "4M");
        let stats = al.alignstats(&cigar, b"ACGT", b"AGGT").unwrap();
        assert_eq!(stats.score, 2);
        assert_eq!(stats.matches, 3);
        assert_eq!(stats.mismatches, 1);
        assert_eq!(stats.gaps, 0);
    }

    #[test]
    fn s3_single_gap_scores_non_positive() {
        let mut al = aligner();
        let cigar = al.align(b"ACGT", b"ACT").unwrap().to_string();
        let stats = al.alignstats(&cigar, b"ACGT", b"ACT").unwrap();
        assert!(stats.score <= 0);
        assert_eq!(stats.matches, 3);
        assert_eq!(stats.gaps, 1);
    }

    #[test]
    fn s4_all_deleted() {
        let mut al = aligner();
        let cigar = al.align(b"AAAA", b"").unwrap().to_string();
        assert_eq!(cigar, "4D");
        let stats = al.alignstats(&cigar, b"AAAA", b"").unwrap();
        // Single D run spans the whole (empty) alignment: both left and last-op,
        // left wins per position_class's a_pos==0&&b_pos==0 check.
        assert_eq!(stats.score, -(4 + 4 * 2));
        assert_eq!(stats.gaps, 1);
    }

    #[test]
    fn s6_n_as_mismatch_policy() {
        let mut al = Aligner::new(scoring(), true);
        let cigar = al.align(b"ANNT", b"ACGT").unwrap().to_string();
        assert_eq!(cigar, "4M");
        let stats = al.alignstats(&cigar, b"ANNT", b"ACGT").unwrap();
        assert_eq!(stats.matches, 2);
        assert_eq!(stats.mismatches, 2);
        assert_eq!(stats.score, 2 * 2 + 2 * -4);
    }

    #[test]
    fn cigar_has_no_adjacent_same_op_runs() {
        let mut al = aligner();
        let cigar = al.align(b"ACGTACGTGGGGACGT", b"ACGTACCCCGTACGT").unwrap().to_string();
        let tokens = cigar::parse(&cigar).unwrap();
        for pair in tokens.windows(2) {
            assert_ne!(pair[0].1, pair[1].1);
        }
    }

    #[test]
    fn alignstats_matches_the_engines_own_optimum() {
        let mut al = aligner();
        for (x, y) in [
            ("ACGTACGT", "ACGTCCGT"),
            ("AAAAAAAAAA", "AAAA"),
            ("GATTACA", "GATTACA"),
            ("A", "ACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGT"),
        ] {
            let cigar = al.align(x.as_bytes(), y.as_bytes()).unwrap().to_string();
            let stats = al.alignstats(&cigar, x.as_bytes(), y.as_bytes()).unwrap();
            assert_eq!(stats.matches + stats.mismatches, cigar::parse(&cigar).unwrap().iter()
                .filter(|(_, op)| *op == CigarOp::Match)
                .map(|(n, _)| n)
                .sum::<i64>());
        }
    }

    #[test]
    fn boundary_a_len_one_family_1_delete_then_insert() {
        // Cheap target-left / query-right gaps, expensive query-left / target-right
        // gaps: delete-then-insert costs 0, the other two families cost far less.
        let scoring = Scoring::new(2, -4, 1000, 0, 0, 0, 0, 1000, 1000, 0, 0, 0, 0, 1000).unwrap();
        let mut al = Aligner::new(scoring, false);
        let cigar = al.align(b"A", b"TTTTT").unwrap().to_string();
        assert_eq!(cigar, "1D5I");
    }

    #[test]
    fn boundary_a_len_one_family_2_insert_then_delete() {
        // Mirror image: cheap query-left / target-right gaps favor insert-then-delete.
        let scoring = Scoring::new(2, -4, 0, 1000, 0, 0, 1000, 0, 0, 1000, 0, 0, 1000, 0).unwrap();
        let mut al = Aligner::new(scoring, false);
        let cigar = al.align(b"A", b"TTTTT").unwrap().to_string();
        assert_eq!(cigar, "5I1D");
    }

    #[test]
    fn boundary_a_len_one_substitution_family() {
        let mut al = aligner();
        for b_len in [1usize, 2, 5, 100] {
            let b: Vec<u8> = std::iter::repeat(b'A').take(b_len).collect();
            let cigar = al.align(b"A", &b).unwrap().to_string();
            let stats = al.alignstats(&cigar, b"A", &b).unwrap();
            assert_eq!(stats.matches, 1);
        }
    }

    #[test]
    fn large_inputs_do_not_blow_the_stack() {
        let n = 20_000usize;
        let a: Vec<u8> = (0..n).map(|i| b"ACGT"[i % 4]).collect();
        let mut b = a.clone();
        b[n / 2] = b'A';
        let mut al = aligner();
        let cigar = al.align(&a, &b).unwrap().to_string();
        assert!(!cigar.is_empty());
    }

    #[test]
    fn alignstats_rejects_del_run_past_end_of_a() {
        let al = aligner();
        let err = al.alignstats("100D", b"AAA", b"AAA").unwrap_err();
        assert!(matches!(err, AlignError::CigarOutOfBounds { which: "a" }));
    }

    #[test]
    fn alignstats_rejects_ins_run_past_end_of_b() {
        let al = aligner();
        let err = al.alignstats("100I", b"AAA", b"AAA").unwrap_err();
        assert!(matches!(err, AlignError::CigarOutOfBounds { which: "b" }));
    }
}
