//! Canonicalising sort for cover chunks
//!
//! Bottom-up merge sort into strictly descending canonical cube order.
//! Runs of up to four cubes are handled by hard-coded compare networks
//! whose swaps and rotations go through a single scratch cube, so the
//! inner loops never allocate. Merging uses a scratch buffer of half the
//! cover.
//!
//! The sort itself keeps equal cubes adjacent (an in-place range sort
//! cannot shrink mid-recursion); the final compaction sweep deletes the
//! duplicates and yields the new cube count.

use std::cmp::Ordering;

use crate::bitpack::{self, PatWord};

/// Sorts a chunk of cubes into canonical descending order
///
/// Owns its scratch buffers; one `Sorter` can be reused across sorts of
/// the same variable space.
pub(crate) struct Sorter {
    /// Words per cube
    w: usize,
    /// One-cube scratch backing swaps and rotations
    tmp_cube: Vec<PatWord>,
    /// Half-cover scratch for merging
    tmp_run: Vec<PatWord>,
}

/// Compare cubes `i` and `j` of `chunk`
fn cmp_at(chunk: &[PatWord], w: usize, i: usize, j: usize) -> Ordering {
    bitpack::compare(&chunk[i * w..(i + 1) * w], &chunk[j * w..(j + 1) * w])
}

/// Copy cube `src` over cube `dst` within `chunk`
fn move_cube(chunk: &mut [PatWord], w: usize, dst: usize, src: usize) {
    chunk.copy_within(src * w..(src + 1) * w, dst * w);
}

/// Delete equal adjacent cubes of a sorted chunk in place
///
/// Returns the surviving cube count. Also used on its own by operations
/// that preserve cube order but may merge two cubes into one, such as
/// the literal product on a cover with absorbed cubes.
pub(crate) fn dedup_cubes(w: usize, chunk: &mut [PatWord], cube_num: usize) -> usize {
    if cube_num <= 1 || w == 0 {
        return cube_num.min(1);
    }
    let mut keep = 0;
    for i in 1..cube_num {
        if cmp_at(chunk, w, i, keep) != Ordering::Equal {
            keep += 1;
            if keep != i {
                move_cube(chunk, w, keep, i);
            }
        }
    }
    keep + 1
}

impl Sorter {
    pub(crate) fn new(var_num: usize) -> Self {
        let w = bitpack::cube_size(var_num);
        Sorter {
            w,
            tmp_cube: vec![0; w],
            tmp_run: Vec::new(),
        }
    }

    /// Sort `cube_num` cubes of `chunk` in place and drop duplicates
    ///
    /// Returns the deduplicated cube count; the caller truncates the
    /// chunk to it.
    pub(crate) fn sort(&mut self, cube_num: usize, chunk: &mut [PatWord]) -> usize {
        if self.w == 0 {
            // zero-variable cubes are all equal
            return cube_num.min(1);
        }
        let half = cube_num.div_ceil(2);
        self.tmp_run.resize(half * self.w, 0);
        self.sort_sub(chunk, 0, cube_num);
        self.dedup(chunk, cube_num)
    }

    /// Merge sort of the cube range `[begin, end)`
    fn sort_sub(&mut self, chunk: &mut [PatWord], begin: usize, end: usize) {
        let n = end - begin;
        if n <= 1 {
            return;
        }
        let w = self.w;
        if n == 2 {
            let c0 = begin;
            let c1 = begin + 1;
            if cmp_at(chunk, w, c0, c1) == Ordering::Less {
                self.swap(chunk, c0, c1);
            }
            return;
        }
        if n == 3 {
            // six permutations, resolved exhaustively
            let c0 = begin;
            let c1 = begin + 1;
            let c2 = begin + 2;
            if cmp_at(chunk, w, c0, c1) == Ordering::Less {
                // (1, 0, 2), (1, 2, 0), (2, 1, 0)
                if cmp_at(chunk, w, c0, c2) == Ordering::Less {
                    // (1, 2, 0), (2, 1, 0)
                    if cmp_at(chunk, w, c1, c2) == Ordering::Less {
                        // (2, 1, 0)
                        self.swap(chunk, c0, c2);
                    } else {
                        // (1, 2, 0)
                        self.rotate3(chunk, c0, c1, c2);
                    }
                } else {
                    // (1, 0, 2)
                    self.swap(chunk, c0, c1);
                }
            } else {
                // (0, 1, 2), (0, 2, 1), (2, 0, 1)
                if cmp_at(chunk, w, c0, c2) == Ordering::Less {
                    // (2, 0, 1)
                    self.rotate3(chunk, c0, c2, c1);
                } else if cmp_at(chunk, w, c1, c2) == Ordering::Less {
                    // (0, 2, 1)
                    self.swap(chunk, c1, c2);
                }
                // else already (0, 1, 2)
            }
            return;
        }
        if n == 4 {
            let c0 = begin;
            let c1 = begin + 1;
            let c2 = begin + 2;
            let c3 = begin + 3;
            // order the two pairs first
            if cmp_at(chunk, w, c0, c1) == Ordering::Less {
                self.swap(chunk, c0, c1);
            }
            if cmp_at(chunk, w, c2, c3) == Ordering::Less {
                self.swap(chunk, c2, c3);
            }
            if cmp_at(chunk, w, c0, c2) == Ordering::Less {
                if cmp_at(chunk, w, c0, c3) == Ordering::Less {
                    // both of the second pair dominate the first pair
                    self.swap(chunk, c0, c2);
                    self.swap(chunk, c1, c3);
                } else if cmp_at(chunk, w, c1, c3) == Ordering::Less {
                    self.rotate4(chunk, c0, c2, c3, c1);
                } else {
                    self.rotate3(chunk, c0, c2, c1);
                }
            } else if cmp_at(chunk, w, c1, c2) == Ordering::Less {
                if cmp_at(chunk, w, c1, c3) == Ordering::Less {
                    self.rotate3(chunk, c1, c2, c3);
                } else {
                    self.swap(chunk, c1, c2);
                }
            }
            // else already sorted
            return;
        }

        // split; the first half takes the odd cube
        let hn = n.div_ceil(2);
        let end1 = begin + hn;
        self.sort_sub(chunk, begin, end1);
        self.sort_sub(chunk, end1, end);

        // trivial case: the halves are already in order
        if cmp_at(chunk, w, end1 - 1, end1) == Ordering::Greater {
            return;
        }

        // merge, staging the first half in the scratch buffer
        self.tmp_run[..hn * w].copy_from_slice(&chunk[begin * w..end1 * w]);
        let mut i1 = 0; // cube index into tmp_run
        let mut i2 = end1; // cube index into chunk
        let mut dst = begin;
        while i1 < hn && i2 < end {
            let c1 = &self.tmp_run[i1 * w..(i1 + 1) * w];
            let c2 = &chunk[i2 * w..(i2 + 1) * w];
            match bitpack::compare(c1, c2) {
                Ordering::Greater | Ordering::Equal => {
                    // equal cubes stay adjacent for the dedup sweep
                    chunk[dst * w..(dst + 1) * w].copy_from_slice(c1);
                    i1 += 1;
                }
                Ordering::Less => {
                    move_cube(chunk, w, dst, i2);
                    i2 += 1;
                }
            }
            dst += 1;
        }
        while i1 < hn {
            chunk[dst * w..(dst + 1) * w].copy_from_slice(&self.tmp_run[i1 * w..(i1 + 1) * w]);
            i1 += 1;
            dst += 1;
        }
        // a remaining tail of the second half is already in place
        debug_assert!(i2 == dst || i2 == end);
    }

    /// Compact equal adjacent cubes; returns the surviving count
    fn dedup(&self, chunk: &mut [PatWord], cube_num: usize) -> usize {
        dedup_cubes(self.w, chunk, cube_num)
    }

    /// Exchange cubes `i` and `j`
    fn swap(&mut self, chunk: &mut [PatWord], i: usize, j: usize) {
        self.save(chunk, i);
        move_cube(chunk, self.w, i, j);
        self.restore(chunk, j);
    }

    /// `i <- j, j <- k, k <- old i`
    fn rotate3(&mut self, chunk: &mut [PatWord], i: usize, j: usize, k: usize) {
        self.save(chunk, i);
        move_cube(chunk, self.w, i, j);
        move_cube(chunk, self.w, j, k);
        self.restore(chunk, k);
    }

    /// `i <- j, j <- k, k <- l, l <- old i`
    fn rotate4(&mut self, chunk: &mut [PatWord], i: usize, j: usize, k: usize, l: usize) {
        self.save(chunk, i);
        move_cube(chunk, self.w, i, j);
        move_cube(chunk, self.w, j, k);
        move_cube(chunk, self.w, k, l);
        self.restore(chunk, l);
    }

    fn save(&mut self, chunk: &[PatWord], i: usize) {
        self.tmp_cube
            .copy_from_slice(&chunk[i * self.w..(i + 1) * self.w]);
    }

    fn restore(&self, chunk: &mut [PatWord], i: usize) {
        chunk[i * self.w..(i + 1) * self.w].copy_from_slice(&self.tmp_cube);
    }
}
