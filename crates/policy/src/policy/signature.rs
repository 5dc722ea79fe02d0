//! PC signature folding.

/// Low fold shift; mixes the page-offset-adjacent PC bits into the index.
const FOLD_SHIFT_LO: u32 = 12;

/// High fold shift; mixes upper PC bits so distant code regions separate.
const FOLD_SHIFT_HI: u32 = 20;

/// Index of one signature table entry.
///
/// Produced by [`fold_pc`]; always below the table size used to fold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature(pub usize);

/// Folds a program counter into a table index.
///
/// XOR-folds two shifted copies of the PC onto itself before masking, so
/// instructions further apart than the table size still spread across it.
/// `mask` must be the table size minus one.
#[inline(always)]
pub const fn fold_pc(pc: u64, mask: usize) -> Signature {
    let folded = pc ^ (pc >> FOLD_SHIFT_LO) ^ (pc >> FOLD_SHIFT_HI);
    Signature((folded as usize) & mask)
}
