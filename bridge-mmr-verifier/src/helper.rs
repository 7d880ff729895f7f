/// Compute the MMR size after inserting `index + 1` leaves.
///
/// # Safety (arithmetic)
///
/// Overflows when `index >= 2^63 - 1` because `2 * leaves_count` exceeds
/// `u64::MAX`. Callers must validate indices before calling.
pub fn leaf_index_to_mmr_size(index: u64) -> u64 {
    // leaf index start with 0
    let leaves_count = index + 1;

    // the peak count(k) is actually the count of 1 in leaves count's binary
    // representation
    let peak_count = leaves_count.count_ones() as u64;

    2 * leaves_count - peak_count
}

/// Returns the height of the peaks in the mmr, presented by a bitmap.
/// for example, for a mmr with 11 leaves, the mmr_size is 19, it will return
/// 0b1011. 0b1011 indicates that the left peaks are at height 0, 1 and 3.
///           14
///        /       \
///      6          13
///    /   \       /   \
///   2     5     9     12     17
///  / \   /  \  / \   /  \   /  \
/// 0   1 3   4 7   8 10  11 15  16 18
///
/// When the mmr_size is invalid it returns the bitmap of the last valid mmr
/// below it; use [`is_valid_mmr_size`] to tell the two apart.
pub fn get_peak_map(mmr_size: u64) -> u64 {
    if mmr_size == 0 {
        return 0;
    }

    let mut pos = mmr_size;
    let mut peak_size = u64::MAX >> pos.leading_zeros();
    let mut peak_map = 0;
    while peak_size > 0 {
        peak_map <<= 1;
        if pos >= peak_size {
            pos -= peak_size;
            peak_map |= 1;
        }
        peak_size >>= 1;
    }

    peak_map
}

/// Derive the number of leaves from mmr_size.
///
/// The peak map bitmap encodes one bit per peak at height `h`, so its
/// numeric value equals the total leaf count: `sum(2^h)` for each set
/// bit `h`.
pub fn mmr_size_to_leaf_count(mmr_size: u64) -> u64 {
    get_peak_map(mmr_size)
}

/// Whether `mmr_size` is reachable by appending leaves to an empty MMR.
///
/// Zero is the empty MMR and is not a size any inclusion proof can target.
pub fn is_valid_mmr_size(mmr_size: u64) -> bool {
    let leaf_count = mmr_size_to_leaf_count(mmr_size);
    if leaf_count == 0 {
        return false;
    }
    leaf_count
        .checked_mul(2)
        .map(|double| double - leaf_count.count_ones() as u64 == mmr_size)
        .unwrap_or(false)
}

/// Canonical number of peaks for an MMR holding `leaf_count` leaves.
pub fn peak_count(leaf_count: u64) -> usize {
    leaf_count.count_ones() as usize
}

/// Heights of the mountains, tallest (leftmost) first.
pub fn mountain_heights(leaf_count: u64) -> impl Iterator<Item = u32> {
    (0..u64::BITS)
        .rev()
        .filter(move |height| (leaf_count >> height) & 1 == 1)
}

/// The mountain a leaf belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mountain {
    /// Position of the mountain's peak in the peak set.
    pub peak_index: usize,
    /// Height of the mountain; also the sibling path length.
    pub height: u32,
    /// Global index of the mountain's leftmost leaf.
    pub first_leaf: u64,
    /// The leaf's 0-based offset inside the mountain.
    pub offset: u64,
}

/// Find the mountain containing `leaf_index` in an MMR of `leaf_count`
/// leaves. Returns `None` when the index is out of range.
pub fn locate_leaf(leaf_index: u64, leaf_count: u64) -> Option<Mountain> {
    let mut first_leaf = 0u64;
    for (peak_index, height) in mountain_heights(leaf_count).enumerate() {
        let width = 1u64 << height;
        if leaf_index < first_leaf + width {
            return Some(Mountain {
                peak_index,
                height,
                first_leaf,
                offset: leaf_index - first_leaf,
            });
        }
        first_leaf += width;
    }
    None
}
