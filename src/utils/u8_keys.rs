/// Find the position of `key` within the first `num_children` entries of a sorted key array.
/// The widths in play are small (4 or 16), so a linear scan beats binary search in practice.
pub fn u8_keys_find_key_position_sorted<const WIDTH: usize>(
    key: u8,
    keys: &[u8; WIDTH],
    num_children: usize,
) -> Option<usize> {
    keys[..num_children].iter().position(|k| *k == key)
}

/// Find the position at which `key` has to be inserted to keep the array sorted, or `None` if
/// the array is already at capacity.
pub fn u8_keys_find_insert_position_sorted<const WIDTH: usize>(
    key: u8,
    keys: &[u8; WIDTH],
    num_children: usize,
) -> Option<usize> {
    if num_children >= WIDTH {
        return None;
    }
    Some(
        keys[..num_children]
            .iter()
            .position(|k| *k > key)
            .unwrap_or(num_children),
    )
}
