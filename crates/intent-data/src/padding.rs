//! Fixed-length padding of token sequences.

/// Reserved token id used to fill short sequences.
pub const PAD_ID: u32 = 0;

/// Right-pad `sequence` with [`PAD_ID`] up to `max_len`, or truncate it to
/// its first `max_len` tokens.
///
/// # Examples
/// ```
/// use intent_data::padding::{pad_sequence, PAD_ID};
///
/// assert_eq!(pad_sequence(&[7, 8], 4), vec![7, 8, PAD_ID, PAD_ID]);
/// assert_eq!(pad_sequence(&[7, 8, 9], 2), vec![7, 8]);
/// ```
pub fn pad_sequence(sequence: &[u32], max_len: usize) -> Vec<u32> {
    let mut padded = Vec::with_capacity(max_len);
    padded.extend(sequence.iter().take(max_len));
    padded.resize(max_len, PAD_ID);
    padded
}

/// Pad or truncate every sequence to `max_len`.
pub fn pad_sequences<S: AsRef<[u32]>>(sequences: &[S], max_len: usize) -> Vec<Vec<u32>> {
    sequences
        .iter()
        .map(|seq| pad_sequence(seq.as_ref(), max_len))
        .collect()
}
