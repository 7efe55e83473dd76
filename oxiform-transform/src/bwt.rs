//! Burrows-Wheeler Transform.
//!
//! The BWT is a reversible transformation that groups similar bytes together,
//! making the data more compressible by a following MTF/RLE or entropy stage.
//!
//! # Record format
//!
//! ```text
//! [original_index: u32 LE][last_column: n bytes]
//! ```
//!
//! `original_index` is the row of the sorted rotation matrix holding the
//! unrotated input. An empty input encodes to an empty record.

use log::warn;
use oxiform_core::{OxiFormError, Result};

/// Size of the record header.
pub const HEADER_SIZE: usize = 4;

/// Longest input whose rows the 32-bit header can index.
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;

/// Convert a sorted row to its header form.
fn row_index(row: usize) -> Result<u32> {
    u32::try_from(row).map_err(|_| OxiFormError::input_too_large("bwt", row + 1, MAX_INPUT_LEN))
}

/// Sort the cyclic rotations of `data` by their starting offset.
///
/// Prefix doubling over rotation classes: after round `h` every rotation is
/// ranked by its first `2^h` bytes, and a counting sort over the previous
/// ranks produces the next round in linear time, so the whole sort is
/// O(n log n). Rotations that are byte-for-byte identical share a class and
/// keep an arbitrary relative order, which the inverse tolerates.
pub fn sort_rotations(data: &[u8]) -> Vec<usize> {
    let n = data.len();
    if n == 0 {
        return Vec::new();
    }

    let mut order = vec![0usize; n];
    let mut class = vec![0usize; n];
    let mut counts = vec![0usize; n.max(256)];

    // Round 0: order by first byte
    for &byte in data {
        counts[byte as usize] += 1;
    }
    for i in 1..256 {
        counts[i] += counts[i - 1];
    }
    for i in (0..n).rev() {
        let byte = data[i] as usize;
        counts[byte] -= 1;
        order[counts[byte]] = i;
    }

    let mut classes = 1;
    class[order[0]] = 0;
    for i in 1..n {
        if data[order[i]] != data[order[i - 1]] {
            classes += 1;
        }
        class[order[i]] = classes - 1;
    }

    let mut shifted = vec![0usize; n];
    let mut next_class = vec![0usize; n];
    let mut span = 1;

    while span < n && classes < n {
        // Rotations are already sorted by their second half; shift back by
        // `span` to get candidates ordered by second half, then stable-sort
        // by the first half's class.
        for (slot, &start) in shifted.iter_mut().zip(order.iter()) {
            *slot = (start + n - span) % n;
        }

        counts[..classes].fill(0);
        for &start in &shifted {
            counts[class[start]] += 1;
        }
        for i in 1..classes {
            counts[i] += counts[i - 1];
        }
        for &start in shifted.iter().rev() {
            let c = class[start];
            counts[c] -= 1;
            order[counts[c]] = start;
        }

        next_class[order[0]] = 0;
        classes = 1;
        for i in 1..n {
            let cur = (class[order[i]], class[(order[i] + span) % n]);
            let prev = (class[order[i - 1]], class[(order[i - 1] + span) % n]);
            if cur != prev {
                classes += 1;
            }
            next_class[order[i]] = classes - 1;
        }
        std::mem::swap(&mut class, &mut next_class);

        span <<= 1;
    }

    order
}

/// Perform the Burrows-Wheeler Transform.
///
/// Returns the last column and the sorted row holding the original string.
/// Inputs longer than [`MAX_INPUT_LEN`] are rejected before sorting.
pub fn transform(data: &[u8]) -> Result<(Vec<u8>, u32)> {
    if data.is_empty() {
        return Ok((Vec::new(), 0));
    }

    let n = data.len();
    if n > MAX_INPUT_LEN {
        return Err(OxiFormError::input_too_large("bwt", n, MAX_INPUT_LEN));
    }
    let indices = sort_rotations(data);

    let mut orig_row = 0;
    let mut last_column = Vec::with_capacity(n);
    for (row, &start) in indices.iter().enumerate() {
        if start == 0 {
            orig_row = row;
        }
        last_column.push(data[(start + n - 1) % n]);
    }

    Ok((last_column, row_index(orig_row)?))
}

/// Build the LF (last-to-first) mapping of a last column.
///
/// `lf[i]` is the row whose rotation starts with the byte at `last[i]`:
/// the cumulative count of smaller bytes plus the number of equal bytes
/// already seen above row `i`.
pub fn lf_mapping(last: &[u8]) -> Vec<usize> {
    let mut counts = [0usize; 256];
    for &byte in last {
        counts[byte as usize] += 1;
    }

    let mut cumulative = [0usize; 256];
    let mut total = 0;
    for (slot, &count) in cumulative.iter_mut().zip(counts.iter()) {
        *slot = total;
        total += count;
    }

    let mut tally = [0usize; 256];
    last.iter()
        .map(|&byte| {
            let b = byte as usize;
            let row = cumulative[b] + tally[b];
            tally[b] += 1;
            row
        })
        .collect()
}

/// Perform the inverse Burrows-Wheeler Transform.
///
/// Walks the LF mapping backwards from `orig_ptr`, filling the output from
/// its last byte to its first.
pub fn inverse_transform(last: &[u8], orig_ptr: u32) -> Result<Vec<u8>> {
    let n = last.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    if orig_ptr as usize >= n {
        warn!("bwt: original index {} out of range for {} bytes", orig_ptr, n);
        return Err(OxiFormError::invalid_index(orig_ptr, n));
    }

    let lf = lf_mapping(last);
    let mut result = vec![0u8; n];
    let mut idx = orig_ptr as usize;

    for slot in result.iter_mut().rev() {
        *slot = last[idx];
        idx = lf[idx];
    }

    Ok(result)
}

/// Encode a buffer into a BWT record.
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let (last_column, orig_ptr) = transform(data)?;
    let mut record = Vec::with_capacity(HEADER_SIZE + last_column.len());
    record.extend_from_slice(&orig_ptr.to_le_bytes());
    record.extend_from_slice(&last_column);
    Ok(record)
}

/// Decode a BWT record.
///
/// Records no longer than the header carry no payload and decode to an
/// empty buffer.
pub fn decode(record: &[u8]) -> Result<Vec<u8>> {
    if record.len() <= HEADER_SIZE {
        return Ok(Vec::new());
    }

    let (header, last_column) = record.split_at(HEADER_SIZE);
    let orig_ptr = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
    inverse_transform(last_column, orig_ptr)
}
