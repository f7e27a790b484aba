use super::{ExtensionTable, Extensions, MAX_EXTENSION, ScoreDataError};

/// Builds the forward and reverse extension bounds from the best score at each
/// position `0..=M` (entry `0` is unused).
pub(crate) fn build_extensions(max_scores: &[f32]) -> Result<Extensions, ScoreDataError> {
    let m = max_scores.len().saturating_sub(1);
    let mut forward = ExtensionTable::try_new(m)?;
    let mut reverse = ExtensionTable::try_new(m)?;

    fill_forward(max_scores, &mut forward);
    fill_reverse(max_scores, &mut reverse);

    log::trace!("Filled {} forward and reverse extension rows", forward.len());
    Ok(Extensions { forward, reverse })
}

/// Writes running sums into `row`, then repeats the last sum once `reach`
/// positions have been consumed.
#[inline]
fn fill_row(row: &mut [f32; MAX_EXTENSION], scores: impl Iterator<Item = f32>, reach: usize) {
    let mut sum = 0.0;
    for (slot, score) in row.iter_mut().zip(scores).take(reach) {
        sum += score;
        *slot = sum;
    }
    for slot in row.iter_mut().skip(reach) {
        *slot = sum;
    }
}

/// Forward bound at `pos`, offset `j`: the sum of the best scores at
/// `pos + 1 ..= pos + j + 1`, stopping at position `M`.
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
fn fill_forward(max_scores: &[f32], table: &mut ExtensionTable) {
    let m = max_scores.len() - 1;
    for pos in 1..m {
        let reach = MAX_EXTENSION.min(m - pos);
        fill_row(table.get_mut(pos), max_scores[pos + 1..].iter().copied(), reach);
    }
}

/// Reverse bound at `pos`, offset `j`: the sum of the best scores at
/// `pos, pos - 1, ..., pos - j`, stopping at position `1`.
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
fn fill_reverse(max_scores: &[f32], table: &mut ExtensionTable) {
    let m = max_scores.len() - 1;
    for pos in 1..m {
        let reach = MAX_EXTENSION.min(pos);
        fill_row(table.get_mut(pos), max_scores[1..=pos].iter().rev().copied(), reach);
    }
}
