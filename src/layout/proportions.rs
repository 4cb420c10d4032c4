use crate::units::Mm;
use crate::LineaturError;

/// Split `line_height` into absolute distances according to relative `proportions`.
///
/// The proportions are weights, only their ratios matter: `[2, 1, 2]` and
/// `[4, 2, 4]` resolve to the same distances. The returned distances are in the
/// same order as the proportions and always add up to `line_height`.
///
/// An empty list resolves to an empty list, which the renderer draws as a single
/// baseline. A single proportion (of any value) resolves to one distance spanning
/// the whole line height, i.e. two lines without interior ruling.
///
/// Fails with [LineaturError::InvalidInput] if the proportions sum to zero.
pub fn resolve(proportions: &[f32], line_height: Mm) -> Result<Vec<Mm>, LineaturError> {
    if proportions.is_empty() {
        return Ok(Vec::new());
    }

    let sum: f32 = proportions.iter().sum();
    if sum == 0.0 {
        return Err(LineaturError::InvalidInput(format!(
            "line proportions {proportions:?} sum to zero"
        )));
    }

    Ok(proportions
        .iter()
        .map(|p| Mm(*line_height * p / sum))
        .collect())
}
