use crate::error::Error;
use crate::types::Weight;

/// Relaxes the edge `from -> to` against the current tentative distances.
///
/// Returns `Ok(Some(candidate))` when going through `from` strictly improves
/// the distance of `to`, `Ok(None)` when `from` is unreached or the edge does
/// not improve anything. Unreached vertices never relax their out-edges, so
/// cycles that the source cannot reach are never observed.
///
/// # Errors
/// Returns `Error::WeightOverflow` if `distance[from] + weight` does not fit
/// in a `Weight`.
pub fn relax(
    distance: &[Option<Weight>],
    from: usize,
    to: usize,
    weight: Weight,
) -> Result<Option<Weight>, Error> {
    let Some(base) = distance[from] else {
        return Ok(None);
    };

    let candidate = base
        .checked_add(weight)
        .ok_or(Error::WeightOverflow { from, to })?;

    match distance[to] {
        Some(current) if current <= candidate => Ok(None),
        _ => Ok(Some(candidate)),
    }
}

/// Checks whether the edge `from -> to` can still improve `to`, without
/// failing on overflow.
///
/// A sum that falls below `Weight::MIN` counts as an improvement, with the
/// candidate pinned at `Weight::MIN`. A sum above `Weight::MAX` never improves
/// a reached vertex.
pub fn relax_unbounded(
    distance: &[Option<Weight>],
    from: usize,
    to: usize,
    weight: Weight,
) -> Option<Weight> {
    let base = distance[from]?;

    match base.checked_add(weight) {
        Some(candidate) => match distance[to] {
            Some(current) if current <= candidate => None,
            _ => Some(candidate),
        },
        None if weight < 0 => Some(Weight::MIN),
        None => None,
    }
}
