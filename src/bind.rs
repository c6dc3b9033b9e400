use crate::queue::WindowedQueue;
use crate::Error;

/// Make the windows of `target` share the cells of the windows of `source`.
///
/// Windows are paired by rank: both position sets are taken in ascending order
/// and the i-th window of `target` adopts the cell of the i-th window of `source`.
/// Whatever the adopted cell holds stays; the cells `target` referenced before are
/// released without merging.
///
/// Returns the fused `(target position, source position)` pairs.
///
/// # Errors
///
/// Returns `Err(Error::WindowCountMismatch)` if the window counts differ,
/// before any window is rebound.
pub fn bind<T>(
    target: &mut WindowedQueue<T>,
    source: &WindowedQueue<T>,
) -> Result<Vec<(usize, usize)>, Error> {
    let ours = target.window_count();
    let theirs = source.window_count();
    if ours != theirs {
        log::debug!("refusing to bind {} windows to {}", ours, theirs);
        return Err(Error::WindowCountMismatch { ours, theirs });
    }

    // {2, 3, 4} and {6, 8, 9} fuse as 2-6, 3-8, 4-9.
    let pairs = target
        .windows_mut()
        .iter_mut()
        .zip(source.windows())
        .map(|((&ours, window), (&theirs, peer))| {
            window.rebind(peer);
            (ours, theirs)
        })
        .collect();

    Ok(pairs)
}
