use super::{Extensions, ForwardTables, ScoreData, ScoreDataError, WindowLengths};

impl ScoreData {
    /// Deep copies the container for use by another worker.
    ///
    /// Every populated table is copied and every absent one stays absent, so a
    /// template can be cloned before or after enrichment. The copy shares no
    /// storage with `self`. If any allocation fails, the tables already copied
    /// are released before the error is returned.
    ///
    /// ## Errors
    ///
    /// [`ScoreDataError::OutOfMemory`] if a copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, ScoreDataError> {
        let scores = self.scores.try_clone()?;
        let extensions = self.extensions.as_ref().map(Extensions::try_clone).transpose()?;
        let windows = self.windows.as_ref().map(WindowLengths::try_clone).transpose()?;
        let forward = self.forward.as_ref().map(ForwardTables::try_clone).transpose()?;

        log::debug!(
            "Cloned {:?} score data (M = {}, enriched = {})",
            self.mode(),
            self.m,
            forward.is_some()
        );

        Ok(ScoreData {
            m: self.m,
            alphabet: self.alphabet,
            scores,
            extensions,
            windows,
            forward,
        })
    }

    /// Releases the container and every table it holds.
    #[inline]
    pub fn destroy(self) {
        destroy(Some(self));
    }
}

/// Releases a container, if there is one.
///
/// Any combination of absent tables is fine, and `None` is a no-op. Since the
/// container is moved in, it cannot be released twice.
#[inline]
pub fn destroy(data: Option<ScoreData>) {
    if let Some(data) = data {
        log::trace!(
            "Releasing score data (M = {}, extensions = {}, enriched = {})",
            data.m,
            data.extensions.is_some(),
            data.is_enriched()
        );
        drop(data);
    }
}
