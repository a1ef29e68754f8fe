use api::RequestError;

/// What a page shows when its data could not be fetched.
pub trait Fallback {
    fn fallback() -> Self;
}

impl<T> Fallback for Vec<T> {
    fn fallback() -> Self {
        Vec::new()
    }
}

/// Lifecycle of a data-bearing page.
///
/// `Failed` still carries data: the page's fallback, so the page renders
/// the same way in both settled states.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Data to render, once settled.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Loaded(data) | Self::Failed(data) => Some(data),
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Loading => None,
            Self::Loaded(data) | Self::Failed(data) => Some(data),
        }
    }
}

impl<T: Fallback> LoadState<T> {
    /// Settle a single fetch, substituting the fallback on failure.
    pub fn settle(result: Result<T, RequestError>, what: &str) -> Self {
        match result {
            Ok(data) => Self::Loaded(data),
            Err(e) => {
                tracing::error!("Error loading {}: {}", what, e);
                Self::Failed(T::fallback())
            }
        }
    }
}

/// Unwrap one of several joined fetches, logging and substituting on
/// failure. Returns whether the fetch failed alongside the value.
pub(crate) fn or_fallback<T>(
    result: Result<T, RequestError>,
    what: &str,
    fallback: impl FnOnce() -> T,
) -> (T, bool) {
    match result {
        Ok(value) => (value, false),
        Err(e) => {
            tracing::error!("Error loading {}: {}", what, e);
            (fallback(), true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle() {
        let ok: LoadState<Vec<u8>> = LoadState::settle(Ok(vec![1, 2]), "bytes");
        assert_eq!(ok, LoadState::Loaded(vec![1, 2]));
        assert_eq!(ok.data(), Some(&vec![1, 2]));

        let failed: LoadState<Vec<u8>> =
            LoadState::settle(Err(RequestError::Network("offline".into())), "bytes");
        assert!(failed.is_failed());
        assert_eq!(failed.data(), Some(&Vec::new()));
    }

    #[test]
    fn test_loading_has_no_data() {
        let state: LoadState<Vec<u8>> = LoadState::default();
        assert!(state.is_loading());
        assert_eq!(state.data(), None);
    }
}
