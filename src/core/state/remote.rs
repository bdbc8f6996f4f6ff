/// Lifecycle of data fetched from the backend for one page
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Idle,
    Loading,
    Loaded(T),
    NotFound,
    Failed(String),
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Idle
    }
}

impl<T> Remote<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let mut remote: Remote<Vec<u8>> = Remote::default();
        assert_eq!(remote, Remote::Idle);
        assert!(remote.loaded().is_none());

        remote = Remote::Loaded(vec![1]);
        if let Some(v) = remote.loaded_mut() {
            v.push(2);
        }
        assert_eq!(remote.loaded(), Some(&vec![1, 2]));

        let failed: Remote<()> = Remote::Failed("boom".into());
        assert_eq!(failed.error(), Some("boom"));
        assert!(Remote::<()>::Loading.is_loading());
    }
}
