/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_loading_variant_reports_loading() {
        assert!(FetchState::<u8>::Loading.is_loading());
        assert!(!FetchState::<u8>::NotStarted.is_loading());
        assert!(!FetchState::Success(1u8).is_loading());
        assert!(!FetchState::<u8>::Error("boom".to_string()).is_loading());
    }
}
