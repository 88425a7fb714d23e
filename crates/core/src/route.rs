//! Route classification handed from the router to the page shell

/// Whether a response belongs to a known route
///
/// The page shell renders navigation and footer only for [`RouteClass::Ok`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteClass {
    #[default]
    Ok,
    NotFound,
}

impl RouteClass {
    pub fn shows_chrome(self) -> bool {
        matches!(self, RouteClass::Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_only_for_known_routes() {
        assert!(RouteClass::Ok.shows_chrome());
        assert!(!RouteClass::NotFound.shows_chrome());
        assert_eq!(RouteClass::default(), RouteClass::Ok);
    }
}
