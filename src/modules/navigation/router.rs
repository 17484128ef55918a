use super::Route;
use crate::log_debug;

/// Current route plus the stack of routes that led here
#[derive(Debug, Clone, PartialEq)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self { current: start, history: Vec::new() }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Navigating to the route already shown is a no-op
    pub fn navigate(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        log_debug!("navigate {} -> {}", self.current.path(), route.path());
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }

    /// Returns false when there is nowhere to go back to
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Starts a fresh history, used after sign-in and sign-out
    pub fn reset(&mut self, route: Route) {
        self.history.clear();
        self.current = route;
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_walks_the_history() {
        let mut router = Router::new(Route::Dashboard);
        router.navigate(Route::Sector("1".to_string()));
        router.navigate(Route::Fines);
        assert_eq!(router.depth(), 2);

        assert!(router.back());
        assert_eq!(router.current(), &Route::Sector("1".to_string()));
        assert!(router.back());
        assert_eq!(router.current(), &Route::Dashboard);
        assert!(!router.back());
        assert_eq!(router.current(), &Route::Dashboard);
    }

    #[test]
    fn same_route_is_not_pushed() {
        let mut router = Router::new(Route::Dashboard);
        router.navigate(Route::Dashboard);
        assert_eq!(router.depth(), 0);
    }

    #[test]
    fn reset_clears_history() {
        let mut router = Router::new(Route::Auth);
        router.navigate(Route::Dashboard);
        router.reset(Route::Auth);
        assert_eq!(router.depth(), 0);
        assert_eq!(router.current(), &Route::Auth);
    }
}
