/// A request for a path from `start` to `end`.
///
/// `min_free_space` and `heuristic_id` are carried with the request but not
/// read by the search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathRequest<C> {
    pub start: C,
    pub end: C,
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_free_space: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub heuristic_id: i32,
}

impl<C> PathRequest<C> {
    /// A request with the reserved fields zeroed.
    pub fn new(start: C, end: C) -> Self {
        Self {
            start,
            end,
            min_free_space: 0.0,
            heuristic_id: 0,
        }
    }

    /// Set the minimum free space (builder).
    pub fn with_min_free_space(mut self, min_free_space: f64) -> Self {
        self.min_free_space = min_free_space;
        self
    }

    /// Set the heuristic id (builder).
    pub fn with_heuristic_id(mut self, heuristic_id: i32) -> Self {
        self.heuristic_id = heuristic_id;
        self
    }
}

/// Cells from (excluding) the start to (including) the end, in travel order.
/// Empty when no path exists or the request starts at its end.
pub type Path<C> = Vec<C>;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use backbone_core::Point;

    #[test]
    fn request_round_trip() {
        let req = PathRequest::new(Point::new(1, 2), Point::new(3, 4))
            .with_min_free_space(1.5)
            .with_heuristic_id(2);
        let json = serde_json::to_string(&req).unwrap();
        let back: PathRequest<Point> = serde_json::from_str(&json).unwrap();
        assert_eq!(req, back);
    }

    #[test]
    fn reserved_fields_default() {
        let json = r#"{"start":{"x":0,"y":0},"end":{"x":2,"y":0}}"#;
        let req: PathRequest<Point> = serde_json::from_str(json).unwrap();
        assert_eq!(req, PathRequest::new(Point::new(0, 0), Point::new(2, 0)));
    }
}
