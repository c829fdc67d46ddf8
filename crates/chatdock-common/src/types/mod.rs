mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect {
            x: 0.0,
            y: 0.0,
            width: 1920.0,
            height: 1080.0,
        };
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn rect_from_parts_and_back() {
        let r = Rect::from_parts(Point::new(20.0, 30.0), Size::new(400.0, 300.0));
        assert_eq!(r.origin(), Point::new(20.0, 30.0));
        assert_eq!(r.size(), Size::new(400.0, 300.0));
        assert_eq!(r.right(), 420.0);
        assert_eq!(r.bottom(), 330.0);
    }

    #[test]
    fn rect_contains_inside_and_edges() {
        let r = Rect::from_parts(Point::new(10.0, 10.0), Size::new(100.0, 50.0));
        assert!(r.contains(Point::new(50.0, 30.0)));
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(110.0, 60.0)));
    }

    #[test]
    fn rect_contains_outside() {
        let r = Rect::from_parts(Point::new(10.0, 10.0), Size::new(100.0, 50.0));
        assert!(!r.contains(Point::new(5.0, 30.0)));
        assert!(!r.contains(Point::new(50.0, 61.0)));
    }

    #[test]
    fn point_offset() {
        let p = Point::new(100.0, 100.0).offset(-500.0, 25.0);
        assert_eq!(p, Point::new(-400.0, 125.0));
    }

    #[test]
    fn viewport_size() {
        let v = Viewport::new(800.0, 600.0);
        assert_eq!(v.size(), Size::new(800.0, 600.0));
    }

    #[test]
    fn size_display() {
        assert_eq!(Size::new(400.0, 300.0).to_string(), "400x300");
    }
}
