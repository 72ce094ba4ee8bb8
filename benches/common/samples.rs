use bezier_raster::{point, Point};
use once_cell::sync::Lazy;

/// Control points spread over a 700x700 surface
pub static CURVES: Lazy<Vec<[Point; 4]>> = Lazy::new(|| {
    vec![
        [
            point(100.0, 500.0),
            point(300.0, 100.0),
            point(500.0, 700.0),
            point(700.0, 300.0),
        ],
        [
            point(50.0, 0.0),
            point(200.0, 33.0),
            point(0.0, 66.0),
            point(50.0, 100.0),
        ],
        [
            point(50.0, 0.0),
            point(155.0, 23.1),
            point(88.5, 46.2),
            point(56.3, 69.643),
        ],
        [
            point(56.3, 69.643),
            point(42.5, 79.69),
            point(35.0, 89.8),
            point(50.0, 100.0),
        ],
    ]
});
