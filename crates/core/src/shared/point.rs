/// Integer pixel coordinate.
///
/// Coordinates are signed: the service may report vertices that lie
/// outside the image, and those are clipped at render time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuple() {
        assert_eq!(Point::from((3, -4)), Point::new(3, -4));
    }

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Point::default(), Point::new(0, 0));
    }
}
