/// Wind reading: direction in degrees true, speed in knots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wind {
    pub direction: i32,
    pub speed: i32,
}

impl Wind {
    pub fn new(direction: i32, speed: i32) -> Self {
        Self { direction, speed }
    }
}
