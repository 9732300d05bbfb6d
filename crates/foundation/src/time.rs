/// Engine time in seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Time(pub f64);
