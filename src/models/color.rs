/// An RGB triple; reads from JSON as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);
