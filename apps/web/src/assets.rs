/// Global stylesheet, applied once with the root component.
pub(crate) const STYLESHEET: &str = include_str!("../assets/index.css");
