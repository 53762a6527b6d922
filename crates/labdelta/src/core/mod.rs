mod conversion;
mod difference;
mod equality;
mod math;
mod space;
mod string;

// conversion
pub(crate) use conversion::{convert, from_24bit, to_24bit};

// difference
pub use difference::{ciede_2000, delta_e_2000, De2000Version};
pub(crate) use difference::find_closest;

// equality
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_coordinates;

// math
pub(crate) use math::FloatExt;

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format_hashed, parse_hashed};
