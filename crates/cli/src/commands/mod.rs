mod align;

pub use align::AlignArgs;
pub use align::handle_align;
