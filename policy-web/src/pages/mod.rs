mod policies;

pub use policies::Policies;
