mod compare;

pub use compare::CompareArgs;
pub use compare::handle_compare;
