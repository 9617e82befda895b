mod repair;

pub use repair::TextRepair;
