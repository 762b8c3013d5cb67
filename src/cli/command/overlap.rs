mod overlap_args;

pub use overlap_args::OverlapArgs;
