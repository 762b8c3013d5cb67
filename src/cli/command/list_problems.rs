mod list_problems_args;

pub use list_problems_args::ListProblemsArgs;
