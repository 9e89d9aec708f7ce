pub mod column_ops;
pub mod inspection;
pub mod renumber_ops;
pub mod seed;

pub use column_ops::{select_columns_cmd, sort_rows_cmd};
pub use inspection::inspect_cmd;
pub use renumber_ops::renumber_cmd;
pub use seed::seed_cmd;
