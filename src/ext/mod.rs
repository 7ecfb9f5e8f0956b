mod path_ext;

pub use path_ext::{PathExt, is_hidden_name};
