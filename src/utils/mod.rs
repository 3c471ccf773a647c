pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{candidate_url, is_already_absolute, last_path_segment, resolve_reference};
