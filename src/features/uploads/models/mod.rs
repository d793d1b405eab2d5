mod stored_file;

pub use stored_file::{generate_filename, ListedFile, StoredFile};
