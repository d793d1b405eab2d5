use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Stored image names as they appear on disk
    /// - Valid: "a.jpg", "1700000000000_abc.PNG", "x.webp"
    /// - Invalid: "a.pdf", "a.jpg.part", "jpg"
    pub static ref IMAGE_FILENAME_REGEX: Regex =
        Regex::new(r"(?i)\.(jpg|jpeg|png|webp|gif)$").unwrap();

    /// Content item ids, e.g. "proj-1", "design-1719000000000", "sw-cad-2024"
    pub static ref CONTENT_ID_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    /// Organization membership dates, e.g. "2021-04"
    pub static ref YEAR_MONTH_REGEX: Regex = Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").unwrap();
}
