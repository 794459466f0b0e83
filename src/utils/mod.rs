pub(crate) mod date;
pub(crate) mod logging;

pub(crate) use date::{format_date, parse_date};
pub(crate) use logging::init_logging;
