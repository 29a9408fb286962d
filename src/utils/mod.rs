pub mod logging;
pub mod number_format;
pub mod shutdown;
