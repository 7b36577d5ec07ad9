pub mod decimal_math;
pub mod number_format;
pub mod time_utils;
