//! Value formatting module
//!
//! This module turns chart values into label strings. `ValueFormatter` is the
//! contract; `TimeFormatter`, `FloatFormatter` and `PercentFormatter` are
//! reusable implementations, and the free functions in `presets` apply the
//! default patterns.

mod conversion;
mod float;
mod presets;
mod time;
mod value_formatter;

pub use conversion::{nanos_from_float, place_in_zone, timestamp_from_nanos};
pub use float::format_float;
pub use presets::{
    float_value_formatter, float_value_formatter_with_format, percent_value_formatter,
    time_hour_value_formatter, time_minute_value_formatter, time_value_formatter,
    time_value_formatter_with_format,
};
pub use time::format_timestamp;
pub use value_formatter::{FloatFormatter, PercentFormatter, TimeFormatter, ValueFormatter};
