//! Calendar scheduling: day key resolution and template reflow.
//!
//! Both halves are pure functions over their inputs. Neither reads the
//! wall clock, so the same template and start date always produce the same
//! calendar.

mod reflow;
mod resolver;

pub use reflow::reflow;
pub use resolver::{parse_iso_date, parse_weekday, resolve, weekday_name, Resolution};
