//! # rusty_ratechart
//!
//! Turns raw exchange-rate observations into a per-currency line chart
//! configuration and a summary average.
//!
//! The pipeline is a set of pure functions over an in-memory record set:
//! filter by currency, build the period axis and aligned values, compute
//! the axis range and the average, then assemble a serializable chart spec.
//! Fetching records and drawing pixels are left to external collaborators.
//!
//! ## Example
//!
//! ```rust
//! use rusty_ratechart::prelude::*;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
//! let records = vec![
//!     Observation::new(date, "Jan", "Курс доллара", 70.0),
//!     Observation::new(date, "Feb", "Курс доллара", 75.0),
//! ];
//!
//! let view = compute_view(&records, Currency::USD, &ChartStyle::default());
//! assert_eq!(view.average.as_deref(), Some("72.5"));
//! assert_eq!(view.range.unwrap().max, 76.0);
//! ```

pub mod chart;
pub mod config;
pub mod currency;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod session;
pub mod types;
pub mod view;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::chart::{ChartSpec, ChartStyle, HoverParam};
    pub use crate::config::AppConfig;
    pub use crate::currency::Currency;
    pub use crate::data::{IngestReport, RecordSource, RecordStore};
    pub use crate::error::{RateChartError, Result};
    pub use crate::pipeline::AxisRange;
    pub use crate::session::{ChartSession, SessionState};
    pub use crate::types::Observation;
    pub use crate::view::{compute_view, ViewModel};
}
