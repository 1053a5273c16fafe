//! Chart configuration: assembler, tooltip formatter and style

pub mod spec;
pub mod style;
pub mod tooltip;

pub use spec::{assemble, AxisLabel, ChartSpec, LineChart};
pub use style::{ChartStyle, Grid, TooltipClasses};
pub use tooltip::{HoverParam, TooltipFormatter};
