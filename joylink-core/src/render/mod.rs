//! Differential dashboard renderer
//!
//! Every value on screen remembers what it last drew. A tick only touches
//! the panel for values that changed, so bus traffic scales with the
//! number of changed fields rather than with the field count.

pub mod dashboard;
pub mod field;
pub mod font;
pub mod painter;

pub use dashboard::{Dashboard, RenderStats};
pub use field::{FieldText, MarkerField, TextField, FIELD_CHARS};
pub use painter::{Canvas, Painter, MARKER_RADIUS};
