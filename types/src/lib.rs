mod error;
mod form;
mod ids;
mod lookup;
mod session;
mod summary;

pub mod employee;
pub mod location;
pub mod position;
pub mod shift;

pub use error::{Error, Result};
pub use form::{Form, FormTarget, ValidationError};
pub use ids::{EmployeeId, LocationId, PositionId, ShiftId};
pub use lookup::{Named, name_of};
pub use session::{CurrentUser, SESSION_COOKIE_NAME, Session};
pub use summary::Summary;

// FIXME: We can do this better I think.
#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
