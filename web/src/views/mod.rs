mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod employees;
pub use employees::Employees;

mod positions;
pub use positions::PositionList;

mod shifts;
pub use shifts::ShiftList;

mod locations;
pub use locations::Locations;
