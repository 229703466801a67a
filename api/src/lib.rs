use dioxus::prelude::*;
use types::{
    CurrentUser, EmployeeId, Form, LocationId, PositionId, ShiftId, Summary,
    employee::{Employee, EmployeeForm, Photo},
    location::{Location, LocationForm},
    position::{Position, PositionForm},
    shift::{Shift, ShiftForm},
};

#[post("/api/current-user")]
pub async fn get_current_user() -> ServerFnResult<Option<CurrentUser>> {
    match server::get_session_from_cookie().await {
        Ok(session) => Ok(Some(session.current_user())),
        Err(_) => Ok(None),
    }
}

#[post("/api/summary")]
pub async fn dashboard_summary() -> ServerFnResult<Summary> {
    let remote = server::require_session().await?;
    let api = remote.api();

    Ok(Summary {
        employees: api.list::<Employee>().await?.len(),
        positions: api.list::<Position>().await?.len(),
        shifts: api.list::<Shift>().await?.len(),
        locations: api.list::<Location>().await?.len(),
    })
}

#[post("/api/employees")]
pub async fn list_employees() -> ServerFnResult<Vec<Employee>> {
    let remote = server::require_session().await?;
    Ok(remote.api().list().await?)
}

#[post("/api/employees/get")]
pub async fn get_employee(id: EmployeeId) -> ServerFnResult<Employee> {
    let remote = server::require_session().await?;
    Ok(remote.api().get(id).await?)
}

#[post("/api/employees/create")]
pub async fn create_employee(form: EmployeeForm, photo: Option<Photo>) -> ServerFnResult<()> {
    let remote = server::require_session().await?;
    form.validate_request()?;
    remote.api().create_employee(&form, photo).await?;
    Ok(())
}

#[post("/api/employees/update")]
pub async fn update_employee(
    id: EmployeeId,
    form: EmployeeForm,
    photo: Option<Photo>,
) -> ServerFnResult<()> {
    let remote = server::require_session().await?;
    form.validate_request()?;
    remote.api().update_employee(id, &form, photo).await?;
    Ok(())
}

#[post("/api/employees/delete")]
pub async fn delete_employee(id: EmployeeId) -> ServerFnResult<()> {
    let remote = server::require_session().await?;
    remote.api().delete::<Employee>(id).await?;
    Ok(())
}

#[post("/api/positions")]
pub async fn list_positions() -> ServerFnResult<Vec<Position>> {
    let remote = server::require_session().await?;
    Ok(remote.api().list().await?)
}

#[post("/api/positions/create")]
pub async fn create_position(form: PositionForm) -> ServerFnResult<()> {
    let remote = server::require_session().await?;
    form.validate_request()?;
    remote.api().create::<Position>(&form).await?;
    Ok(())
}

#[post("/api/positions/update")]
pub async fn update_position(id: PositionId, form: PositionForm) -> ServerFnResult<()> {
    let remote = server::require_session().await?;
    form.validate_request()?;
    remote.api().update::<Position>(id, &form).await?;
    Ok(())
}

#[post("/api/positions/delete")]
pub async fn delete_position(id: PositionId) -> ServerFnResult<()> {
    let remote = server::require_session().await?;
    remote.api().delete::<Position>(id).await?;
    Ok(())
}

#[post("/api/shifts")]
pub async fn list_shifts() -> ServerFnResult<Vec<Shift>> {
    let remote = server::require_session().await?;
    Ok(remote.api().list().await?)
}

#[post("/api/shifts/create")]
pub async fn create_shift(form: ShiftForm) -> ServerFnResult<()> {
    let remote = server::require_session().await?;
    form.validate_request()?;
    remote.api().create::<Shift>(&form.normalized()).await?;
    Ok(())
}

#[post("/api/shifts/update")]
pub async fn update_shift(id: ShiftId, form: ShiftForm) -> ServerFnResult<()> {
    let remote = server::require_session().await?;
    form.validate_request()?;
    remote.api().update::<Shift>(id, &form.normalized()).await?;
    Ok(())
}

#[post("/api/shifts/delete")]
pub async fn delete_shift(id: ShiftId) -> ServerFnResult<()> {
    let remote = server::require_session().await?;
    remote.api().delete::<Shift>(id).await?;
    Ok(())
}

/// Newest first.
#[post("/api/locations")]
pub async fn list_locations() -> ServerFnResult<Vec<Location>> {
    let remote = server::require_session().await?;
    let mut locations = remote.api().list().await?;
    types::location::sort_newest_first(&mut locations);
    Ok(locations)
}

#[post("/api/locations/get")]
pub async fn get_location(id: LocationId) -> ServerFnResult<Location> {
    let remote = server::require_session().await?;
    Ok(remote.api().get(id).await?)
}

#[post("/api/locations/create")]
pub async fn create_location(form: LocationForm) -> ServerFnResult<()> {
    let remote = server::require_session().await?;
    form.validate_request()?;
    remote.api().create::<Location>(&form.payload()).await?;
    Ok(())
}

#[post("/api/locations/update")]
pub async fn update_location(id: LocationId, form: LocationForm) -> ServerFnResult<()> {
    let remote = server::require_session().await?;
    form.validate_request()?;
    remote.api().update::<Location>(id, &form.payload()).await?;
    Ok(())
}

#[post("/api/locations/delete")]
pub async fn delete_location(id: LocationId) -> ServerFnResult<()> {
    let remote = server::require_session().await?;
    remote.api().delete::<Location>(id).await?;
    Ok(())
}
