//! People API handlers.
//!
//! ```text
//! GET  /people        List every person
//! GET  /people/{id}   Fetch one person
//! POST /people        Create a person after validating the payload
//! ```

use actix_web::{get, post, web, HttpResponse};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::ports::PeopleStoreError;
use crate::domain::{Error, NewPerson, Person, Violation};
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;

/// Body returned when a lookup misses.
pub const PERSON_NOT_FOUND_MESSAGE: &str = "Person with this id wasn't found!";

/// Wire representation of a person.
///
/// Used for both request and response bodies. On input, absent fields take
/// their defaults so that field validation, not body parsing, reports the
/// failure, and a client-supplied `id` is ignored: the store assigns one.
///
/// Example JSON: `{"id":1,"name":"Bob","age":30,"email":"bob@x.com"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PersonView {
    /// Server-assigned identifier; ignored on input.
    #[schema(example = 1)]
    pub id: Option<i32>,
    #[schema(example = "Bob")]
    pub name: String,
    #[schema(example = 30)]
    pub age: i32,
    #[schema(example = "bob@x.com")]
    pub email: String,
}

impl From<Person> for PersonView {
    fn from(person: Person) -> Self {
        let Person {
            id,
            name,
            age,
            email,
        } = person;
        Self {
            id: Some(id),
            name,
            age,
            email,
        }
    }
}

impl TryFrom<PersonView> for NewPerson {
    type Error = Vec<Violation>;

    fn try_from(view: PersonView) -> Result<Self, Self::Error> {
        // The client-supplied id, if any, is deliberately dropped here.
        Self::new(view.name, view.age, view.email)
    }
}

/// Join violations into the aggregate `"<field> - <message>;"` form,
/// reporting every failed constraint rather than the first.
fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| format!("{violation};"))
        .collect()
}

fn store_failure(err: &PeopleStoreError, clock: &dyn Clock) -> ApiError {
    error!(error = %err, "people store failure");
    ApiError::from_domain(Error::internal(err.to_string()), clock)
}

/// List every person in the store's natural order.
#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "People", body = [PersonView]),
        (status = 500, description = "Internal server error", body = crate::inbound::http::ErrorResponse)
    ),
    tags = ["people"],
    operation_id = "listPeople"
)]
#[get("/people")]
pub async fn list_people(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<PersonView>>> {
    let people = state
        .people
        .find_all()
        .await
        .map_err(|err| store_failure(&err, state.clock.as_ref()))?;
    Ok(web::Json(people.into_iter().map(PersonView::from).collect()))
}

/// Fetch a single person by identifier.
#[utoipa::path(
    get,
    path = "/people/{id}",
    params(
        ("id" = i32, Path, description = "Person identifier")
    ),
    responses(
        (status = 200, description = "Person", body = PersonView),
        (status = 404, description = "No person with this id", body = crate::inbound::http::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::inbound::http::ErrorResponse)
    ),
    tags = ["people"],
    operation_id = "getPerson"
)]
#[get("/people/{id}")]
pub async fn get_person(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<PersonView>> {
    let id = id.into_inner();
    let person = state
        .people
        .find_by_id(id)
        .await
        .map_err(|err| store_failure(&err, state.clock.as_ref()))?;
    let Some(person) = person else {
        debug!(id, "person lookup missed");
        return Err(ApiError::from_domain(
            Error::not_found(PERSON_NOT_FOUND_MESSAGE),
            state.clock.as_ref(),
        ));
    };
    Ok(web::Json(PersonView::from(person)))
}

/// Create a person after validating the payload.
///
/// Responds 200 with an empty body on success; the created resource is
/// intentionally not echoed back, preserved for wire compatibility.
#[utoipa::path(
    post,
    path = "/people",
    request_body = PersonView,
    responses(
        (status = 200, description = "Person created; no body returned"),
        (status = 400, description = "Validation failure, every violation joined", body = crate::inbound::http::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::inbound::http::ErrorResponse)
    ),
    tags = ["people"],
    operation_id = "createPerson"
)]
#[post("/people")]
pub async fn create_person(
    state: web::Data<HttpState>,
    payload: web::Json<PersonView>,
) -> ApiResult<HttpResponse> {
    let draft = NewPerson::try_from(payload.into_inner()).map_err(|violations| {
        ApiError::from_domain(
            Error::invalid_request(join_violations(&violations)),
            state.clock.as_ref(),
        )
    })?;
    let person = state
        .people
        .save(draft)
        .await
        .map_err(|err| store_failure(&err, state.clock.as_ref()))?;
    debug!(id = person.id, "person created");
    Ok(HttpResponse::Ok().finish())
}
