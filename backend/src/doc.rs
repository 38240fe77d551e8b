//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: the people and health paths plus the wire schemas
//! ([`PersonView`], [`ErrorResponse`]). The generated document feeds
//! Swagger UI in debug builds.
//!
//! [`PersonView`]: crate::inbound::http::people::PersonView
//! [`ErrorResponse`]: crate::inbound::http::ErrorResponse

use utoipa::OpenApi;

use crate::inbound::http::people::PersonView;
use crate::inbound::http::ErrorResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "People backend API",
        description = "HTTP interface for managing person records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::people::list_people,
        crate::inbound::http::people::get_person,
        crate::inbound::http::people::create_person,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(PersonView, ErrorResponse)),
    tags(
        (name = "people", description = "Operations on person records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::schema::Schema;
    use utoipa::openapi::RefOr;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_person_view_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let person_schema = schemas.get("PersonView").expect("PersonView schema");

        for field in ["id", "name", "age", "email"] {
            assert_object_schema_has_field(person_schema, field);
        }
    }

    #[test]
    fn openapi_error_response_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("ErrorResponse").expect("ErrorResponse schema");

        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "timestamp");
    }

    #[test]
    fn openapi_document_references_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in ["/people", "/people/{id}", "/health/ready", "/health/live"] {
            assert!(
                doc.paths.paths.contains_key(path),
                "document should describe '{path}'"
            );
        }
    }
}
