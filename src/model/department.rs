use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Department as embedded in a student payload.
///
/// On writes only `id` is read; the other fields are filled from the stored department
/// on every response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub created_at: Option<NaiveDate>,
}
