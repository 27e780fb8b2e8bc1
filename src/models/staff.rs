// src/models/staff.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::validation::not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[schema(example = 5)]
    pub id: i32,
    #[schema(example = "Silva")]
    pub last_name: String,
    #[schema(example = "Ana")]
    pub first_name: String,
    pub middle_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HireEmployeePayload {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,

    pub middle_name: Option<String>,
}
