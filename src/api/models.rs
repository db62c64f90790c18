use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    #[serde(rename = "imageBase64")]
    pub image_base64: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
