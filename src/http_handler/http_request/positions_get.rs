use super::positions::PositionsResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct PositionsRequest {}

impl NoBodyHTTPRequestType for PositionsRequest {}

impl HTTPRequestType for PositionsRequest {
    type Response = PositionsResponse;
    fn endpoint(&self) -> &'static str {
        "/positions"
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
}
