pub mod error;
pub mod verification;

pub use error::ErrorResponse;
pub use verification::{
    RequestCodeRequest, RequestCodeResponse, VerifyCodeRequest, VerifyCodeResponse,
};
